use anyhow::Result;

/// Providers with a known mapping between HTTPS and scp-style SSH prefixes.
///
/// Each entry is `(https_prefix, ssh_prefix)`. The prefixes are disjoint, so
/// at most one entry fires per input. Extend the table to teach the rewriters
/// about another host; call sites need no change.
const PROVIDERS: &[(&str, &str)] = &[
    ("https://github.com/", "git@github.com:"),
    ("https://gitlab.com/", "git@gitlab.com:"),
    ("https://git.coding.net/", "git@git.coding.net:"),
    ("https://gitee.com/", "git@gitee.com:"),
    ("https://bitbucket.org/", "git@bitbucket.org:"),
];

/// Direction for [`cmd_normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlForm {
    Ssh,
    Https,
}

/// Rewrite a hosted URL to its scp-style SSH form.
///
/// Lower-cases the input, swaps the HTTPS prefix of a known provider for its
/// SSH counterpart, trims one trailing `/`, and appends `.git` if missing.
/// URLs on unknown hosts pass through with only the case-fold, slash-trim,
/// and suffix normalization applied; this function never fails.
///
/// Example:
/// ```text
/// to_ssh("HTTPS://GitHub.com/org/repo") == "git@github.com:org/repo.git"
/// ```
pub fn to_ssh(url: &str) -> String {
    rewrite(url, PROVIDERS.iter().map(|&(https, ssh)| (https, ssh)))
}

/// Rewrite a hosted URL to its HTTPS form.
///
/// The mirror image of [`to_ssh`]: swaps a known provider's SSH prefix for
/// its HTTPS counterpart, with the same case, slash, and suffix policy.
///
/// Example:
/// ```text
/// to_https("git@gitlab.com:org/repo.git") == "https://gitlab.com/org/repo.git"
/// ```
pub fn to_https(url: &str) -> String {
    rewrite(url, PROVIDERS.iter().map(|&(https, ssh)| (ssh, https)))
}

/// Shared rewrite pass over `(from, to)` prefix pairs.
fn rewrite(url: &str, pairs: impl Iterator<Item = (&'static str, &'static str)>) -> String {
    let mut out = url.to_lowercase();
    for (from, to) in pairs {
        out = out.replacen(from, to, 1);
    }

    if out.ends_with('/') {
        out.pop();
    }

    if !out.ends_with(".git") {
        out.push_str(".git");
    }

    out
}

/// CLI command: print the rewritten URL on stdout.
pub fn cmd_normalize(url: &str, form: UrlForm) -> Result<()> {
    let out = match form {
        UrlForm::Ssh => to_ssh(url),
        UrlForm::Https => to_https(url),
    };
    println!("{out}");
    Ok(())
}
