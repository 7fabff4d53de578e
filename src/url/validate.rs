use anyhow::{Result, bail};
use colored::Colorize;
use regex::Regex;
use std::sync::LazyLock;

static GENERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((git|ssh|https?)|(git@[\w.]+))(:(//)?)([\w.@:/~-]+)/?$").unwrap()
});

static HTTP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?)(:(//)?)([\w.@:/~-]+)/?$").unwrap());

static SSH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((git|ssh)|(git@[\w.]+))(:(//)?)([\w.@:/~-]+)/?$").unwrap()
});

/// True if `url` is shaped like a git remote URL of any supported transport.
///
/// Accepts `git://`, `ssh://`, `http://`, `https://`, and the scp-style
/// `git@host:path` form. The pattern is deliberately loose: it is meant for
/// routing input to the right handler, not for security-sensitive validation.
pub fn is_git_url(url: &str) -> bool {
    GENERIC_RE.is_match(url)
}

/// True if `url` is shaped like an http(s) git remote URL.
pub fn is_http_git_url(url: &str) -> bool {
    HTTP_RE.is_match(url)
}

/// True if `url` is shaped like an ssh git remote URL,
/// including the scp-style `git@host:path` form.
pub fn is_ssh_git_url(url: &str) -> bool {
    SSH_RE.is_match(url)
}

/// CLI command: classify a URL and print a verdict.
///
/// With `--http` or `--ssh` the check is restricted to that transport;
/// otherwise any supported form is accepted.
///
/// # Errors
/// - Returns an error (nonzero exit) if the URL does not match.
pub fn cmd_check(url: &str, http: bool, ssh: bool) -> Result<()> {
    let (ok, kind) = if http {
        (is_http_git_url(url), "http git url")
    } else if ssh {
        (is_ssh_git_url(url), "ssh git url")
    } else {
        (is_git_url(url), "git url")
    };
    if !ok {
        bail!("not a {}: {}", kind, url);
    }
    println!("{} {}", "ok".green(), kind);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_remote_forms() {
        for url in [
            "https://github.com/zsh-users/zsh-autosuggestions",
            "http://git.example.com/team/tool",
            "git@github.com:zsh-users/zsh-autosuggestions.git",
            "ssh://git@gitlab.com/group/project.git",
            "git://git.kernel.org/pub/scm/git/git",
            "https://gitee.com/org/repo/",
        ] {
            assert!(is_git_url(url), "should accept {url}");
        }
    }

    #[test]
    fn rejects_disallowed_characters() {
        for url in [
            "https://github.com/org/repo name",
            "https://github.com/org/repo#readme",
            "https://github.com/org/repo?tab=1",
            "not a url at all",
            "",
        ] {
            assert!(!is_git_url(url), "should reject {url:?}");
        }
    }

    #[test]
    fn http_check_excludes_ssh_forms() {
        assert!(is_http_git_url("https://github.com/org/repo.git"));
        assert!(is_http_git_url("http://github.com/org/repo"));
        assert!(!is_http_git_url("git@github.com:org/repo.git"));
        assert!(!is_http_git_url("ssh://git@github.com/org/repo"));
    }

    #[test]
    fn ssh_check_excludes_http_forms() {
        assert!(is_ssh_git_url("git@github.com:org/repo.git"));
        assert!(is_ssh_git_url("ssh://git@github.com/org/repo"));
        assert!(is_ssh_git_url("git://git.kernel.org/pub/scm/git/git"));
        assert!(!is_ssh_git_url("https://github.com/org/repo.git"));
    }

    #[test]
    fn specific_checks_imply_generic_check() {
        for url in [
            "https://github.com/org/repo",
            "http://example.com/a/b",
            "git@bitbucket.org:org/repo.git",
            "ssh://git@gitee.com/org/repo",
        ] {
            if is_http_git_url(url) || is_ssh_git_url(url) {
                assert!(is_git_url(url), "generic check should cover {url}");
            }
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert!(is_git_url("https://github.com/org/repo/"));
        assert!(is_http_git_url("https://github.com/org/repo/"));
    }
}
