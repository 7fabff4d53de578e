use anyhow::{Context, Result};
use git2::{Cred, Direction, Remote, RemoteCallbacks};
use std::path::PathBuf;
use tracing::info;

/// Credential source for a remote listing.
///
/// Passed through to the transport as a `git2` credential callback; the
/// listing itself never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAuth {
    /// Try the ssh-agent for the URL's username, then fall back to libgit2's
    /// default credential negotiation (credential helpers, anonymous http).
    Default,
    /// Authenticate with an on-disk private key.
    SshKey {
        username: Option<String>,
        private_key: PathBuf,
        passphrase: Option<String>,
    },
    /// Authenticate with a username and password (or token) over http(s).
    UserPass { username: String, password: String },
}

impl RemoteAuth {
    /// Build the `RemoteCallbacks` with this credential source installed.
    fn callbacks(&self) -> RemoteCallbacks<'_> {
        let mut cb = RemoteCallbacks::new();
        match self {
            RemoteAuth::Default => {
                cb.credentials(|_url, username_from_url, _allowed| {
                    Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                        .or_else(|_| Cred::default())
                });
            }
            RemoteAuth::SshKey {
                username,
                private_key,
                passphrase,
            } => {
                cb.credentials(move |_url, username_from_url, _allowed| {
                    let user = username.as_deref().or(username_from_url).unwrap_or("git");
                    Cred::ssh_key(user, None, private_key, passphrase.as_deref())
                });
            }
            RemoteAuth::UserPass { username, password } => {
                cb.credentials(move |_url, _username_from_url, _allowed| {
                    Cred::userpass_plaintext(username, password)
                });
            }
        }
        cb
    }
}

/// List the branch refs a remote advertises, without cloning anything.
///
/// A detached remote handle is created for `url` (no repository, no disk
/// footprint), connected in the fetch direction with `auth` supplying
/// credentials, and its ref advertisement is read. Only direct (non-symbolic)
/// refs under `refs/heads/` are kept, in the order the transport returned
/// them. No object data is transferred, so this is cheap regardless of the
/// size of the remote repository.
///
/// # Errors
/// Returns an error if connecting or listing fails (bad credentials, network
/// unreachable, unknown host, protocol error). No retry is attempted.
///
/// # Panics
/// Panics if the detached remote handle cannot be created. That only happens
/// on a broken libgit2 environment, never on user input, and is kept out of
/// the recoverable error path.
pub fn list_remote_branches(url: &str, auth: &RemoteAuth) -> Result<Vec<String>> {
    info!("creating detached remote");
    let mut remote = match Remote::create_detached(url) {
        Ok(r) => r,
        Err(e) => panic!("failed to create detached remote for {url}: {e}"),
    };

    info!(%url, "git ls-remote");
    let connection = remote
        .connect_auth(Direction::Fetch, Some(auth.callbacks()), None)
        .with_context(|| format!("git ls-remote {url}"))?;

    let mut branches = Vec::new();
    for head in connection
        .list()
        .with_context(|| format!("git ls-remote {url}"))?
    {
        if head.symref_target().is_none() && head.name().starts_with("refs/heads/") {
            branches.push(head.name().to_string());
        }
    }
    Ok(branches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, RepositoryInitOptions, Signature};
    use tempfile::TempDir;

    /// Build a local repository with branches `main` and `dev` and tag `v1.0`.
    fn fixture_remote() -> TempDir {
        let td = TempDir::new().unwrap();
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(td.path(), &opts).unwrap();

        let sig = Signature::now("tester", "tester@example.com").unwrap();
        let tree_id = {
            let mut index = repo.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_id).unwrap();
        let commit_id = repo
            .commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
            .unwrap();
        let commit = repo.find_commit(commit_id).unwrap();
        repo.branch("dev", &commit, false).unwrap();
        repo.tag_lightweight("v1.0", commit.as_object(), false).unwrap();
        td
    }

    #[test]
    fn lists_branches_and_skips_tags_and_head() {
        let td = fixture_remote();
        let url = td.path().to_str().unwrap().to_string();

        let mut branches = list_remote_branches(&url, &RemoteAuth::Default).unwrap();
        branches.sort();
        assert_eq!(branches, vec!["refs/heads/dev", "refs/heads/main"]);
    }

    #[test]
    fn unreachable_remote_is_a_recoverable_error() {
        let td = TempDir::new().unwrap();
        let url = td.path().join("no-such-repo").display().to_string();

        let res = list_remote_branches(&url, &RemoteAuth::Default);
        assert!(res.is_err());
    }
}
