//! Remote ref listing layer.
//!
//! This module wraps the actual backend implementation (`git2_backend`)
//! and re-exports only the stable public API (`list_remote_branches` and
//! [`RemoteAuth`]).
//!
//! The idea is to hide internal implementation details (currently based on the
//! `git2` crate) so that future backends or alternative implementations could
//! be swapped in without affecting the rest of the codebase.

mod git2_backend;

pub use git2_backend::{RemoteAuth, list_remote_branches};

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::config::{Config, load_config};
use crate::url::is_git_url;

/// CLI command: print the branches a remote advertises, one per line.
///
/// The URL is first run through [`is_git_url`] so that obviously malformed
/// input is rejected before any network traffic. Credentials come from the
/// command-line flags, falling back to `config.toml` defaults, falling back
/// to transport negotiation (ssh-agent, credential helpers).
///
/// # Errors
/// - Returns an error if the URL does not look like a git remote URL.
/// - Returns an error if the config file exists but cannot be parsed.
/// - Returns an error if the remote cannot be reached or refuses the
///   supplied credentials.
pub fn cmd_ls_remote(
    url: &str,
    ssh_key: Option<PathBuf>,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    if !is_git_url(url) {
        bail!("not a git url: {}", url);
    }
    let cfg = load_config()?;
    let auth = resolve_auth(&cfg, ssh_key, username, password);
    let branches = list_remote_branches(url, &auth)?;
    for b in &branches {
        println!("{b}");
    }
    Ok(())
}

/// Pick the credential source for a listing.
///
/// Precedence: explicit flags, then `config.toml` defaults, then
/// [`RemoteAuth::Default`]. A password always selects basic auth.
fn resolve_auth(
    cfg: &Config,
    ssh_key: Option<PathBuf>,
    username: Option<String>,
    password: Option<String>,
) -> RemoteAuth {
    let username = username.or_else(|| cfg.auth.username.clone());
    if let Some(password) = password {
        return RemoteAuth::UserPass {
            username: username.unwrap_or_else(|| "git".to_string()),
            password,
        };
    }
    if let Some(private_key) = ssh_key.or_else(|| cfg.auth.ssh_key.clone()) {
        return RemoteAuth::SshKey {
            username,
            private_key,
            passphrase: None,
        };
    }
    RemoteAuth::Default
}
