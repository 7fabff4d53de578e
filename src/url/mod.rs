//! Git remote URL classification and rewriting.
//!
//! Two independent concerns live here:
//! - `validate`: regex predicates that decide whether a string is shaped like
//!   a git remote URL (generic, http-only, ssh-only).
//! - `normalize`: find/replace rewriting between the HTTPS and SSH forms of
//!   well-known hosting providers.
//!
//! Both are total over strings: classification yields a bool, rewriting always
//! returns a string. Neither touches the network or the filesystem.

mod normalize;
mod validate;

pub use normalize::{UrlForm, cmd_normalize, to_https, to_ssh};
pub use validate::{cmd_check, is_git_url, is_http_git_url, is_ssh_git_url};
