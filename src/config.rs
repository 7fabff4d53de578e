use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::paths::config_path;

/// Top-level configuration structure loaded from `config.toml`.
///
/// The file supplies defaults for authenticating against remotes.
/// Currently, only the `auth` section is supported.
///
/// Example TOML:
/// ```toml
/// [auth]
/// ssh_key  = "/home/me/.ssh/id_ed25519"
/// username = "git"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Default credentials applied when no flags are given on the command line.
///
/// All fields are optional; an empty section means "let the transport
/// negotiate" (ssh-agent, credential helpers, anonymous http).
#[derive(Debug, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub ssh_key: Option<PathBuf>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Load and parse `config.toml` into a [`Config`] structure.
///
/// # Errors
/// - Returns an error if parsing the TOML fails.
///
/// # Notes
/// - This always resolves the path using [`config_path()`].
/// - A missing file is not an error; it yields the default (empty) config.
pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    let txt = match fs::read_to_string(&p) {
        Ok(txt) => txt,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", p.display())),
    };
    let cfg: Config = toml::from_str(&txt).context("failed to parse config.toml")?;
    Ok(cfg)
}
