//! # gitprobe
//!
//! **gitprobe** is a small companion tool for working with git remote URLs.
//!
//! Features:
//! - `gitprobe check` classifies a string as a git remote URL (generic, HTTP, or SSH)
//! - `gitprobe normalize` rewrites hosted URLs between their HTTPS and SSH forms
//! - `gitprobe ls-remote` lists the branches a remote advertises, without
//!   cloning or touching the disk
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gitprobe::{UrlForm, cmd_check, cmd_ls_remote, cmd_normalize};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "gitprobe",
    version,
    about = "gitprobe - git remote URL checks, rewrites, and branch listing",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

/// Available subcommands.
///
/// Each variant corresponds to a subcommand of `gitprobe`.
#[derive(Subcommand, Debug)]
enum Cmd {
    /// Check whether a string looks like a git remote URL
    Check {
        /// URL to classify
        url: String,
        /// Accept only http(s) URLs
        #[arg(long, conflicts_with = "ssh")]
        http: bool,
        /// Accept only ssh/scp-style URLs
        #[arg(long)]
        ssh: bool,
    },
    /// Rewrite a hosted URL between its HTTPS and SSH forms
    Normalize {
        /// URL to rewrite
        url: String,
        /// Target form
        #[arg(long, value_enum)]
        to: FormArg,
    },
    /// List the branches a remote advertises (no clone, no disk)
    LsRemote {
        /// Remote URL to query
        url: String,
        /// Private key to authenticate with (overrides config)
        #[arg(long)]
        ssh_key: Option<PathBuf>,
        /// Username for the remote (overrides config)
        #[arg(long)]
        username: Option<String>,
        /// Password or token for http(s) remotes
        #[arg(long)]
        password: Option<String>,
    },
}

/// Target form for `normalize`.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormArg {
    Ssh,
    Https,
}

impl From<FormArg> for UrlForm {
    fn from(f: FormArg) -> Self {
        match f {
            FormArg::Ssh => UrlForm::Ssh,
            FormArg::Https => UrlForm::Https,
        }
    }
}

/// CLI entry point.
///
/// Installs the tracing subscriber, parses arguments with `clap`, and
/// executes the selected subcommand.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Check { url, http, ssh } => cmd_check(&url, http, ssh),
        Cmd::Normalize { url, to } => cmd_normalize(&url, to.into()),
        Cmd::LsRemote {
            url,
            ssh_key,
            username,
            password,
        } => cmd_ls_remote(&url, ssh_key, username, password),
    }
}
