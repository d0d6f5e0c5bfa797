//! Tracing setup for the gistlink binaries.
//!
//! Events go to `gistlink.log` in the XDG state directory. When that file
//! cannot be opened the subscriber writes to stderr instead, so a read-only
//! home never stops a page from rendering. The filter comes from
//! `GISTLINK_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,gistlink=debug,gistlink_core=debug";

/// Filter variable that takes precedence over `RUST_LOG`.
pub const LOG_ENV: &str = "GISTLINK_LOG";

const LOG_FILE: &str = "gistlink.log";

/// Where the installed subscriber writes.
#[derive(Debug)]
pub enum LogTarget {
    File(PathBuf),
    /// The log file was unusable; `reason` says why.
    Stderr { reason: anyhow::Error },
}

/// First non-blank of `gistlink_log` and `rust_log`, else [`DEFAULT_FILTER`].
pub fn filter_directives(gistlink_log: Option<&str>, rust_log: Option<&str>) -> String {
    [gistlink_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

fn env_filter() -> EnvFilter {
    let directives = filter_directives(
        std::env::var(LOG_ENV).ok().as_deref(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
    );
    EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("gistlink: ignoring log filter `{directives}`: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

fn open_log_file() -> Result<(PathBuf, File)> {
    let dirs = xdg::BaseDirectories::with_prefix("gistlink")?;
    let path = dirs
        .place_state_file(LOG_FILE)
        .context("create log directory")?;
    let file = open_append(&path)?;
    Ok((path, file))
}

/// Installs the global subscriber and reports where it writes.
///
/// Only fails when a subscriber is already installed.
pub fn init() -> Result<LogTarget> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);

    let (target, installed) = match open_log_file() {
        Ok((path, file)) => (
            LogTarget::File(path),
            builder.with_writer(Mutex::new(file)).try_init(),
        ),
        Err(reason) => (
            LogTarget::Stderr { reason },
            builder.with_writer(std::io::stderr).try_init(),
        ),
    };
    installed.map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    if let LogTarget::File(path) = &target {
        tracing::info!(path = %path.display(), "gistlink logging initialized");
    }
    Ok(target)
}
