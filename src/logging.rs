//! File-backed tracing setup. The terminal belongs to the TUI, so nothing is
//! ever written to stdout/stderr once logging is initialized.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "firetree=info";

pub fn default_log_path() -> Option<PathBuf> {
    crate::config::firetree_home().map(|h| h.join("logs").join("firetree.log"))
}

/// Installs the global subscriber, appending to `path`.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("install tracing subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
