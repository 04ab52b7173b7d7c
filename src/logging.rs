use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub(crate) const ENV_LOG: &str = "CASHBOARD_LOG";
const DEFAULT_DIRECTIVE: &str = "cashboard=info";

/// Send tracing output to `<data dir>/cashboard.log`.
///
/// The TUI owns stdout, so nothing is ever written to the terminal.
pub(crate) fn init(data_dir: &Path) -> Result<PathBuf> {
    let path = data_dir.join("cashboard.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(path)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
