mod api;
mod config;
mod format;
mod logging;
mod models;
mod run;
mod ui;
mod view;

use anyhow::{Context, Result};
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();

    let data_dir = get_data_dir()?;
    let log_path = logging::init(&data_dir)?;

    let (config, rest) = config::Config::load(&args)?;
    info!(
        api = %config.api_url,
        currency = config.currency.code,
        log = %log_path.display(),
        "starting cashboard"
    );

    if rest.is_empty() {
        run::as_tui(&config)
    } else {
        run::as_cli(&rest, &config)
    }
}

fn get_data_dir() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "cashboard", "Cashboard")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}
