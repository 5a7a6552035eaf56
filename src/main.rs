use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use firetree::config::AppConfig;
use firetree::store::{RestStore, resolve_token};
use firetree::tui::{self, TuiRunOptions};

#[derive(Parser)]
#[command(name = "firetree")]
#[command(about = "Terminal browser for Firestore projects", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.firetree/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Project to open on startup
    #[arg(long)]
    project: Option<String>,

    /// Override the Firestore REST base URL (e.g. an emulator)
    #[arg(long)]
    base_url: Option<String>,

    /// Log file (defaults to ~/.firetree/logs/firetree.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.base_url {
        config.store.base_url = url;
    }

    let log_path = match cli.log_file {
        Some(p) => p,
        None => firetree::logging::default_log_path().context("resolve home directory")?,
    };
    firetree::logging::init_logging(&log_path)?;

    let token = resolve_token(&config.store)?;
    let store = RestStore::new(config.store.clone(), token)?;
    tracing::info!(
        base_url = %config.store.base_url,
        emulator = config.store.is_emulator(),
        "store ready"
    );

    tui::run_with_options(TuiRunOptions {
        config,
        store: Arc::new(store),
        project: cli.project,
    })
}
