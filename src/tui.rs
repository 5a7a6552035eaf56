use std::sync::Arc;

use anyhow::Result;

use crate::config::AppConfig;
use crate::store::DocumentStore;

pub struct TuiRunOptions {
    pub config: AppConfig,
    pub store: Arc<dyn DocumentStore>,
    /// Project to select on startup.
    pub project: Option<String>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
