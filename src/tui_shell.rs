use anyhow::Result;

use crate::tui::TuiRunOptions;

mod activity;
mod app;
mod bridge;
mod cache;
mod context;
mod filter;
mod focus;
mod help;
mod input;
mod jq;
mod keymap;
mod modal;
mod query_builder;
mod selection;
mod theme;
mod time_utils;
mod tree;

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    app::run(opts)
}
