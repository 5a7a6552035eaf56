pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;
pub mod tui;

mod tui_shell;
