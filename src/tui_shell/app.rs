use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use serde_json::Value;

use crate::model::{Collection, Document, Project, ProjectDetails};
use crate::query::{QueryDraft, translate};
use crate::store::DocumentStore;
use crate::tui::TuiRunOptions;

use super::activity::{ActivityEntry, ActivityLog, ActivityStatus};
use super::bridge::{Bridge, Target};
use super::cache::DocumentCache;
use super::context::{Mode, UiFlags, resolve_mode};
use super::filter::{FilterEngine, backing_index, derive, matches, view_index};
use super::focus::{FocusChange, FocusController, Panel};
use super::help::{HelpItem, HelpPopup};
use super::jq;
use super::keymap::{KeyPattern, Keymap};
use super::modal;
use super::query_builder::{BuilderOutcome, QueryBuilder};
use super::selection::SelectionModel;
use super::theme::{Icons, Theme};
use super::time_utils::fmt_ts_clock;
use super::tree::{Node, NodeKind, TreeModel};

mod bindings;
mod details;
mod event_loop;
mod filter_actions;
mod loaders;
mod nav;
mod overlay_actions;
mod query_actions;
mod render;
mod select_actions;
mod updates;
mod views;

use self::bindings::{Handler, default_keymap, help_items};
use self::details::DetailsContent;
use self::updates::Update;

pub(super) fn run(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut app = App::new(opts)?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    store: Arc<dyn DocumentStore>,
    page_size: u32,
    theme: Theme,
    icons: Icons,

    projects: Vec<Project>,
    projects_idx: usize,
    projects_loading: bool,
    project: Option<String>,
    // Project row showing its details inline; folds when focus moves on.
    project_expanded: Option<String>,

    collections: Vec<Collection>,
    collections_idx: usize,
    collection: Option<String>,

    tree: TreeModel,
    tree_idx: usize,
    tree_loading: bool,

    details: DetailsContent,
    details_scroll: usize,

    filters: FilterEngine,
    focus: FocusController,
    selection: SelectionModel,

    query: Option<QueryBuilder>,
    last_draft: Option<QueryDraft>,

    help: Option<HelpPopup<Handler>>,
    log_open: bool,
    log_scroll: usize,

    activity: ActivityLog,
    cache: DocumentCache,
    bridge: Bridge<Update>,
    keymap: Keymap<Handler>,

    quit: bool,
}

impl App {
    fn new(opts: TuiRunOptions) -> Result<Self> {
        let TuiRunOptions {
            config,
            store,
            project,
        } = opts;

        let mut app = Self {
            store,
            page_size: config.store.page_size,
            theme: Theme::from_config(&config.theme),
            icons: Icons::from_config(&config.icons),
            projects: Vec::new(),
            projects_idx: 0,
            projects_loading: false,
            project: None,
            project_expanded: None,
            collections: Vec::new(),
            collections_idx: 0,
            collection: None,
            tree: TreeModel::default(),
            tree_idx: 0,
            tree_loading: false,
            details: DetailsContent::Empty,
            details_scroll: 0,
            filters: FilterEngine::default(),
            focus: FocusController::default(),
            selection: SelectionModel::default(),
            query: None,
            last_draft: None,
            help: None,
            log_open: false,
            log_scroll: 0,
            activity: ActivityLog::default(),
            cache: DocumentCache::default(),
            bridge: Bridge::new()?,
            keymap: default_keymap(),
            quit: false,
        };

        app.load_projects();
        if let Some(id) = project {
            app.select_project_id(&id);
        }
        Ok(app)
    }

    fn ui_flags(&self) -> UiFlags {
        UiFlags {
            help_open: self.help.is_some(),
            log_open: self.log_open,
            builder: self.query.as_ref().map(|q| q.phase()),
            select_active: self.selection.is_active() && self.focus.is(Panel::Tree),
            filter_editing: self.filters.is_editing(),
        }
    }

    fn mode(&self) -> Mode {
        resolve_mode(&self.ui_flags())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let mode = self.mode();
        if let Some(handler) = self.keymap.lookup(mode, &key) {
            handler(self, key);
        }
    }

    fn log(&mut self, label: &str, description: impl Into<String>, status: ActivityStatus) {
        self.activity.push(label, description, status);
    }

    fn log_error(&mut self, label: &str, err: &anyhow::Error) {
        self.activity
            .push(label, format!("{:#}", err), ActivityStatus::Error);
    }

    /// Current project id, or an error entry when none is selected.
    fn require_project(&mut self, label: &str) -> Option<String> {
        if self.project.is_none() {
            self.log(label, "No project selected", ActivityStatus::Error);
        }
        self.project.clone()
    }

    fn on_focus_change(&mut self, change: Option<FocusChange>) {
        let Some(change) = change else {
            return;
        };
        if change.from == Panel::Projects && change.to != Panel::Details {
            self.project_expanded = None;
        }
        if change.to == Panel::Details {
            self.details_scroll = 0;
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
