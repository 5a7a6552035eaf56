use super::*;

/// `F`: builder for the collection node under the tree cursor, else for the
/// loaded top-level collection. A draft is reused for the same collection.
pub(super) fn open_query(app: &mut App, _key: KeyEvent) {
    let under_cursor = match app.cursor_node() {
        Some((_, node)) if app.focus.is(Panel::Tree) && !node.is_document() => {
            Some(node.path.clone())
        }
        _ => None,
    };
    let (collection, node) = match (under_cursor, app.collection.clone()) {
        (Some(path), _) => (path.clone(), Some(path)),
        (None, Some(path)) => (path, None),
        (None, None) => {
            app.log("query", "No collection selected", ActivityStatus::Error);
            return;
        }
    };

    let draft = match app.last_draft.take() {
        Some(d) if d.collection_path == collection => d,
        _ => QueryDraft::new(&collection),
    };
    app.selection.exit();
    app.query = Some(QueryBuilder::open(draft, node));
}

impl App {
    fn builder_mut(&mut self) -> Option<&mut QueryBuilder> {
        self.query.as_mut()
    }

    fn execute_query(&mut self) {
        let Some(builder) = self.query.take() else {
            return;
        };
        let Some(project) = self.require_project("query") else {
            self.query = Some(builder);
            return;
        };
        let QueryBuilder { draft, node, .. } = builder;
        let request = translate(&draft);
        let collection = draft.collection_path.clone();
        self.last_draft = Some(draft);

        self.log(
            "query",
            format!("Querying {}...", collection),
            ActivityStatus::Running,
        );
        let target = match &node {
            Some(path) => Target::Node(path.clone()),
            None => {
                self.tree_loading = true;
                Target::TreeRoot
            }
        };
        let store = Arc::clone(&self.store);
        self.bridge.spawn(target, move || {
            let result = store.run_query(&project, &collection, &request);
            Update::QueryResults {
                collection,
                node,
                result,
            }
        });
    }
}

pub(super) fn grid_up(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.draft.move_up();
    }
}

pub(super) fn grid_down(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.draft.move_down();
    }
}

pub(super) fn grid_left(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.draft.move_left();
    }
}

pub(super) fn grid_right(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.draft.move_right();
    }
}

pub(super) fn next_field(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.draft.next_field();
    }
}

pub(super) fn prev_field(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.draft.prev_field();
    }
}

pub(super) fn activate(app: &mut App, _key: KeyEvent) {
    let outcome = match app.builder_mut() {
        Some(b) => b.activate(),
        None => return,
    };
    if outcome == BuilderOutcome::Execute {
        app.execute_query();
    }
}

pub(super) fn add_filter(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.draft.add_filter();
    }
}

pub(super) fn delete_filter(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.draft.remove_active_filter();
    }
}

/// Closing keeps the draft for the next open on the same collection.
pub(super) fn close(app: &mut App, _key: KeyEvent) {
    if let Some(builder) = app.query.take() {
        app.last_draft = Some(builder.draft);
    }
}

pub(super) fn input_char(app: &mut App, key: KeyEvent) {
    let KeyCode::Char(c) = key.code else {
        return;
    };
    if let Some(input) = app.builder_mut().and_then(|b| b.input_mut()) {
        input.insert_char(c);
    }
}

pub(super) fn input_backspace(app: &mut App, _key: KeyEvent) {
    if let Some(input) = app.builder_mut().and_then(|b| b.input_mut()) {
        input.backspace();
    }
}

pub(super) fn input_delete(app: &mut App, _key: KeyEvent) {
    if let Some(input) = app.builder_mut().and_then(|b| b.input_mut()) {
        input.delete();
    }
}

pub(super) fn input_left(app: &mut App, _key: KeyEvent) {
    if let Some(input) = app.builder_mut().and_then(|b| b.input_mut()) {
        input.move_left();
    }
}

pub(super) fn input_right(app: &mut App, _key: KeyEvent) {
    if let Some(input) = app.builder_mut().and_then(|b| b.input_mut()) {
        input.move_right();
    }
}

pub(super) fn input_commit(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.commit_edit();
    }
}

/// Esc in a cell edit or the option popup: back to the grid unchanged.
pub(super) fn back_to_grid(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.cancel();
    }
}

pub(super) fn option_up(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.popup_move(-1);
    }
}

pub(super) fn option_down(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.popup_move(1);
    }
}

pub(super) fn option_commit(app: &mut App, _key: KeyEvent) {
    if let Some(b) = app.builder_mut() {
        b.commit_choice();
    }
}
