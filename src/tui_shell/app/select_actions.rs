use super::*;

pub(super) fn toggle_select(app: &mut App, _key: KeyEvent) {
    if app.selection.is_active() {
        app.selection.exit();
        return;
    }
    if !app.focus.is(Panel::Tree) || app.tree.is_empty() {
        return;
    }
    let cursor = app.tree_idx;
    let view = derive(
        app.tree.nodes(),
        app.filters.active_text(Panel::Tree),
        |n| [n.name.as_str(), n.path.as_str()],
    );
    app.selection.enter(cursor, &view);
    app.log("select", "Select mode on", ActivityStatus::Success);
}

pub(super) fn exit_select(app: &mut App, _key: KeyEvent) {
    app.selection.exit();
}

/// Enter or Tab in select mode: read the batch in details. The range is
/// kept, so Esc from details lands back in select mode.
pub(super) fn show_details(app: &mut App, _key: KeyEvent) {
    let change = app.focus.enter_details();
    app.on_focus_change(change);
}

/// Space in select mode: show every selected document. Cached paths are
/// used as is; the rest are fetched together and posted as one update.
pub(super) fn fetch_selection(app: &mut App, _key: KeyEvent) {
    let paths = app.selection.selected_paths(&app.tree_view());
    if paths.is_empty() {
        app.log("select", "No documents selected", ActivityStatus::Error);
        return;
    }

    let mut cached = Vec::new();
    let mut missing = Vec::new();
    for path in paths {
        match app.cache.get(&path) {
            Some(data) => cached.push((path, data.clone())),
            None => missing.push(path),
        }
    }

    if missing.is_empty() {
        app.bridge.invalidate(&Target::Details);
        app.apply(Update::Batch {
            cached,
            fetched: Vec::new(),
        });
        return;
    }
    let Some(project) = app.require_project("select") else {
        return;
    };

    app.details = DetailsContent::Loading(format!("Fetching {} documents...", missing.len()));
    app.details_scroll = 0;
    app.log(
        "select",
        format!("Fetching {} documents...", missing.len()),
        ActivityStatus::Running,
    );
    let store = Arc::clone(&app.store);
    app.bridge.spawn_batch(
        Target::Details,
        missing,
        move |path: String| {
            let result = store.get_document(&project, &path);
            (path, result)
        },
        move |fetched| Update::Batch { cached, fetched },
    );
}
