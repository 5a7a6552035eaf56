use super::*;

impl App {
    pub(super) fn load_projects(&mut self) {
        self.projects_loading = true;
        self.log("projects", "Loading projects...", ActivityStatus::Running);
        let store = Arc::clone(&self.store);
        self.bridge
            .spawn(Target::Projects, move || Update::Projects(store.list_projects()));
    }

    /// Makes `id` current and loads its collections. Everything derived from
    /// the previous project is dropped.
    pub(super) fn select_project_id(&mut self, id: &str) {
        self.project = Some(id.to_string());
        self.project_expanded = None;
        self.collections.clear();
        self.collections_idx = 0;
        self.collection = None;
        self.tree.clear();
        self.tree_idx = 0;
        self.tree_loading = false;
        self.selection.exit();
        self.details = DetailsContent::Empty;
        self.details_scroll = 0;
        self.query = None;
        self.last_draft = None;
        self.filters.clear(Panel::Collections);
        self.filters.clear(Panel::Tree);
        self.bridge.invalidate(&Target::TreeRoot);
        self.bridge.invalidate(&Target::Details);

        self.log(
            "collections",
            format!("Loading collections for {}...", id),
            ActivityStatus::Running,
        );
        let store = Arc::clone(&self.store);
        let project = id.to_string();
        self.bridge.spawn(Target::Collections, move || {
            let result = store.list_collections(&project);
            Update::Collections { project, result }
        });
    }

    pub(super) fn fetch_project_details(&mut self, id: &str) {
        self.details = DetailsContent::Loading(format!("Loading project {}...", id));
        self.details_scroll = 0;
        let store = Arc::clone(&self.store);
        let project = id.to_string();
        self.bridge.spawn(Target::Details, move || {
            let result = store.project_details(&project);
            Update::ProjectDetails { project, result }
        });
    }

    /// Replaces the tree with the first page of `collection`.
    pub(super) fn load_collection(&mut self, collection: &Collection) {
        let Some(project) = self.require_project("documents") else {
            return;
        };
        self.collection = Some(collection.path.clone());
        self.tree.clear();
        self.tree_idx = 0;
        self.tree_loading = true;
        self.selection.exit();
        self.last_draft = None;

        self.log(
            "documents",
            format!("Loading documents from {}...", collection.path),
            ActivityStatus::Running,
        );
        let store = Arc::clone(&self.store);
        let path = collection.path.clone();
        let limit = self.page_size;
        self.bridge.spawn(Target::TreeRoot, move || {
            let result = store.list_documents(&project, &path, limit);
            Update::Documents {
                collection: path,
                result,
            }
        });
    }

    /// Collapses an expanded node, or fetches and inserts its children.
    pub(super) fn toggle_node(&mut self, index: usize) {
        let Some(node) = self.tree.get(index).cloned() else {
            return;
        };
        if node.expanded {
            self.tree.collapse(index);
            self.bridge.invalidate(&Target::Node(node.path));
            self.clamp_cursors();
            return;
        }
        let Some(project) = self.require_project("expand") else {
            return;
        };

        self.log(
            "expand",
            format!("Loading {}...", node.path),
            ActivityStatus::Running,
        );
        let store = Arc::clone(&self.store);
        let path = node.path.clone();
        let limit = self.page_size;
        match node.kind {
            NodeKind::Collection => {
                self.bridge.spawn(Target::Node(node.path), move || {
                    let result = store.list_documents(&project, &path, limit);
                    Update::CollectionExpanded { path, result }
                });
            }
            NodeKind::Document => {
                let details_generation = self.bridge.generation(&Target::Details);
                self.bridge.spawn(Target::Node(node.path), move || {
                    let result = store.get_document(&project, &path).and_then(|doc| {
                        let subcollections = store.list_subcollections(&project, &path)?;
                        Ok((doc, subcollections))
                    });
                    Update::DocumentExpanded {
                        path,
                        details_generation,
                        result,
                    }
                });
            }
        }
    }

    /// Shows a document in details, from cache when possible.
    pub(super) fn open_document(&mut self, path: &str) {
        self.details_scroll = 0;
        if let Some(data) = self.cache.get(path) {
            self.details = DetailsContent::Document {
                path: path.to_string(),
                data: data.clone(),
            };
            self.bridge.invalidate(&Target::Details);
            return;
        }
        let Some(project) = self.require_project("document") else {
            return;
        };
        self.details = DetailsContent::Loading(format!("Loading {}...", path));
        let store = Arc::clone(&self.store);
        let path = path.to_string();
        self.bridge.spawn(Target::Details, move || {
            let result = store.get_document(&project, &path);
            Update::DocumentOpened { path, result }
        });
    }

    pub(super) fn refresh(&mut self) {
        self.projects.clear();
        self.projects_idx = 0;
        self.project = None;
        self.project_expanded = None;
        self.collections.clear();
        self.collections_idx = 0;
        self.collection = None;
        self.tree.clear();
        self.tree_idx = 0;
        self.tree_loading = false;
        self.selection.exit();
        self.details = DetailsContent::Empty;
        self.details_scroll = 0;
        self.query = None;
        self.last_draft = None;
        tracing::debug!(cached = self.cache.len(), "dropping document cache");
        self.cache.clear();
        self.bridge.invalidate(&Target::Collections);
        self.bridge.invalidate(&Target::TreeRoot);
        self.bridge.invalidate(&Target::Details);
        self.load_projects();
    }
}

/// Space: select project, load collection, or toggle the tree node.
pub(super) fn toggle(app: &mut App, _key: KeyEvent) {
    match app.focus.current() {
        Panel::Projects => {
            if let Some(id) = app.cursor_project().map(|p| p.id.clone()) {
                app.select_project_id(&id);
            }
        }
        Panel::Collections => {
            if let Some(c) = app.cursor_collection().cloned() {
                app.load_collection(&c);
            }
        }
        Panel::Tree => {
            if let Some((i, _)) = app.cursor_node() {
                app.toggle_node(i);
            }
        }
        Panel::Details => {}
    }
}

/// Enter: project details, load collection, or open the node.
pub(super) fn activate(app: &mut App, _key: KeyEvent) {
    match app.focus.current() {
        Panel::Projects => {
            if let Some(id) = app.cursor_project().map(|p| p.id.clone()) {
                app.fetch_project_details(&id);
                let change = app.focus.enter_details();
                app.on_focus_change(change);
            }
        }
        Panel::Collections => {
            if let Some(c) = app.cursor_collection().cloned() {
                app.load_collection(&c);
                let change = app.focus.set_focus(Panel::Tree);
                app.on_focus_change(change);
            }
        }
        Panel::Tree => {
            let Some((i, node)) = app.cursor_node() else {
                return;
            };
            if node.is_document() {
                let path = node.path.clone();
                app.open_document(&path);
                let change = app.focus.enter_details();
                app.on_focus_change(change);
            } else {
                app.toggle_node(i);
            }
        }
        Panel::Details => {}
    }
}

pub(super) fn refresh(app: &mut App, _key: KeyEvent) {
    app.refresh();
}
