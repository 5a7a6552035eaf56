use super::*;

impl App {
    pub(super) fn project_view(&self) -> Vec<&Project> {
        derive(
            &self.projects,
            self.filters.active_text(Panel::Projects),
            |p| [p.display_name.as_str(), p.id.as_str()],
        )
    }

    pub(super) fn collection_view(&self) -> Vec<&Collection> {
        derive(
            &self.collections,
            self.filters.active_text(Panel::Collections),
            |c| [c.name.as_str()],
        )
    }

    pub(super) fn tree_view(&self) -> Vec<&Node> {
        derive(
            self.tree.nodes(),
            self.filters.active_text(Panel::Tree),
            |n| [n.name.as_str(), n.path.as_str()],
        )
    }

    pub(super) fn cursor_project(&self) -> Option<&Project> {
        let view = self.project_view();
        let i = backing_index(&self.projects, &view, self.projects_idx, |p| p.id.as_str())?;
        self.projects.get(i)
    }

    pub(super) fn cursor_collection(&self) -> Option<&Collection> {
        let view = self.collection_view();
        let i = backing_index(&self.collections, &view, self.collections_idx, |c| {
            c.path.as_str()
        })?;
        self.collections.get(i)
    }

    /// Backing index and node under the tree cursor.
    pub(super) fn cursor_node(&self) -> Option<(usize, &Node)> {
        let view = self.tree_view();
        let i = backing_index(self.tree.nodes(), &view, self.tree_idx, |n| n.path.as_str())?;
        self.tree.get(i).map(|n| (i, n))
    }

    pub(super) fn panel_len(&self, panel: Panel) -> usize {
        match panel {
            Panel::Projects => self.project_view().len(),
            Panel::Collections => self.collection_view().len(),
            Panel::Tree => self.tree_view().len(),
            Panel::Details => self.details_lines().len(),
        }
    }

    pub(super) fn panel_cursor_mut(&mut self, panel: Panel) -> &mut usize {
        match panel {
            Panel::Projects => &mut self.projects_idx,
            Panel::Collections => &mut self.collections_idx,
            Panel::Tree => &mut self.tree_idx,
            Panel::Details => &mut self.details_scroll,
        }
    }

    pub(super) fn reset_panel_cursor(&mut self, panel: Panel) {
        *self.panel_cursor_mut(panel) = 0;
        if panel == Panel::Tree {
            self.refresh_selection();
        }
    }

    /// Keeps every cursor inside its (filtered) list.
    pub(super) fn clamp_cursors(&mut self) {
        for panel in Panel::ALL {
            let len = self.panel_len(panel);
            let cursor = self.panel_cursor_mut(panel);
            *cursor = (*cursor).min(len.saturating_sub(1));
        }
        self.refresh_selection();
    }

    /// Rebuilds the select range against the current tree view.
    pub(super) fn refresh_selection(&mut self) {
        if !self.selection.is_active() {
            return;
        }
        let cursor = self.tree_idx;
        let view: Vec<&Node> = derive(
            self.tree.nodes(),
            self.filters.active_text(Panel::Tree),
            |n| [n.name.as_str(), n.path.as_str()],
        );
        self.selection.extend_to(cursor, &view);
    }

    /// Moves the tree cursor onto `path` if it is visible.
    pub(super) fn focus_tree_path(&mut self, path: &str) {
        let view = self.tree_view();
        if let Some(i) = view_index(&view, path, |n| n.path.as_str()) {
            self.tree_idx = i;
        }
    }
}
