use std::collections::BTreeSet;

use super::tree::Node;

/// Visual range over the filtered tree. Membership is always rebuilt from
/// anchor and cursor, never patched.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct SelectionModel {
    anchor: Option<usize>,
    selected: BTreeSet<usize>,
}

impl SelectionModel {
    pub(in crate::tui_shell) fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub(in crate::tui_shell) fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub(in crate::tui_shell) fn contains(&self, view_idx: usize) -> bool {
        self.selected.contains(&view_idx)
    }

    pub(in crate::tui_shell) fn enter(&mut self, cursor: usize, view: &[&Node]) {
        self.anchor = Some(cursor);
        self.recompute(cursor, view);
    }

    pub(in crate::tui_shell) fn extend_to(&mut self, cursor: usize, view: &[&Node]) {
        if self.anchor.is_some() {
            self.recompute(cursor, view);
        }
    }

    pub(in crate::tui_shell) fn exit(&mut self) {
        self.anchor = None;
        self.selected.clear();
    }

    /// Document paths in view order.
    pub(in crate::tui_shell) fn selected_paths(&self, view: &[&Node]) -> Vec<String> {
        self.selected
            .iter()
            .filter_map(|&i| view.get(i))
            .map(|n| n.path.clone())
            .collect()
    }

    fn recompute(&mut self, cursor: usize, view: &[&Node]) {
        self.selected.clear();
        let Some(anchor) = self.anchor else {
            return;
        };
        if view.is_empty() {
            return;
        }
        let last = view.len() - 1;
        let lo = anchor.min(cursor).min(last);
        let hi = anchor.max(cursor).min(last);
        self.selected
            .extend((lo..=hi).filter(|&i| view[i].is_document()));
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/selection_tests.rs"]
mod tests;
