use crate::model::{Collection, Document};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum NodeKind {
    Collection,
    Document,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct Node {
    pub(in crate::tui_shell) path: String,
    pub(in crate::tui_shell) name: String,
    pub(in crate::tui_shell) kind: NodeKind,
    pub(in crate::tui_shell) depth: usize,
    pub(in crate::tui_shell) expanded: bool,
    pub(in crate::tui_shell) has_children: bool,
}

impl Node {
    pub(in crate::tui_shell) fn collection(c: &Collection) -> Self {
        Self {
            path: c.path.clone(),
            name: c.name.clone(),
            kind: NodeKind::Collection,
            depth: 0,
            expanded: false,
            has_children: true,
        }
    }

    pub(in crate::tui_shell) fn document(d: &Document) -> Self {
        Self {
            path: d.path.clone(),
            name: d.id.clone(),
            kind: NodeKind::Document,
            depth: 0,
            expanded: false,
            has_children: true,
        }
    }

    pub(in crate::tui_shell) fn is_document(&self) -> bool {
        self.kind == NodeKind::Document
    }
}

/// Pre-order flattening of the loaded forest. A node's children are the
/// contiguous run right after it with depth `depth + 1`; a node has such a
/// run exactly when it is expanded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) struct TreeModel {
    nodes: Vec<Node>,
}

impl TreeModel {
    pub(in crate::tui_shell) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(in crate::tui_shell) fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub(in crate::tui_shell) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(in crate::tui_shell) fn index_of(&self, path: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.path == path)
    }

    pub(in crate::tui_shell) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Replaces everything with `roots` at depth 0.
    pub(in crate::tui_shell) fn replace(&mut self, roots: Vec<Node>) {
        self.nodes = roots
            .into_iter()
            .map(|mut n| {
                n.depth = 0;
                n.expanded = false;
                n
            })
            .collect();
    }

    /// Exclusive end of the descendant run of `index`.
    fn subtree_end(&self, index: usize) -> usize {
        let depth = self.nodes[index].depth;
        let mut end = index + 1;
        while end < self.nodes.len() && self.nodes[end].depth > depth {
            end += 1;
        }
        end
    }

    /// Splices `children` under the node at `index`. Any children already
    /// present are removed first, so repeated expansion never duplicates.
    /// An empty `children` leaves the node collapsed.
    pub(in crate::tui_shell) fn expand(&mut self, index: usize, children: Vec<Node>) -> bool {
        if index >= self.nodes.len() {
            return false;
        }
        self.collapse(index);
        if children.is_empty() {
            return true;
        }
        let depth = self.nodes[index].depth + 1;
        let children = children.into_iter().map(|mut c| {
            c.depth = depth;
            c.expanded = false;
            c
        });
        self.nodes.splice(index + 1..index + 1, children);
        self.nodes[index].expanded = true;
        debug_assert!(self.is_well_formed());
        true
    }

    /// Removes the descendant run of `index`. Returns how many nodes went.
    pub(in crate::tui_shell) fn collapse(&mut self, index: usize) -> usize {
        if index >= self.nodes.len() {
            return 0;
        }
        let end = self.subtree_end(index);
        self.nodes.drain(index + 1..end);
        self.nodes[index].expanded = false;
        end - index - 1
    }

    /// Query results: top-level replacement when `index` is `None`, else a
    /// fresh child run under that node.
    pub(in crate::tui_shell) fn query_replace(&mut self, index: Option<usize>, results: Vec<Node>) {
        match index {
            None => self.replace(results),
            Some(i) => {
                self.expand(i, results);
            }
        }
    }

    pub(in crate::tui_shell) fn is_well_formed(&self) -> bool {
        if self.nodes.first().is_some_and(|n| n.depth != 0) {
            return false;
        }
        self.nodes.iter().enumerate().all(|(i, node)| {
            let next_depth = self.nodes.get(i + 1).map(|n| n.depth);
            if next_depth.is_some_and(|d| d > node.depth + 1) {
                return false;
            }
            let has_run = next_depth.is_some_and(|d| d == node.depth + 1);
            has_run == node.expanded
        })
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/tree_tests.rs"]
mod tests;
