use std::collections::HashMap;

use serde_json::Value;

/// Document data by path. Only grows until an explicit refresh clears it.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct DocumentCache {
    docs: HashMap<String, Value>,
}

impl DocumentCache {
    pub(in crate::tui_shell) fn get(&self, path: &str) -> Option<&Value> {
        self.docs.get(path)
    }

    pub(in crate::tui_shell) fn insert(&mut self, path: &str, data: Value) {
        self.docs.insert(path.to_string(), data);
    }

    pub(in crate::tui_shell) fn len(&self) -> usize {
        self.docs.len()
    }

    pub(in crate::tui_shell) fn clear(&mut self) {
        self.docs.clear();
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/cache_tests.rs"]
mod tests;
