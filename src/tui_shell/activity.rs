use std::collections::VecDeque;

use super::time_utils::now_ts;

pub(in crate::tui_shell) const ACTIVITY_CAPACITY: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ActivityStatus {
    Running,
    Success,
    Error,
}

impl ActivityStatus {
    pub(in crate::tui_shell) fn label(self) -> &'static str {
        match self {
            ActivityStatus::Running => "running",
            ActivityStatus::Success => "success",
            ActivityStatus::Error => "error",
        }
    }
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct ActivityEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) label: String,
    pub(in crate::tui_shell) description: String,
    pub(in crate::tui_shell) status: ActivityStatus,
}

/// Bounded log of user actions and async completions; oldest entries drop.
#[derive(Debug)]
pub(in crate::tui_shell) struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(ACTIVITY_CAPACITY)
    }
}

impl ActivityLog {
    pub(in crate::tui_shell) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(in crate::tui_shell) fn push(
        &mut self,
        label: &str,
        description: impl Into<String>,
        status: ActivityStatus,
    ) {
        let description = description.into();
        match status {
            ActivityStatus::Error => tracing::warn!(label, %description, "activity"),
            _ => tracing::info!(label, %description, status = status.label(), "activity"),
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry {
            ts: now_ts(),
            label: label.to_string(),
            description,
            status,
        });
    }

    pub(in crate::tui_shell) fn entries(&self) -> impl DoubleEndedIterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub(in crate::tui_shell) fn last(&self) -> Option<&ActivityEntry> {
        self.entries.back()
    }

    pub(in crate::tui_shell) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/activity_tests.rs"]
mod tests;
