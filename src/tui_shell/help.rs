#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct HelpItem<H> {
    pub(in crate::tui_shell) key: &'static str,
    pub(in crate::tui_shell) label: &'static str,
    pub(in crate::tui_shell) action: Option<H>,
}

impl<H> HelpItem<H> {
    pub(in crate::tui_shell) fn header(label: &'static str) -> Self {
        Self {
            key: "",
            label,
            action: None,
        }
    }

    pub(in crate::tui_shell) fn action(key: &'static str, label: &'static str, action: H) -> Self {
        Self {
            key,
            label,
            action: Some(action),
        }
    }

    pub(in crate::tui_shell) fn is_header(&self) -> bool {
        self.action.is_none()
    }
}

/// Key reference popup; the highlight skips section headers.
#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct HelpPopup<H> {
    pub(in crate::tui_shell) items: Vec<HelpItem<H>>,
    pub(in crate::tui_shell) selected: usize,
}

impl<H: Copy> HelpPopup<H> {
    pub(in crate::tui_shell) fn new(items: Vec<HelpItem<H>>) -> Self {
        let selected = items.iter().position(|i| !i.is_header()).unwrap_or(0);
        Self { items, selected }
    }

    pub(in crate::tui_shell) fn move_down(&mut self) {
        if let Some(next) = (self.selected + 1..self.items.len()).find(|&i| !self.items[i].is_header())
        {
            self.selected = next;
        }
    }

    pub(in crate::tui_shell) fn move_up(&mut self) {
        if let Some(prev) = (0..self.selected).rev().find(|&i| !self.items[i].is_header()) {
            self.selected = prev;
        }
    }

    pub(in crate::tui_shell) fn selected_action(&self) -> Option<H> {
        self.items.get(self.selected).and_then(|i| i.action)
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/help_tests.rs"]
mod tests;
