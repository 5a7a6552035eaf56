#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(in crate::tui_shell) enum Panel {
    Projects,
    Collections,
    Tree,
    Details,
}

impl Panel {
    pub(in crate::tui_shell) const ALL: [Panel; 4] = [
        Panel::Projects,
        Panel::Collections,
        Panel::Tree,
        Panel::Details,
    ];

    pub(in crate::tui_shell) fn index(self) -> usize {
        match self {
            Panel::Projects => 0,
            Panel::Collections => 1,
            Panel::Tree => 2,
            Panel::Details => 3,
        }
    }

    pub(in crate::tui_shell) fn title(self) -> &'static str {
        match self {
            Panel::Projects => "Projects",
            Panel::Collections => "Collections",
            Panel::Tree => "Tree",
            Panel::Details => "Details",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct FocusChange {
    pub(in crate::tui_shell) from: Panel,
    pub(in crate::tui_shell) to: Panel,
}

/// Current and previous panel. Details is only entered through
/// [`FocusController::enter_details`] and left through [`FocusController::back`].
#[derive(Debug)]
pub(in crate::tui_shell) struct FocusController {
    current: Panel,
    previous: Option<Panel>,
}

impl Default for FocusController {
    fn default() -> Self {
        Self {
            current: Panel::Projects,
            previous: None,
        }
    }
}

impl FocusController {
    pub(in crate::tui_shell) fn current(&self) -> Panel {
        self.current
    }

    pub(in crate::tui_shell) fn is(&self, panel: Panel) -> bool {
        self.current == panel
    }

    /// Tree -> Collections -> Projects -> Tree. No-op in details.
    pub(in crate::tui_shell) fn move_left(&mut self) -> Option<FocusChange> {
        let to = match self.current {
            Panel::Projects => Panel::Tree,
            Panel::Collections => Panel::Projects,
            Panel::Tree => Panel::Collections,
            Panel::Details => return None,
        };
        self.switch(to)
    }

    /// Projects -> Collections -> Tree -> Projects. No-op in details.
    pub(in crate::tui_shell) fn move_right(&mut self) -> Option<FocusChange> {
        let to = match self.current {
            Panel::Projects => Panel::Collections,
            Panel::Collections => Panel::Tree,
            Panel::Tree => Panel::Projects,
            Panel::Details => return None,
        };
        self.switch(to)
    }

    pub(in crate::tui_shell) fn enter_details(&mut self) -> Option<FocusChange> {
        self.set_focus(Panel::Details)
    }

    /// Leaves details for the panel recorded on entry (tree if none).
    pub(in crate::tui_shell) fn back(&mut self) -> Option<FocusChange> {
        if self.current != Panel::Details {
            return None;
        }
        let to = self.previous.take().unwrap_or(Panel::Tree);
        self.switch(to)
    }

    pub(in crate::tui_shell) fn set_focus(&mut self, panel: Panel) -> Option<FocusChange> {
        if panel == Panel::Details && self.current != Panel::Details {
            self.previous = Some(self.current);
        }
        self.switch(panel)
    }

    fn switch(&mut self, to: Panel) -> Option<FocusChange> {
        if to == self.current {
            return None;
        }
        let from = self.current;
        self.current = to;
        Some(FocusChange { from, to })
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/focus_tests.rs"]
mod tests;
