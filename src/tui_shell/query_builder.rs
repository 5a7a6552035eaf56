use crate::query::{Cell, QueryDraft};

use super::context::BuilderPhase;
use super::input::Input;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum BuilderState {
    Grid,
    FieldEdit { cell: Cell, input: Input },
    OptionPopup { cell: Cell, highlighted: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum BuilderOutcome {
    Stay,
    Execute,
}

/// Query builder over a draft. `node` is the tree path of the collection
/// the results will be attached under, or `None` for a top-level query.
#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct QueryBuilder {
    pub(in crate::tui_shell) draft: QueryDraft,
    pub(in crate::tui_shell) node: Option<String>,
    pub(in crate::tui_shell) state: BuilderState,
}

impl QueryBuilder {
    pub(in crate::tui_shell) fn open(draft: QueryDraft, node: Option<String>) -> Self {
        Self {
            draft,
            node,
            state: BuilderState::Grid,
        }
    }

    pub(in crate::tui_shell) fn phase(&self) -> BuilderPhase {
        match self.state {
            BuilderState::Grid => BuilderPhase::Grid,
            BuilderState::FieldEdit { .. } => BuilderPhase::FieldEdit,
            BuilderState::OptionPopup { .. } => BuilderPhase::OptionPopup,
        }
    }

    /// Enter on the active grid cell.
    pub(in crate::tui_shell) fn activate(&mut self) -> BuilderOutcome {
        if self.state != BuilderState::Grid {
            return BuilderOutcome::Stay;
        }
        let cell = self.draft.active_cell();
        match cell {
            Cell::Execute => return BuilderOutcome::Execute,
            Cell::Clear => self.draft.reset(),
            _ if cell.is_text() => {
                self.state = BuilderState::FieldEdit {
                    cell,
                    input: Input::with_text(&self.draft.cell_text(cell)),
                };
            }
            _ => {
                if let Some(choices) = cell.choices() {
                    let current = self.draft.cell_text(cell);
                    let highlighted = choices.iter().position(|c| *c == current).unwrap_or(0);
                    self.state = BuilderState::OptionPopup { cell, highlighted };
                }
            }
        }
        BuilderOutcome::Stay
    }

    pub(in crate::tui_shell) fn input_mut(&mut self) -> Option<&mut Input> {
        match &mut self.state {
            BuilderState::FieldEdit { input, .. } => Some(input),
            _ => None,
        }
    }

    /// Field edit: store the typed text and go back to the grid.
    pub(in crate::tui_shell) fn commit_edit(&mut self) {
        let state = std::mem::replace(&mut self.state, BuilderState::Grid);
        if let BuilderState::FieldEdit { cell, input } = state {
            self.draft.set_cell_text(cell, &input.buf);
        }
    }

    /// Leaves a field edit or popup without touching the draft.
    pub(in crate::tui_shell) fn cancel(&mut self) {
        self.state = BuilderState::Grid;
    }

    pub(in crate::tui_shell) fn popup_move(&mut self, delta: isize) {
        if let BuilderState::OptionPopup { cell, highlighted } = &mut self.state {
            let len = cell.choices().map(|c| c.len()).unwrap_or(1);
            *highlighted = highlighted.saturating_add_signed(delta).min(len - 1);
        }
    }

    pub(in crate::tui_shell) fn commit_choice(&mut self) {
        let state = std::mem::replace(&mut self.state, BuilderState::Grid);
        if let BuilderState::OptionPopup { cell, highlighted } = state {
            if let Some(choice) = cell.choices().and_then(|c| c.get(highlighted)) {
                self.draft.set_cell_choice(cell, choice);
            }
        }
    }

    /// Choices and highlight while the popup is up.
    pub(in crate::tui_shell) fn popup(&self) -> Option<(&'static [&'static str], usize)> {
        match &self.state {
            BuilderState::OptionPopup { cell, highlighted } => {
                cell.choices().map(|c| (c, *highlighted))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/query_builder_tests.rs"]
mod tests;
