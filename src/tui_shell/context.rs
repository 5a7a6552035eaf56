/// Logical input mode. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(in crate::tui_shell) enum Mode {
    Help,
    CommandLog,
    QueryBuilder,
    QueryInput,
    QueryOption,
    Select,
    FilterInput,
    Normal,
}

impl Mode {
    pub(in crate::tui_shell) const ALL: [Mode; 8] = [
        Mode::Help,
        Mode::CommandLog,
        Mode::QueryBuilder,
        Mode::QueryInput,
        Mode::QueryOption,
        Mode::Select,
        Mode::FilterInput,
        Mode::Normal,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum BuilderPhase {
    Grid,
    FieldEdit,
    OptionPopup,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) struct UiFlags {
    pub(in crate::tui_shell) help_open: bool,
    pub(in crate::tui_shell) log_open: bool,
    pub(in crate::tui_shell) builder: Option<BuilderPhase>,
    pub(in crate::tui_shell) select_active: bool,
    pub(in crate::tui_shell) filter_editing: bool,
}

/// help > command log > query builder (grid, cell edit, option popup) >
/// select > filter input > normal.
pub(in crate::tui_shell) fn resolve_mode(flags: &UiFlags) -> Mode {
    if flags.help_open {
        return Mode::Help;
    }
    if flags.log_open {
        return Mode::CommandLog;
    }
    match flags.builder {
        Some(BuilderPhase::Grid) => return Mode::QueryBuilder,
        Some(BuilderPhase::FieldEdit) => return Mode::QueryInput,
        Some(BuilderPhase::OptionPopup) => return Mode::QueryOption,
        None => {}
    }
    if flags.select_active {
        return Mode::Select;
    }
    if flags.filter_editing {
        return Mode::FilterInput;
    }
    Mode::Normal
}

#[cfg(test)]
#[path = "../tests/tui_shell/context_tests.rs"]
mod tests;
