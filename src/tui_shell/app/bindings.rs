use super::*;

pub(in crate::tui_shell) type Handler = fn(&mut App, KeyEvent);

pub(super) fn default_keymap() -> Keymap<Handler> {
    use KeyPattern as K;

    let mut km: Keymap<Handler> = Keymap::new();

    // Normal context.
    km.bind(K::ch('q'), nav::quit);
    km.bind(K::ch('j'), nav::move_down);
    km.bind(K::key(KeyCode::Down), nav::move_down);
    km.bind(K::ch('k'), nav::move_up);
    km.bind(K::key(KeyCode::Up), nav::move_up);
    km.bind(K::ch('g'), nav::move_top);
    km.bind(K::key(KeyCode::Home), nav::move_top);
    km.bind(K::ch('G'), nav::move_bottom);
    km.bind(K::key(KeyCode::End), nav::move_bottom);
    km.bind(K::ch('h'), nav::focus_left);
    km.bind(K::key(KeyCode::Left), nav::focus_left);
    km.bind(K::ch('l'), nav::focus_right);
    km.bind(K::key(KeyCode::Right), nav::focus_right);
    km.bind(K::key(KeyCode::Tab), nav::toggle_details);
    km.bind(K::key(KeyCode::Esc), nav::escape);
    km.bind(K::key(KeyCode::Enter), loaders::activate);
    km.bind(K::ch(' '), loaders::toggle);
    km.bind(K::ch('r'), loaders::refresh);
    km.bind(K::ch('/'), filter_actions::start_filter);
    km.bind(K::ch('v'), select_actions::toggle_select);
    km.bind(K::ch('F'), query_actions::open_query);
    km.bind(K::ch('?'), overlay_actions::open_help);
    km.bind(K::ch('@'), overlay_actions::open_log);

    for mode in Mode::ALL {
        km.bind_in(mode, K::ctrl('c'), nav::quit);
    }

    // Select: movement extends the range.
    km.bind_in(Mode::Select, K::ch(' '), select_actions::fetch_selection);
    km.bind_all_in(
        Mode::Select,
        &[K::ch('v'), K::key(KeyCode::Esc)],
        select_actions::exit_select,
    );
    for key in [K::ch('h'), K::ch('l'), K::key(KeyCode::Left), K::key(KeyCode::Right)] {
        km.bind_in(Mode::Select, key, nav::noop);
    }
    km.bind_all_in(
        Mode::Select,
        &[K::key(KeyCode::Tab), K::key(KeyCode::Enter)],
        select_actions::show_details,
    );
    for key in [K::ch('/'), K::ch('F')] {
        km.bind_in(Mode::Select, key, nav::noop);
    }

    // Filter input: every printable char is text.
    km.bind_in(Mode::FilterInput, K::AnyChar, filter_actions::insert);
    km.bind_in(Mode::FilterInput, K::key(KeyCode::Backspace), filter_actions::backspace);
    km.bind_in(Mode::FilterInput, K::key(KeyCode::Delete), filter_actions::delete);
    km.bind_in(Mode::FilterInput, K::key(KeyCode::Left), filter_actions::cursor_left);
    km.bind_in(Mode::FilterInput, K::key(KeyCode::Right), filter_actions::cursor_right);
    km.bind_in(Mode::FilterInput, K::key(KeyCode::Enter), filter_actions::commit);
    km.bind_in(Mode::FilterInput, K::key(KeyCode::Esc), filter_actions::cancel);
    km.bind_in(Mode::FilterInput, K::AnyKey, nav::noop);

    km.bind_all_in(
        Mode::Help,
        &[K::ch('j'), K::key(KeyCode::Down)],
        overlay_actions::help_down,
    );
    km.bind_all_in(
        Mode::Help,
        &[K::ch('k'), K::key(KeyCode::Up)],
        overlay_actions::help_up,
    );
    km.bind_in(Mode::Help, K::key(KeyCode::Enter), overlay_actions::help_run);
    km.bind_all_in(
        Mode::Help,
        &[K::key(KeyCode::Esc), K::ch('?'), K::ch('q')],
        overlay_actions::close_help,
    );
    km.bind_in(Mode::Help, K::AnyKey, nav::noop);

    km.bind_all_in(
        Mode::CommandLog,
        &[K::ch('j'), K::key(KeyCode::Down)],
        overlay_actions::log_down,
    );
    km.bind_all_in(
        Mode::CommandLog,
        &[K::ch('k'), K::key(KeyCode::Up)],
        overlay_actions::log_up,
    );
    km.bind_all_in(
        Mode::CommandLog,
        &[K::key(KeyCode::Esc), K::ch('@'), K::ch('q')],
        overlay_actions::close_log,
    );
    km.bind_in(Mode::CommandLog, K::AnyKey, nav::noop);

    km.bind_all_in(
        Mode::QueryBuilder,
        &[K::ch('k'), K::key(KeyCode::Up)],
        query_actions::grid_up,
    );
    km.bind_all_in(
        Mode::QueryBuilder,
        &[K::ch('j'), K::key(KeyCode::Down)],
        query_actions::grid_down,
    );
    km.bind_all_in(
        Mode::QueryBuilder,
        &[K::ch('h'), K::key(KeyCode::Left)],
        query_actions::grid_left,
    );
    km.bind_all_in(
        Mode::QueryBuilder,
        &[K::ch('l'), K::key(KeyCode::Right)],
        query_actions::grid_right,
    );
    km.bind_in(Mode::QueryBuilder, K::key(KeyCode::Tab), query_actions::next_field);
    km.bind_in(Mode::QueryBuilder, K::key(KeyCode::BackTab), query_actions::prev_field);
    km.bind_in(Mode::QueryBuilder, K::key(KeyCode::Enter), query_actions::activate);
    km.bind_in(Mode::QueryBuilder, K::ch('a'), query_actions::add_filter);
    km.bind_in(Mode::QueryBuilder, K::ch('d'), query_actions::delete_filter);
    km.bind_all_in(
        Mode::QueryBuilder,
        &[K::key(KeyCode::Esc), K::ch('q')],
        query_actions::close,
    );
    km.bind_in(Mode::QueryBuilder, K::AnyKey, nav::noop);

    km.bind_in(Mode::QueryInput, K::AnyChar, query_actions::input_char);
    km.bind_in(Mode::QueryInput, K::key(KeyCode::Backspace), query_actions::input_backspace);
    km.bind_in(Mode::QueryInput, K::key(KeyCode::Delete), query_actions::input_delete);
    km.bind_in(Mode::QueryInput, K::key(KeyCode::Left), query_actions::input_left);
    km.bind_in(Mode::QueryInput, K::key(KeyCode::Right), query_actions::input_right);
    km.bind_in(Mode::QueryInput, K::key(KeyCode::Enter), query_actions::input_commit);
    km.bind_in(Mode::QueryInput, K::key(KeyCode::Esc), query_actions::back_to_grid);
    km.bind_in(Mode::QueryInput, K::AnyKey, nav::noop);

    km.bind_all_in(
        Mode::QueryOption,
        &[K::ch('k'), K::key(KeyCode::Up)],
        query_actions::option_up,
    );
    km.bind_all_in(
        Mode::QueryOption,
        &[K::ch('j'), K::key(KeyCode::Down)],
        query_actions::option_down,
    );
    km.bind_in(Mode::QueryOption, K::key(KeyCode::Enter), query_actions::option_commit);
    km.bind_in(Mode::QueryOption, K::key(KeyCode::Esc), query_actions::back_to_grid);
    km.bind_in(Mode::QueryOption, K::AnyKey, nav::noop);

    km
}

pub(super) fn help_items() -> Vec<HelpItem<Handler>> {
    fn act(key: &'static str, label: &'static str, h: Handler) -> HelpItem<Handler> {
        HelpItem::action(key, label, h)
    }
    use HelpItem as I;

    vec![
        I::header("Navigation"),
        act("j", "Move down", nav::move_down),
        act("k", "Move up", nav::move_up),
        act("g", "Jump to top", nav::move_top),
        act("G", "Jump to bottom", nav::move_bottom),
        act("h", "Previous panel", nav::focus_left),
        act("l", "Next panel", nav::focus_right),
        act("Tab", "Toggle details panel", nav::toggle_details),
        act("Esc", "Back / clear filter", nav::escape),
        I::header("Data"),
        act("Space", "Select project / load / expand", loaders::toggle),
        act("Enter", "Open details", loaders::activate),
        act("r", "Refresh everything", loaders::refresh),
        I::header("Filter & select"),
        act("/", "Filter focused panel", filter_actions::start_filter),
        act("v", "Toggle select mode", select_actions::toggle_select),
        I::header("Query"),
        act("F", "Open query builder", query_actions::open_query),
        I::header("Other"),
        act("@", "Command log", overlay_actions::open_log),
        act("q", "Quit", nav::quit),
    ]
}

/// Short hints shown in the status bar for `mode`.
pub(super) fn mode_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => "j/k move  h/l panel  space load  enter open  / filter  v select  F query  ? help",
        Mode::Select => "j/k extend  space fetch  enter/tab details  v/esc exit",
        Mode::FilterInput => "type to filter  enter keep  esc cancel",
        Mode::Help => "j/k move  enter run  esc close",
        Mode::CommandLog => "j/k scroll  esc close",
        Mode::QueryBuilder => "arrows move  enter edit  a add  d delete  esc close",
        Mode::QueryInput => "enter save  esc discard",
        Mode::QueryOption => "j/k choose  enter pick  esc back",
    }
}
