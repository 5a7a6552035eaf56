use super::*;

pub(super) fn open_help(app: &mut App, _key: KeyEvent) {
    app.help = Some(HelpPopup::new(help_items()));
}

pub(super) fn close_help(app: &mut App, _key: KeyEvent) {
    app.help = None;
}

pub(super) fn help_down(app: &mut App, _key: KeyEvent) {
    if let Some(help) = app.help.as_mut() {
        help.move_down();
    }
}

pub(super) fn help_up(app: &mut App, _key: KeyEvent) {
    if let Some(help) = app.help.as_mut() {
        help.move_up();
    }
}

/// Closes the popup, then runs the highlighted action as if its key was
/// pressed in normal context.
pub(super) fn help_run(app: &mut App, key: KeyEvent) {
    let action = app.help.take().and_then(|h| h.selected_action());
    if let Some(action) = action {
        action(app, key);
    }
}

pub(super) fn open_log(app: &mut App, _key: KeyEvent) {
    app.log_open = true;
    app.log_scroll = app.activity.len().saturating_sub(1);
}

pub(super) fn close_log(app: &mut App, _key: KeyEvent) {
    app.log_open = false;
}

pub(super) fn log_down(app: &mut App, _key: KeyEvent) {
    app.log_scroll = (app.log_scroll + 1).min(app.activity.len().saturating_sub(1));
}

pub(super) fn log_up(app: &mut App, _key: KeyEvent) {
    app.log_scroll = app.log_scroll.saturating_sub(1);
}
