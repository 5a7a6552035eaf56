use super::*;

impl App {
    fn move_cursor(&mut self, delta: isize) {
        let panel = self.focus.current();
        let len = self.panel_len(panel);
        let cursor = self.panel_cursor_mut(panel);
        *cursor = cursor
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
        if panel == Panel::Tree {
            self.refresh_selection();
        }
    }

    fn jump_cursor(&mut self, to_end: bool) {
        let panel = self.focus.current();
        let len = self.panel_len(panel);
        *self.panel_cursor_mut(panel) = if to_end { len.saturating_sub(1) } else { 0 };
        if panel == Panel::Tree {
            self.refresh_selection();
        }
    }
}

pub(super) fn move_down(app: &mut App, _key: KeyEvent) {
    app.move_cursor(1);
}

pub(super) fn move_up(app: &mut App, _key: KeyEvent) {
    app.move_cursor(-1);
}

pub(super) fn move_top(app: &mut App, _key: KeyEvent) {
    app.jump_cursor(false);
}

pub(super) fn move_bottom(app: &mut App, _key: KeyEvent) {
    app.jump_cursor(true);
}

pub(super) fn focus_left(app: &mut App, _key: KeyEvent) {
    let change = app.focus.move_left();
    app.on_focus_change(change);
}

pub(super) fn focus_right(app: &mut App, _key: KeyEvent) {
    let change = app.focus.move_right();
    app.on_focus_change(change);
}

/// Tab: into details, or back out of it.
pub(super) fn toggle_details(app: &mut App, _key: KeyEvent) {
    let change = if app.focus.is(Panel::Details) {
        app.focus.back()
    } else {
        app.focus.enter_details()
    };
    app.on_focus_change(change);
}

/// Esc in normal context: leave details, else drop the focused panel's filter.
pub(super) fn escape(app: &mut App, _key: KeyEvent) {
    if app.focus.is(Panel::Details) {
        let change = app.focus.back();
        app.on_focus_change(change);
        return;
    }
    let panel = app.focus.current();
    if app.filters.clear(panel) {
        app.reset_panel_cursor(panel);
        app.clamp_cursors();
    }
}

pub(super) fn quit(app: &mut App, _key: KeyEvent) {
    app.quit = true;
}

pub(super) fn noop(_app: &mut App, _key: KeyEvent) {}
