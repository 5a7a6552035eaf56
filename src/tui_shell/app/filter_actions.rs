use super::*;

pub(super) fn start_filter(app: &mut App, _key: KeyEvent) {
    let panel = app.focus.current();
    app.filters.start_edit(panel);
    app.reset_panel_cursor(panel);
}

pub(super) fn insert(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char(c) = key.code {
        app.filters.insert(c);
        app.after_filter_edit();
    }
}

pub(super) fn backspace(app: &mut App, _key: KeyEvent) {
    app.filters.backspace();
    app.after_filter_edit();
}

pub(super) fn delete(app: &mut App, _key: KeyEvent) {
    if let Some(input) = app.filters.input_mut() {
        input.delete();
    }
    app.after_filter_edit();
}

pub(super) fn cursor_left(app: &mut App, _key: KeyEvent) {
    if let Some(input) = app.filters.input_mut() {
        input.move_left();
    }
}

pub(super) fn cursor_right(app: &mut App, _key: KeyEvent) {
    if let Some(input) = app.filters.input_mut() {
        input.move_right();
    }
}

pub(super) fn commit(app: &mut App, _key: KeyEvent) {
    if let Some(panel) = app.filters.commit() {
        app.reset_panel_cursor(panel);
        app.clamp_cursors();
    }
}

pub(super) fn cancel(app: &mut App, _key: KeyEvent) {
    if app.filters.cancel().is_some() {
        app.clamp_cursors();
    }
}

impl App {
    /// The live view shrinks and grows while typing.
    fn after_filter_edit(&mut self) {
        if let Some(panel) = self.filters.editing_panel() {
            self.reset_panel_cursor(panel);
        }
        self.clamp_cursors();
    }
}
