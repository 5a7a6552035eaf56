use super::focus::Panel;
use super::input::Input;

/// Case-insensitive substring match. An empty filter matches everything.
pub(in crate::tui_shell) fn matches(text: &str, filter: &str) -> bool {
    filter.is_empty() || text.to_lowercase().contains(&filter.to_lowercase())
}

/// Items whose accessor fields contain `filter`, in backing order.
pub(in crate::tui_shell) fn derive<'a, T, const N: usize>(
    items: &'a [T],
    filter: &str,
    fields: impl Fn(&'a T) -> [&'a str; N],
) -> Vec<&'a T> {
    if filter.is_empty() {
        return items.iter().collect();
    }
    let needle = filter.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields(*item)
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Maps a filtered position back to the backing list by stable key.
pub(in crate::tui_shell) fn backing_index<T>(
    backing: &[T],
    view: &[&T],
    view_idx: usize,
    key: impl Fn(&T) -> &str,
) -> Option<usize> {
    let wanted = key(view.get(view_idx)?);
    backing.iter().position(|item| key(item) == wanted)
}

/// Filtered position of the item with `wanted` key, if visible.
pub(in crate::tui_shell) fn view_index<T>(
    view: &[&T],
    wanted: &str,
    key: impl Fn(&T) -> &str,
) -> Option<usize> {
    view.iter().position(|item| key(item) == wanted)
}

/// Committed filter text per panel plus the single in-progress edit.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct FilterEngine {
    committed: [String; 4],
    editing: Option<(Panel, Input)>,
}

impl FilterEngine {
    /// Opens an empty edit buffer for `panel`, dropping its committed filter
    /// and any other panel's edit.
    pub(in crate::tui_shell) fn start_edit(&mut self, panel: Panel) {
        self.committed[panel.index()].clear();
        self.editing = Some((panel, Input::default()));
    }

    pub(in crate::tui_shell) fn editing_panel(&self) -> Option<Panel> {
        self.editing.as_ref().map(|(p, _)| *p)
    }

    pub(in crate::tui_shell) fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub(in crate::tui_shell) fn input(&self) -> Option<&Input> {
        self.editing.as_ref().map(|(_, input)| input)
    }

    pub(in crate::tui_shell) fn input_mut(&mut self) -> Option<&mut Input> {
        self.editing.as_mut().map(|(_, input)| input)
    }

    pub(in crate::tui_shell) fn insert(&mut self, c: char) {
        if let Some(input) = self.input_mut() {
            input.insert_char(c);
        }
    }

    pub(in crate::tui_shell) fn backspace(&mut self) {
        if let Some(input) = self.input_mut() {
            input.backspace();
        }
    }

    /// Buffer becomes the committed filter. Returns the panel whose
    /// selection must reset.
    pub(in crate::tui_shell) fn commit(&mut self) -> Option<Panel> {
        let (panel, input) = self.editing.take()?;
        self.committed[panel.index()] = input.buf;
        Some(panel)
    }

    pub(in crate::tui_shell) fn cancel(&mut self) -> Option<Panel> {
        self.editing.take().map(|(panel, _)| panel)
    }

    /// Returns whether a committed filter was removed.
    pub(in crate::tui_shell) fn clear(&mut self, panel: Panel) -> bool {
        let slot = &mut self.committed[panel.index()];
        let had = !slot.is_empty();
        slot.clear();
        had
    }

    pub(in crate::tui_shell) fn committed(&self, panel: Panel) -> &str {
        &self.committed[panel.index()]
    }

    /// The edit buffer while `panel` is being edited, else its committed text.
    pub(in crate::tui_shell) fn active_text(&self, panel: Panel) -> &str {
        match &self.editing {
            Some((p, input)) if *p == panel => &input.buf,
            _ => self.committed(panel),
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/filter_tests.rs"]
mod tests;
