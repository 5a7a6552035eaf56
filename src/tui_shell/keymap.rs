use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::context::Mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(in crate::tui_shell) enum KeyPattern {
    Key(KeyCode, KeyModifiers),
    /// Any printable char without ctrl/alt.
    AnyChar,
    /// Everything else; lets a mode swallow keys it does not bind.
    AnyKey,
}

impl KeyPattern {
    pub(in crate::tui_shell) fn key(code: KeyCode) -> Self {
        KeyPattern::Key(code, KeyModifiers::NONE)
    }

    pub(in crate::tui_shell) fn ch(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    pub(in crate::tui_shell) fn ctrl(c: char) -> Self {
        KeyPattern::Key(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Shift is folded into the char itself (`F`, not shift+`f`).
    pub(in crate::tui_shell) fn from_event(key: &KeyEvent) -> Self {
        let mut mods = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
        if !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab) {
            mods |= key.modifiers & KeyModifiers::SHIFT;
        }
        let code = match key.code {
            KeyCode::Char(c) if mods.contains(KeyModifiers::CONTROL) => {
                KeyCode::Char(c.to_ascii_lowercase())
            }
            other => other,
        };
        KeyPattern::Key(code, mods)
    }
}

/// Default bindings plus per-mode overrides. Lookup tries the mode's exact
/// key, then its char/any catch-alls, then the default table.
pub(in crate::tui_shell) struct Keymap<H> {
    defaults: HashMap<KeyPattern, H>,
    overrides: HashMap<(Mode, KeyPattern), H>,
}

impl<H: Copy> Keymap<H> {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            defaults: HashMap::new(),
            overrides: HashMap::new(),
        }
    }

    pub(in crate::tui_shell) fn bind(&mut self, pattern: KeyPattern, handler: H) {
        self.defaults.insert(pattern, handler);
    }

    pub(in crate::tui_shell) fn bind_in(&mut self, mode: Mode, pattern: KeyPattern, handler: H) {
        self.overrides.insert((mode, pattern), handler);
    }

    pub(in crate::tui_shell) fn bind_all_in(
        &mut self,
        mode: Mode,
        patterns: &[KeyPattern],
        handler: H,
    ) {
        for p in patterns {
            self.bind_in(mode, *p, handler);
        }
    }

    pub(in crate::tui_shell) fn lookup(&self, mode: Mode, key: &KeyEvent) -> Option<H> {
        let exact = KeyPattern::from_event(key);
        if let Some(h) = self.overrides.get(&(mode, exact)) {
            return Some(*h);
        }
        let printable = matches!(key.code, KeyCode::Char(_))
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if printable {
            if let Some(h) = self.overrides.get(&(mode, KeyPattern::AnyChar)) {
                return Some(*h);
            }
        }
        if let Some(h) = self.overrides.get(&(mode, KeyPattern::AnyKey)) {
            return Some(*h);
        }
        self.defaults.get(&exact).copied()
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/keymap_tests.rs"]
mod tests;
