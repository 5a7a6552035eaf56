    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn keymap() -> Keymap<&'static str> {
        let mut km = Keymap::new();
        km.bind(KeyPattern::ch('j'), "down");
        km.bind(KeyPattern::key(KeyCode::Esc), "escape");
        km.bind(KeyPattern::ch('F'), "query");
        km.bind_in(Mode::Select, KeyPattern::ch(' '), "fetch");
        km.bind_in(Mode::FilterInput, KeyPattern::AnyChar, "insert");
        km.bind_in(Mode::FilterInput, KeyPattern::key(KeyCode::Esc), "cancel");
        km.bind_in(Mode::FilterInput, KeyPattern::AnyKey, "swallow");
        for mode in Mode::ALL {
            km.bind_in(mode, KeyPattern::ctrl('c'), "quit");
        }
        km
    }

    #[test]
    fn same_key_means_different_things_per_mode() {
        let km = keymap();
        let j = press(KeyCode::Char('j'));
        assert_eq!(km.lookup(Mode::Normal, &j), Some("down"));
        assert_eq!(km.lookup(Mode::Select, &j), Some("down"));
        assert_eq!(km.lookup(Mode::FilterInput, &j), Some("insert"));
    }

    #[test]
    fn exact_override_beats_catch_alls_and_unbound_falls_to_default() {
        let km = keymap();
        let esc = press(KeyCode::Esc);
        assert_eq!(km.lookup(Mode::FilterInput, &esc), Some("cancel"));
        assert_eq!(km.lookup(Mode::Select, &esc), Some("escape"));

        let space = press(KeyCode::Char(' '));
        assert_eq!(km.lookup(Mode::Select, &space), Some("fetch"));
        assert_eq!(km.lookup(Mode::Normal, &space), None);
    }

    #[test]
    fn any_key_swallows_non_char_keys() {
        let km = keymap();
        assert_eq!(
            km.lookup(Mode::FilterInput, &press(KeyCode::Tab)),
            Some("swallow")
        );
        assert_eq!(km.lookup(Mode::Normal, &press(KeyCode::Tab)), None);
    }

    #[test]
    fn shifted_chars_and_ctrl_chords_normalize() {
        let km = keymap();
        let shift_f = KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT);
        assert_eq!(km.lookup(Mode::Normal, &shift_f), Some("query"));

        let ctrl_c = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL);
        for mode in Mode::ALL {
            assert_eq!(km.lookup(mode, &ctrl_c), Some("quit"), "{:?}", mode);
        }
        assert_eq!(
            KeyPattern::from_event(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyPattern::key(KeyCode::BackTab)
        );
    }
