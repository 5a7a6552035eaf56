    use super::*;

    #[test]
    fn insert_and_backspace_track_char_cursor() {
        let mut input = Input::default();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.buf, "héllo");
        assert_eq!(input.cursor, 5);

        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.buf, "éllo");
        assert_eq!(input.cursor, 0);

        input.backspace();
        assert_eq!(input.buf, "éllo");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn delete_removes_under_cursor_and_stops_at_end() {
        let mut input = Input::with_text("abc");
        assert_eq!(input.cursor, 3);
        input.delete();
        assert_eq!(input.buf, "abc");

        input.move_left();
        input.move_left();
        input.delete();
        assert_eq!(input.buf, "ac");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn cursor_stays_within_buffer() {
        let mut input = Input::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.insert_char('x');
        assert_eq!(input.buf, "xab");
        assert_eq!(input.cursor, 1);
    }
