    use super::*;

    struct Item {
        name: &'static str,
        path: &'static str,
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                name: "alice",
                path: "users/alice",
            },
            Item {
                name: "bob",
                path: "users/bob",
            },
            Item {
                name: "Order-1",
                path: "orders/Order-1",
            },
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let items = items();
        let view = derive(&items, "", |i| [i.name, i.path]);
        assert_eq!(view.len(), 3);
        assert!(matches("anything", ""));
    }

    #[test]
    fn derive_matches_any_field_case_insensitively() {
        let items = items();
        let view = derive(&items, "USERS", |i| [i.name, i.path]);
        let names: Vec<&str> = view.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["alice", "bob"]);

        let view = derive(&items, "order", |i| [i.name]);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].path, "orders/Order-1");
    }

    #[test]
    fn reverse_lookup_maps_filtered_position_to_backing() {
        let items = items();
        let view = derive(&items, "b", |i| [i.name]);
        assert_eq!(view.len(), 1);
        assert_eq!(backing_index(&items, &view, 0, |i| i.path), Some(1));
        assert_eq!(backing_index(&items, &view, 1, |i| i.path), None);
        assert_eq!(view_index(&view, "users/bob", |i| i.path), Some(0));
        assert_eq!(view_index(&view, "users/alice", |i| i.path), None);
    }

    #[test]
    fn start_edit_clears_committed_and_edit_buffer_is_active_text() {
        let mut filters = FilterEngine::default();
        filters.start_edit(Panel::Tree);
        filters.insert('a');
        filters.insert('b');
        assert_eq!(filters.active_text(Panel::Tree), "ab");
        assert_eq!(filters.committed(Panel::Tree), "");
        assert_eq!(filters.active_text(Panel::Projects), "");

        assert_eq!(filters.commit(), Some(Panel::Tree));
        assert!(!filters.is_editing());
        assert_eq!(filters.committed(Panel::Tree), "ab");

        filters.start_edit(Panel::Tree);
        assert_eq!(filters.committed(Panel::Tree), "");
        assert_eq!(filters.input().map(|i| i.cursor), Some(0));
    }

    #[test]
    fn cancel_discards_buffer_and_clear_reports_removal() {
        let mut filters = FilterEngine::default();
        filters.start_edit(Panel::Collections);
        filters.insert('x');
        filters.commit();

        filters.start_edit(Panel::Details);
        filters.insert('y');
        filters.backspace();
        filters.insert('z');
        assert_eq!(filters.editing_panel(), Some(Panel::Details));
        assert_eq!(filters.cancel(), Some(Panel::Details));
        assert_eq!(filters.active_text(Panel::Details), "");
        assert_eq!(filters.committed(Panel::Collections), "x");

        assert!(filters.clear(Panel::Collections));
        assert!(!filters.clear(Panel::Collections));
        assert_eq!(filters.cancel(), None);
    }
