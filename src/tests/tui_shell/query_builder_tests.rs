    use super::*;
    use crate::query::GridRow;

    fn builder_with_filter() -> QueryBuilder {
        let mut draft = QueryDraft::new("users");
        draft.add_filter();
        QueryBuilder::open(draft, None)
    }

    #[test]
    fn enter_on_text_cell_edits_and_commit_stores_trimmed_text() {
        let mut b = builder_with_filter();
        assert_eq!(b.draft.active_cell(), Cell::Field(0));
        assert_eq!(b.activate(), BuilderOutcome::Stay);
        assert_eq!(b.phase(), BuilderPhase::FieldEdit);

        let input = b.input_mut().expect("editing");
        for c in " status ".chars() {
            input.insert_char(c);
        }
        b.commit_edit();
        assert_eq!(b.phase(), BuilderPhase::Grid);
        assert_eq!(b.draft.filters[0].field, "status");
    }

    #[test]
    fn escape_from_edit_discards_text() {
        let mut b = builder_with_filter();
        b.activate();
        b.input_mut().expect("editing").insert_char('x');
        b.cancel();
        assert_eq!(b.phase(), BuilderPhase::Grid);
        assert_eq!(b.draft.filters[0].field, "");
        assert!(b.input_mut().is_none());
    }

    #[test]
    fn option_popup_starts_on_current_value_and_clamps() {
        let mut b = builder_with_filter();
        b.draft.move_right();
        assert_eq!(b.draft.active_cell(), Cell::Operator(0));
        b.activate();
        assert_eq!(b.phase(), BuilderPhase::OptionPopup);
        assert_eq!(b.popup().map(|(_, h)| h), Some(0));

        b.popup_move(-1);
        assert_eq!(b.popup().map(|(_, h)| h), Some(0));
        b.popup_move(4);
        b.commit_choice();
        assert_eq!(b.draft.filters[0].op, ">");

        b.activate();
        assert_eq!(b.popup().map(|(_, h)| h), Some(4));
        b.popup_move(100);
        let (choices, h) = b.popup().expect("popup");
        assert_eq!(h, choices.len() - 1);
        b.cancel();
        assert_eq!(b.draft.filters[0].op, ">");
    }

    #[test]
    fn execute_and_clear_buttons() {
        let mut b = builder_with_filter();
        b.draft.order_by = "created".to_string();
        while b.draft.active_row() != GridRow::Buttons {
            b.draft.move_down();
        }
        assert_eq!(b.draft.active_cell(), Cell::Execute);
        assert_eq!(b.activate(), BuilderOutcome::Execute);

        b.draft.move_right();
        assert_eq!(b.draft.active_cell(), Cell::Clear);
        assert_eq!(b.activate(), BuilderOutcome::Stay);
        assert!(b.draft.filters.is_empty());
        assert_eq!(b.draft.order_by, "");
        assert_eq!(b.draft.collection_path, "users");
    }

    #[test]
    fn limit_edit_rejects_non_positive_values() {
        let mut b = builder_with_filter();
        while b.draft.active_row() != GridRow::Limit {
            b.draft.move_down();
        }
        b.activate();
        let input = b.input_mut().expect("editing");
        assert_eq!(input.buf, "50");
        input.set("0".to_string());
        b.commit_edit();
        assert_eq!(b.draft.limit, 50);

        b.activate();
        b.input_mut().expect("editing").set("25".to_string());
        b.commit_edit();
        assert_eq!(b.draft.limit, 25);
    }
