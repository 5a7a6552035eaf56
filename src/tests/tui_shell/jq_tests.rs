    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "name": "alice",
            "address": { "city": "Oslo" },
            "items": [ { "sku": "a1", "qty": 2 }, { "sku": "b2", "qty": 5 } ],
            "odd key": 7
        })
    }

    #[test]
    fn only_dot_prefixed_text_is_a_query() {
        assert!(is_query(".name"));
        assert!(is_query(". | keys"));
        assert!(!is_query("name"));
        assert!(!is_query(""));
    }

    #[test]
    fn paths_and_iteration() {
        let d = doc();
        assert_eq!(run(".", &d).expect("run"), vec![d.clone()]);
        assert_eq!(run(".address.city", &d).expect("run"), vec![json!("Oslo")]);
        assert_eq!(run(".missing", &d).expect("run"), vec![Value::Null]);
        assert_eq!(run(".[\"odd key\"]", &d).expect("run"), vec![json!(7)]);
        assert_eq!(run(".items[-1].sku", &d).expect("run"), vec![json!("b2")]);
        assert_eq!(
            run(".items[].sku", &d).expect("run"),
            vec![json!("a1"), json!("b2")]
        );
    }

    #[test]
    fn pipes_and_standard_functions() {
        let d = doc();
        assert_eq!(run(".items | length", &d).expect("run"), vec![json!(2)]);
        assert_eq!(
            run(".address | keys", &d).expect("run"),
            vec![json!(["city"])]
        );
        assert_eq!(
            run(".items[] | select(.qty > 3) | .sku", &d).expect("run"),
            vec![json!("b2")]
        );
        assert_eq!(
            run("[.items[].qty] | add", &d).expect("run"),
            vec![json!(7)]
        );
        assert_eq!(
            run(".items | map(.sku)", &d).expect("run"),
            vec![json!(["a1", "b2"])]
        );
        assert_eq!(
            run("{n: .name, c: .address.city}", &d).expect("run"),
            vec![json!({"n": "alice", "c": "Oslo"})]
        );
    }

    #[test]
    fn runtime_errors_are_reported() {
        let d = doc();
        let err = run(".name[]", &d).unwrap_err();
        assert!(err.to_string().starts_with("jq error: "), "{}", err);

        let err = run(".name.first", &d).unwrap_err();
        assert!(err.to_string().starts_with("jq error: "), "{}", err);
    }

    #[test]
    fn bad_syntax_and_unknown_functions_are_parse_errors() {
        let d = doc();
        let err = run(".items[0", &d).unwrap_err();
        assert!(err.to_string().starts_with("jq parse error: "), "{}", err);

        let err = run(".items | no_such_fn", &d).unwrap_err();
        assert!(err.to_string().starts_with("jq parse error: "), "{}", err);
    }
