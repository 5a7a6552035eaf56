    use super::*;

    #[test]
    fn ring_evicts_oldest_at_capacity() {
        let mut log = ActivityLog::with_capacity(3);
        for i in 0..5 {
            log.push("step", format!("entry {}", i), ActivityStatus::Success);
        }
        assert_eq!(log.len(), 3);
        let descriptions: Vec<&str> = log.entries().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["entry 2", "entry 3", "entry 4"]);
        assert_eq!(log.last().map(|e| e.description.as_str()), Some("entry 4"));
    }

    #[test]
    fn entries_keep_label_status_and_timestamp() {
        let mut log = ActivityLog::default();
        log.push("query", "No collection selected", ActivityStatus::Error);
        let entry = log.last().expect("entry");
        assert_eq!(entry.label, "query");
        assert_eq!(entry.status, ActivityStatus::Error);
        assert_eq!(entry.status.label(), "error");
        assert!(!entry.ts.is_empty());
    }

    #[test]
    fn default_capacity_is_bounded() {
        let mut log = ActivityLog::default();
        for i in 0..(ACTIVITY_CAPACITY + 10) {
            log.push("n", i.to_string(), ActivityStatus::Running);
        }
        assert_eq!(log.len(), ACTIVITY_CAPACITY);
        assert_eq!(
            log.entries().next().map(|e| e.description.clone()),
            Some("10".to_string())
        );
    }
