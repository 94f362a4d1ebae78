use super::*;

fn commit(version: &str) -> CommitRecord {
    CommitRecord {
        version_id: version.to_string(),
        commit_id: format!("id-{version}"),
        commit_message: "msg".to_string(),
    }
}

mod commit_parse_tests {
    use super::*;

    #[test]
    fn splits_on_first_separator() {
        let record = CommitRecord::parse("v3", "abc123: fix: handle empty input\n").unwrap();

        assert_eq!(record.version_id, "v3");
        assert_eq!(record.commit_id, "abc123");
        assert_eq!(record.commit_message, "fix: handle empty input");
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert!(CommitRecord::parse("v3", "abc123 no colon here").is_none());
    }

    #[test]
    fn colon_without_space_is_rejected() {
        assert!(CommitRecord::parse("v3", "abc123:message").is_none());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let record = CommitRecord::parse("v1", "  deadbeef: initial import  \n").unwrap();
        assert_eq!(record.commit_id, "deadbeef");
        assert_eq!(record.commit_message, "initial import");
    }
}

mod recent_commits_tests {
    use super::*;

    #[test]
    fn keeps_last_window_in_order() {
        let records: Vec<_> = (0..70).map(|i| commit(&format!("{i:03}"))).collect();

        let recent = recent_commits(&records, 60);
        assert_eq!(recent.len(), 60);
        assert_eq!(recent[0].version_id, "010");
        assert_eq!(recent[59].version_id, "069");
    }

    #[test]
    fn shorter_history_is_untouched() {
        let records = vec![commit("a"), commit("b")];
        assert_eq!(recent_commits(&records, 60).len(), 2);
    }

    #[test]
    fn empty_history() {
        assert!(recent_commits(&[], 60).is_empty());
    }
}

mod raw_snapshot_tests {
    use super::*;

    #[test]
    fn code_metric_from_pair() {
        let metric: CodeMetric = serde_json::from_str("[150, 6]").unwrap();
        assert_eq!(metric, CodeMetric { lines: 150, files: 6 });
    }

    #[test]
    fn file_entry_uses_second_element() {
        let entry: RawFileEntry = serde_json::from_str(r#"["ignored", 8]"#).unwrap();
        assert_eq!(entry.1, 8);
    }

    #[test]
    fn summary_extra_fields_are_ignored() {
        let raw: RawSnapshot = serde_json::from_str(
            r#"{
                "summary": {
                    "core": [100, 5], "load": [20, 2],
                    "core_score": 8.5, "load_score": 7.0,
                    "load_dep": [3, 1], "generated_by": "scanner"
                },
                "files": {}
            }"#,
        )
        .unwrap();
        assert_eq!(raw.summary.load_dep.1, 1);
    }
}
