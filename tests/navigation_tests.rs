//! URL resolution for the pagination controls and the global search.

#[cfg(not(target_arch = "wasm32"))]
mod navigation {
    use medialog_ui::{
        ControlId, ControlKind, ControlSnapshot, FilterEncoding, ListDefaults, Navigator,
        PageConfig, is_submit_key, search_url,
    };
    use rstest::rstest;

    fn snapshot(page: &str, limit: &str, filter: &str) -> ControlSnapshot {
        ControlSnapshot {
            page: page.to_string(),
            limit: limit.to_string(),
            filter: filter.to_string(),
        }
    }

    fn legacy() -> Navigator {
        PageConfig::default().navigator()
    }

    #[rstest]
    #[case::limit_keeps_url_page(ControlKind::Limit, snapshot("", "25", ""), "?page=3&limit=10", "/entries?page=3&limit=25")]
    #[case::limit_without_query(ControlKind::Limit, snapshot("3", "50", ""), "", "/entries?page=1&limit=50")]
    #[case::page_blank_no_query(ControlKind::Page, snapshot("", "", ""), "", "/entries?page=1&limit=10")]
    #[case::page_keeps_url_limit(ControlKind::Page, snapshot("2", "100", ""), "?page=1&limit=25", "/entries?page=2&limit=25")]
    #[case::page_ignores_limit_control(ControlKind::Page, snapshot("5", "100", ""), "", "/entries?page=5&limit=10")]
    #[case::filter_blank_controls(ControlKind::Filter, snapshot("", "", "foo bar"), "", "/entries?page=1&limit=10&filter=foo bar")]
    #[case::limit_with_empty_url_page(ControlKind::Limit, snapshot("", "25", ""), "?page=&limit=10", "/entries?page=1&limit=25")]
    #[case::page_with_empty_url_limit(ControlKind::Page, snapshot("6", "", ""), "?page=2&limit=", "/entries?page=6&limit=10")]
    #[case::filter_ignores_url(ControlKind::Filter, snapshot("4", "50", "vhs"), "?page=9&limit=10", "/entries?page=4&limit=50&filter=vhs")]
    fn legacy_urls(
        #[case] kind: ControlKind,
        #[case] controls: ControlSnapshot,
        #[case] search: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(legacy().on_control_change(kind, &controls, search), expected);
    }

    #[test]
    fn encoded_filter_escapes_reserved_characters() {
        let config = PageConfig::from_json(r#"{"filter_encoding": "encoded"}"#).unwrap();
        let url = config.navigator().on_control_change(
            ControlKind::Filter,
            &snapshot("", "", "a&b c"),
            "",
        );
        assert_eq!(url, "/entries?page=1&limit=10&filter=a%26b%20c");
    }

    #[test]
    fn both_groups_target_the_same_listing() {
        let config = PageConfig::default();
        let navigator = config.navigator();
        for group in config.control_groups() {
            let id = ControlId::parse(&group.element_id(ControlKind::Limit)).unwrap();
            assert_eq!(id.group, group);
            let url = navigator.on_control_change(id.kind, &snapshot("", "25", ""), "?page=3&limit=10");
            assert_eq!(url, "/entries?page=3&limit=25");
        }
    }

    #[test]
    fn custom_defaults_apply() {
        let defaults = ListDefaults {
            page: "0".to_string(),
            limit: "25".to_string(),
        };
        let navigator = Navigator::new("/accessions", defaults, FilterEncoding::Encoded);
        let url = navigator.on_control_change(ControlKind::Page, &snapshot("", "", ""), "");
        assert_eq!(url, "/accessions?page=0&limit=25");
    }

    #[test]
    fn global_search_on_enter() {
        assert!(is_submit_key(13));
        assert!(!is_submit_key(16));
        assert_eq!(search_url("/search", "a&b"), "/search?query=a%26b");
    }
}
