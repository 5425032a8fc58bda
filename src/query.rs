/// Parameters of the current URL's query string
///
/// Parsed the way the browser's `URLSearchParams` reads `location.search`:
/// a leading `?` is dropped and the rest is read as
/// `application/x-www-form-urlencoded`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    raw: String,
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a `location.search` string such as `?page=3&limit=10`
    pub fn parse(search: &str) -> Self {
        let body = search.strip_prefix('?').unwrap_or(search);

        let pairs = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();

        QueryParams {
            raw: search.to_string(),
            pairs,
        }
    }

    /// True when the search string itself was empty
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// First value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_page_and_limit() {
        let params = QueryParams::parse("?page=3&limit=10");
        assert!(!params.is_empty());
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.get("filter"), None);
    }

    #[test]
    fn empty_search_has_no_params() {
        let params = QueryParams::parse("");
        assert!(params.is_empty());
        assert_eq!(params.get("page"), None);
    }

    #[test]
    fn first_value_wins() {
        let params = QueryParams::parse("page=2&page=5");
        assert_eq!(params.get("page"), Some("2"));
    }

    #[test]
    fn decodes_plus_and_escapes() {
        let params = QueryParams::parse("?filter=foo+bar%26baz&flag");
        assert_eq!(params.get("filter"), Some("foo bar&baz"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let params = QueryParams::parse("?filter=%FFtape");
        assert_eq!(params.get("filter"), Some("\u{FFFD}tape"));
    }

    #[test]
    fn value_may_contain_equals() {
        let params = QueryParams::parse("?filter=a=b");
        assert_eq!(params.get("filter"), Some("a=b"));
    }
}
