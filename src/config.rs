use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::RowFilter;
use crate::navigator::{ControlGroup, FilterEncoding, ListDefaults, Navigator};

/// Page sizes the server offers in the `limit` selectors
pub const LIMIT_CHOICES: [u32; 4] = [10, 25, 50, 100];

/// One filterable table on the page
///
/// Each target is one call site of the row filter: a table, the text input
/// holding the query, and the columns to search.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilterTarget {
    /// Name used to look the target up (`accessions`, `resources`, ...)
    pub name: String,

    /// Id of the `<table>` whose rows are filtered
    pub table_id: String,

    /// Id of the text input holding the query
    pub input_id: String,

    /// Zero-based column indices to test, in order
    pub columns: Vec<usize>,
}

impl FilterTarget {
    pub fn new(name: &str, table_id: &str, input_id: &str, columns: &[usize]) -> Self {
        FilterTarget {
            name: name.to_string(),
            table_id: table_id.to_string(),
            input_id: input_id.to_string(),
            columns: columns.to_vec(),
        }
    }

    /// Accession number, title and repository columns
    pub fn accessions() -> Self {
        Self::new("accessions", "accessionsTable", "filterText", &[0, 1, 2])
    }

    /// Resource identifier column only
    pub fn resources() -> Self {
        Self::new("resources", "resourceTable", "filterText", &[0])
    }

    /// Resource identifier and title columns
    pub fn resource_columns() -> Self {
        Self::new("resource_columns", "resourceTable", "filterText", &[0, 1])
    }

    pub fn entries() -> Self {
        Self::new("entries", "entriesTable", "filterText", &[0, 1, 2, 3])
    }

    pub fn row_filter(&self) -> RowFilter {
        RowFilter::new(self.columns.clone())
    }
}

/// Wiring of the page scripts to the rendered document
///
/// `PageConfig::default()` matches the medialog templates. A page can pass
/// a JSON override to `install`; missing fields keep their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Tables filterable from a text input
    pub filter_targets: Vec<FilterTarget>,

    /// Prefixes of the pagination control groups; `""` is the unprefixed group
    pub control_prefixes: Vec<String>,

    /// Listing page the pagination controls navigate to
    pub entries_endpoint: String,

    /// Page the global search navigates to
    pub search_endpoint: String,

    /// Id of the global search input
    pub search_input_id: String,

    /// Id of the password field toggled by `toggle_password`
    pub password_field_id: String,

    /// Values used for blank controls and missing URL parameters
    pub defaults: ListDefaults,

    /// Whether the filter value is percent-encoded in the listing URL
    pub filter_encoding: FilterEncoding,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            filter_targets: vec![
                FilterTarget::accessions(),
                FilterTarget::resources(),
                FilterTarget::resource_columns(),
                FilterTarget::entries(),
            ],
            control_prefixes: vec![String::new(), "acc".to_string()],
            entries_endpoint: "/entries".to_string(),
            search_endpoint: "/search".to_string(),
            search_input_id: "globalSearch".to_string(),
            password_field_id: "password_1".to_string(),
            defaults: ListDefaults::default(),
            filter_encoding: FilterEncoding::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON configuration
    ///
    /// # Arguments
    /// * `json` - JSON object; omitted fields take their default values
    ///
    /// # Returns
    /// * `Result<PageConfig>` - The configuration or `UiError::Config`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn target(&self, name: &str) -> Option<&FilterTarget> {
        self.filter_targets.iter().find(|t| t.name == name)
    }

    pub fn control_groups(&self) -> Vec<ControlGroup> {
        self.control_prefixes
            .iter()
            .map(|prefix| ControlGroup::prefixed(prefix))
            .collect()
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(&self.entries_endpoint, self.defaults.clone(), self.filter_encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use crate::navigator::ControlKind;

    #[test]
    fn default_matches_medialog_page() {
        let config = PageConfig::default();
        assert_eq!(config.target("accessions").unwrap().columns, vec![0, 1, 2]);
        assert_eq!(config.target("resources").unwrap().table_id, "resourceTable");
        assert_eq!(config.target("entries").unwrap().columns.len(), 4);

        let ids: Vec<String> = config
            .control_groups()
            .iter()
            .map(|g| g.element_id(ControlKind::Limit))
            .collect();
        assert_eq!(ids, vec!["limit", "acc-limit"]);
        assert_eq!(config.navigator().endpoint(), "/entries");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        assert_eq!(PageConfig::default().filter_encoding, FilterEncoding::Legacy);

        let config = PageConfig::from_json(r#"{"filter_encoding": "encoded"}"#).unwrap();
        assert_eq!(config.filter_encoding, FilterEncoding::Encoded);
        assert_eq!(config.search_input_id, "globalSearch");
        assert_eq!(config.defaults.limit, "10");
    }

    #[test]
    fn custom_targets_replace_presets() {
        let json = r#"{
            "filter_targets": [
                {"name": "logs", "table_id": "logTable", "input_id": "q", "columns": [2]}
            ],
            "defaults": {"limit": "25"}
        }"#;
        let config = PageConfig::from_json(json).unwrap();
        assert_eq!(config.filter_targets.len(), 1);
        assert_eq!(config.target("logs").unwrap().row_filter().columns(), &[2]);
        assert_eq!(config.defaults.page, "1");
        assert_eq!(config.defaults.limit, "25");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PageConfig::from_json(r#"{"pagesize": 5}"#).unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn default_limit_is_offered() {
        let limit: u32 = PageConfig::default().defaults.limit.parse().unwrap();
        assert!(LIMIT_CHOICES.contains(&limit));
    }
}
