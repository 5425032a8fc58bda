use std::fmt;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::query::QueryParams;

lazy_static! {
    static ref CONTROL_ID_REGEX: Regex =
        Regex::new(r"^(?:([A-Za-z0-9_]+)-)?(limit|page|filter)$").unwrap();
}

/// Which pagination control changed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Limit,
    Page,
    Filter,
}

impl ControlKind {
    pub const ALL: [ControlKind; 3] = [ControlKind::Limit, ControlKind::Page, ControlKind::Filter];

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Limit => "limit",
            ControlKind::Page => "page",
            ControlKind::Filter => "filter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "limit" => Some(ControlKind::Limit),
            "page" => Some(ControlKind::Page),
            "filter" => Some(ControlKind::Filter),
            _ => None,
        }
    }
}

/// A set of `limit`/`page`/`filter` controls driving the same listing
///
/// The page carries two groups: the unprefixed one and the `acc-` one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlGroup {
    prefix: Option<String>,
}

impl ControlGroup {
    pub fn unprefixed() -> Self {
        ControlGroup { prefix: None }
    }

    /// An empty prefix is the same as the unprefixed group
    pub fn prefixed(prefix: &str) -> Self {
        if prefix.is_empty() {
            return Self::unprefixed();
        }
        ControlGroup {
            prefix: Some(prefix.to_string()),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Element id of one of this group's controls, e.g. `acc-limit`
    pub fn element_id(&self, kind: ControlKind) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}-{}", prefix, kind.as_str()),
            None => kind.as_str().to_string(),
        }
    }
}

/// Element id of a pagination control split into its group and kind
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlId {
    pub group: ControlGroup,
    pub kind: ControlKind,
}

impl ControlId {
    pub fn parse(id: &str) -> Result<Self> {
        let caps = CONTROL_ID_REGEX
            .captures(id)
            .ok_or_else(|| UiError::InvalidControlId(id.to_string()))?;

        let group = match caps.get(1) {
            Some(prefix) => ControlGroup::prefixed(prefix.as_str()),
            None => ControlGroup::unprefixed(),
        };
        let kind = ControlKind::from_name(&caps[2])
            .ok_or_else(|| UiError::InvalidControlId(id.to_string()))?;

        Ok(ControlId { group, kind })
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.group.element_id(self.kind))
    }
}

/// Current values of a group's three controls, read when the handler fires
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlSnapshot {
    pub page: String,
    pub limit: String,
    pub filter: String,
}

/// Values substituted for a blank control or a missing query parameter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListDefaults {
    pub page: String,
    pub limit: String,
}

impl Default for ListDefaults {
    fn default() -> Self {
        ListDefaults {
            page: "1".to_string(),
            limit: "10".to_string(),
        }
    }
}

/// How the filter value is written into the `/entries` URL
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterEncoding {
    /// Percent-encode every query value, like the global search does
    Encoded,
    /// Interpolate values verbatim (`filter=foo bar`), as the listing server expects
    #[default]
    Legacy,
}

/// Resolved listing state the browser navigates to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    pub page: String,
    pub limit: String,
    pub filter: Option<String>,
}

/// Computes the next `/entries` URL when a pagination control changes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    endpoint: String,
    defaults: ListDefaults,
    encoding: FilterEncoding,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new("/entries", ListDefaults::default(), FilterEncoding::default())
    }
}

impl Navigator {
    pub fn new(endpoint: &str, defaults: ListDefaults, encoding: FilterEncoding) -> Self {
        Navigator {
            endpoint: endpoint.to_string(),
            defaults,
            encoding,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Merge the changed control with the current URL and the other controls
    ///
    /// # Arguments
    /// * `changed` - Which of the group's controls fired `change`
    /// * `controls` - Live values of the group's controls
    /// * `params` - The current URL's query string
    ///
    /// # Returns
    /// * `ListState` - page, limit and (for filter changes only) the filter
    pub fn resolve(
        &self,
        changed: ControlKind,
        controls: &ControlSnapshot,
        params: &QueryParams,
    ) -> ListState {
        match changed {
            ControlKind::Limit => ListState {
                page: self.from_url(params, "page", &self.defaults.page),
                limit: controls.limit.clone(),
                filter: None,
            },
            ControlKind::Page => ListState {
                page: or_default(&controls.page, &self.defaults.page),
                limit: self.from_url(params, "limit", &self.defaults.limit),
                filter: None,
            },
            ControlKind::Filter => ListState {
                page: or_default(&controls.page, &self.defaults.page),
                limit: or_default(&controls.limit, &self.defaults.limit),
                filter: Some(controls.filter.clone()),
            },
        }
    }

    /// Render the destination URL for a resolved state
    pub fn url(&self, state: &ListState) -> String {
        let mut url = format!(
            "{}?page={}&limit={}",
            self.endpoint,
            self.encode(&state.page),
            self.encode(&state.limit)
        );
        if let Some(filter) = &state.filter {
            url.push_str("&filter=");
            url.push_str(&self.encode(filter));
        }
        url
    }

    /// Resolve and render in one step, from the raw `location.search`
    pub fn on_control_change(
        &self,
        changed: ControlKind,
        controls: &ControlSnapshot,
        search: &str,
    ) -> String {
        let params = QueryParams::parse(search);
        let state = self.resolve(changed, controls, &params);
        let url = self.url(&state);
        debug!("{} changed, navigating to {}", changed.as_str(), url);
        url
    }

    fn from_url(&self, params: &QueryParams, key: &str, default: &str) -> String {
        if params.is_empty() {
            return default.to_string();
        }
        params
            .get(key)
            .filter(|value| !value.is_empty())
            .unwrap_or(default)
            .to_string()
    }

    // urlencoding also escapes `!'()*`, which encodeURIComponent leaves as is
    fn encode(&self, value: &str) -> String {
        match self.encoding {
            FilterEncoding::Encoded => urlencoding::encode(value).into_owned(),
            FilterEncoding::Legacy => value.to_string(),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
