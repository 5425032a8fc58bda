//! Global search box: Enter submits the typed text to the search page.

/// Key code of the Enter key
pub const ENTER_KEY_CODE: u32 = 13;

/// Whether a `keyup` with this `keyCode` should submit the search
pub fn is_submit_key(key_code: u32) -> bool {
    key_code == ENTER_KEY_CODE
}

/// Build the search destination, percent-encoding the typed text
///
/// `!'()*` are escaped too, unlike `encodeURIComponent`; the server decodes
/// both forms alike.
///
/// # Examples
/// ```
/// use medialog_ui::search::search_url;
///
/// assert_eq!(search_url("/search", "a&b"), "/search?query=a%26b");
/// ```
pub fn search_url(endpoint: &str, value: &str) -> String {
    format!("{}?query={}", endpoint, urlencoding::encode(value))
}
