use thiserror::Error;

/// Errors raised while wiring the page scripts to the document
///
/// Filtering itself never fails: a missing cell is simply skipped. These
/// variants only come from the adapter layer (missing controls, wrong
/// element types) and from loading a page configuration.
#[derive(Debug, Error)]
pub enum UiError {
    /// No global `window` object (not running in a browser)
    #[error("no global window available")]
    NoWindow,

    /// The window has no document attached
    #[error("window has no document")]
    NoDocument,

    /// No element with the given id exists on the page
    #[error("element #{0} not found")]
    ElementNotFound(String),

    /// The element exists but is not of the expected kind
    #[error("element #{id} is not {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    /// A control id that does not name a `page`, `limit` or `filter` control
    #[error("invalid control id: {0}")]
    InvalidControlId(String),

    /// The page configuration could not be parsed
    #[error("invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A browser API call threw
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(feature = "web")]
impl From<UiError> for wasm_bindgen::JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        UiError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
