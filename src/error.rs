//! Error type shared by the core and the DOM adapters.

use wasm_bindgen::JsValue;

/// Failure raised while initializing or running a UI component.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// `window` is not available (not running in a browser).
    #[error("no global window")]
    MissingWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    MissingDocument,
    /// A required element is absent or has the wrong type.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// `localStorage` is disabled or blocked for this origin.
    #[error("local storage unavailable")]
    StorageUnavailable,
    /// A browser API threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// A stored or supplied theme name is not `dark` or `light`.
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),
    /// The inline config block is not valid JSON for [`crate::config::UiConfig`].
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = match value.as_string() {
            Some(message) => message,
            None => match js_sys::JSON::stringify(&value) {
                Ok(json) => json.as_string().unwrap_or_else(|| format!("{value:?}")),
                Err(_) => format!("{value:?}"),
            },
        };
        Self::Js(message)
    }
}
