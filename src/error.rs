//! Error type shared by the browser-facing layers.
//!
//! Game state transitions never fail; only DOM lookups, JS calls and config
//! parsing can. Exported functions hand these back to JS as `JsValue`.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("unknown route '{0}'")]
    UnknownRoute(String),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Config(err.to_string())
    }
}
