//! UI Error Types

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("browser error: {0}")]
    Js(String),
}

impl UiError {
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(message)
    }
}

impl From<gloo_net::Error> for UiError {
    fn from(err: gloo_net::Error) -> Self {
        UiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Decode(err.to_string())
    }
}

pub type UiResult<T> = Result<T, UiError>;
