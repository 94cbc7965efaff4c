use std::fmt::{Display, Formatter};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    MissingElement(String),
    Storage(String),
    InvalidTheme(String),
    Config(String),
    Js(String),
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::MissingElement(selector) => write!(f, "Missing element: {}", selector),
            UiError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            UiError::InvalidTheme(name) => write!(f, "Invalid theme name: {:?}", name),
            UiError::Config(msg) => write!(f, "Config Error: {}", msg),
            UiError::Js(msg) => write!(f, "JavaScript Error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for UiError {
    fn from(error: serde_json::Error) -> Self {
        UiError::Config(error.to_string())
    }
}
