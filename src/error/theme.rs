use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

/// Failures the theme collaborators can report. None of these reach the
/// user; `ThemeController` recovers from every variant locally.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    StorageUnavailable(String),
    InvalidStoredValue(String),
    DocumentUnavailable(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::StorageUnavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            ThemeError::InvalidStoredValue(value) =>
                write!(f, "Invalid Stored Value: {:?} is not a theme", value),
            ThemeError::DocumentUnavailable(msg) => write!(f, "Document Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        ThemeError::StorageUnavailable(msg)
    }
}
