//! Gallery Errors
//!
//! Error type shared by the fetcher and the favorites storage.

use wasm_bindgen::{JsCast, JsValue};

/// Common result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Recoverable gallery errors. None of them is fatal to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryError {
    /// Transport failure (fetch rejected, no window...)
    Network(String),
    /// Non-success HTTP status
    Status(u16),
    /// Response body was not the expected JSON
    Decode(String),
    /// localStorage missing or refused the write
    Storage(String),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::Network(msg) => write!(f, "Network error: {}", msg),
            GalleryError::Status(code) => write!(f, "HTTP error! Status: {}", code),
            GalleryError::Decode(msg) => write!(f, "Decode error: {}", msg),
            GalleryError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {}

/// Best-effort message for a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
