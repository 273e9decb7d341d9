//! Cat API Client
//!
//! Fetches pages of image records from the remote search endpoint.

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::GalleryConfig;
use crate::error::{describe_js, GalleryError, GalleryResult};
use crate::models::{CatRecord, PageRequest};

/// Source of feed pages
#[async_trait(?Send)]
pub trait CatSource {
    async fn fetch_page(&self, request: &PageRequest) -> GalleryResult<Vec<CatRecord>>;
}

/// `fetch`-based client for the image search endpoint
#[derive(Debug, Clone)]
pub struct CatApiClient {
    endpoint: String,
}

impl CatApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.endpoint.clone())
    }
}

#[async_trait(?Send)]
impl CatSource for CatApiClient {
    async fn fetch_page(&self, request: &PageRequest) -> GalleryResult<Vec<CatRecord>> {
        let url = request.url(&self.endpoint);
        log::debug!("GET {}", url);

        let win = web_sys::window().ok_or_else(|| GalleryError::Network("no window".to_string()))?;
        let response = JsFuture::from(win.fetch_with_str(&url))
            .await
            .map_err(|e| GalleryError::Network(describe_js(&e)))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|e| GalleryError::Network(describe_js(&e)))?;

        if !response.ok() {
            return Err(GalleryError::Status(response.status()));
        }

        let body = response.json().map_err(|e| GalleryError::Decode(describe_js(&e)))?;
        let body = JsFuture::from(body)
            .await
            .map_err(|e| GalleryError::Decode(describe_js(&e)))?;
        let values: Vec<Value> =
            serde_wasm_bindgen::from_value(body).map_err(|e| GalleryError::Decode(e.to_string()))?;

        Ok(decode_page(values))
    }
}

/// Decode a page element by element. Only `url` decides whether a record is
/// usable; the other fields are best-effort. Elements without a url become
/// url-less records, which the renderer skips.
pub fn decode_page(values: Vec<Value>) -> Vec<CatRecord> {
    values.iter().map(decode_record).collect()
}

fn decode_record(value: &Value) -> CatRecord {
    let text = |field: &str| value.get(field).and_then(Value::as_str).map(str::to_string);
    let pixels = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    CatRecord {
        id: text("id"),
        url: text("url"),
        width: pixels("width"),
        height: pixels("height"),
    }
}
