//! Persistent Key-Value Slot
//!
//! Abstraction over the browser's localStorage so the favorites store
//! can be exercised without a browser.

use crate::error::{describe_js, GalleryError, GalleryResult};

/// String key -> string value persistence
pub trait KeyValueSlot {
    /// Read the value under `key`; `Ok(None)` when absent
    fn read(&self, key: &str) -> GalleryResult<Option<String>>;

    /// Replace the value under `key`
    fn write(&self, key: &str, value: &str) -> GalleryResult<()>;
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

impl LocalStorageSlot {
    fn storage() -> GalleryResult<web_sys::Storage> {
        let win = web_sys::window().ok_or_else(|| GalleryError::Storage("no window".to_string()))?;
        win.local_storage()
            .map_err(|e| GalleryError::Storage(describe_js(&e)))?
            .ok_or_else(|| GalleryError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueSlot for LocalStorageSlot {
    fn read(&self, key: &str) -> GalleryResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| GalleryError::Storage(describe_js(&e)))
    }

    fn write(&self, key: &str, value: &str) -> GalleryResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| GalleryError::Storage(describe_js(&e)))
    }
}
