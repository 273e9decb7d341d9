//! Gallery Configuration
//!
//! Fixed settings for the feed, the scroll sentinel and persistence.

use log::LevelFilter;

pub const DEFAULT_ENDPOINT: &str = "https://api.thecatapi.com/v1/images/search";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Image search endpoint
    pub endpoint: String,
    /// Records requested per page
    pub page_size: u32,
    /// Distance from the page bottom (px) that triggers the next fetch
    pub end_threshold_px: f64,
    /// localStorage key holding the favorites JSON
    pub storage_key: String,
    /// Wait before re-checking the page end after a failed fetch
    pub retry_delay_ms: u32,
    /// Minimum interval between live scroll checks
    pub scroll_throttle_ms: f64,
    pub log_level: LevelFilter,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: 100,
            end_threshold_px: 300.0,
            storage_key: "favoriteCats".to_string(),
            retry_delay_ms: 2000,
            scroll_throttle_ms: 200.0,
            log_level: LevelFilter::Info,
        }
    }
}
