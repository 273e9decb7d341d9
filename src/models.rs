//! Frontend Models
//!
//! Data structures for the cat feed and the favorites list.

use serde::{Deserialize, Serialize};

/// One image entry returned by the cat API.
/// Other API fields (breeds, categories...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl CatRecord {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Image url, if the record has a usable one
    pub fn image_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Persisted reference to a favorited cat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub url: String,
}

/// Which list the page is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    All,
    Favorites,
}

/// Feed fetcher state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    /// One request is outstanding
    Loading,
    /// The API returned an empty page; terminal for the session
    Exhausted,
}

/// A single page request against the image search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}?limit={}&page={}", endpoint, self.limit, self.page)
    }
}
