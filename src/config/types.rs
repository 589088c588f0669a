// Configuration type definitions

use serde::Deserialize;

/// Top-level configuration. Read once at startup and passed into the
/// controller at construction; no module-level settings state anywhere.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// GraphQL endpoint of the content backend
    pub endpoint: Option<String>,
    /// Maximum number of posts fetched per query
    pub search_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            search_limit: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period (milliseconds) before a query edit dispatches a fetch
    pub debounce_ms: u64,
    /// Recommended searches shown while the query is empty.
    /// Absent or empty is valid and yields zero recommended items.
    pub recommended: Vec<RecommendedEntry>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            recommended: Vec::new(),
        }
    }
}

/// One configured recommended search. `url` is optional; entries without
/// one land on the posts search page for their title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendedEntry {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}
