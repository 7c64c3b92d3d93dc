//! Upstream and query-engine configuration

use serde::{Deserialize, Serialize};

use pokedex_core::Filters;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/images/placeholder.webp";

/// Tunables for the upstream client and the catalog query engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Upstream API root, without a trailing slash
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client
    pub timeout_secs: u64,
    /// Maximum number of outstanding item/chain resolutions per query
    pub max_concurrency: usize,
    /// Page size for unfiltered listings
    pub base_limit: u32,
    /// Page size multiplier applied when any filter or search is active
    pub filter_multiplier: u32,
    /// Size of the single listing call that fetches the whole name index
    pub search_index_limit: u32,
    /// Image used when an item has neither official artwork nor a sprite
    pub placeholder_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_concurrency: 16,
            base_limit: 20,
            filter_multiplier: 3,
            search_index_limit: 1302,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Page size for a query. Filtered and searched queries fetch more per
    /// page to make up for items the filters drop.
    pub fn page_limit(&self, filters: &Filters) -> u32 {
        if filters.is_active() {
            self.base_limit * self.filter_multiplier
        } else {
            self.base_limit
        }
    }

    pub(crate) fn concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}
