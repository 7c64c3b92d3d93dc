//! Catalog query engine
//!
//! The upstream listing endpoint pages by offset only; it cannot combine
//! type, generation and name filters. Two strategies cover that gap:
//!
//! - **Search**: fetch the whole name index, expand every match to its full
//!   evolution chain, dedupe by id, then filter, sort and slice locally.
//!   `total` is exact.
//! - **Listing**: fetch one upstream page, resolve and filter it. A page that
//!   filters down to nothing is skipped while upstream has more. `total` is
//!   the upstream count, exact only when no filter is set.

use std::collections::{BTreeMap, HashSet};

use futures::stream::{self, StreamExt};
use tracing::{debug, error, info, warn};

use pokedex_core::{Filters, Generation, Item, ItemRef, Page};

use crate::config::CatalogConfig;
use crate::error::IntegrationError;
use crate::resolver::ItemResolver;
use crate::resource::ResourceClient;
use crate::taxonomy::TaxonomyApi;
use crate::types::{NamedResource, ResourceList};

pub struct Catalog {
    config: CatalogConfig,
    resolver: ItemResolver,
    taxonomy: TaxonomyApi,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Result<Self, IntegrationError> {
        let resources = ResourceClient::new(&config)?;
        let resolver = ItemResolver::new(resources.clone(), &config);
        let taxonomy = TaxonomyApi::new(resources);
        Ok(Self {
            config,
            resolver,
            taxonomy,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// One page of results. Failures degrade to an empty page so a consumer
    /// always has something to render.
    pub async fn list_items(&self, cursor: u32, filters: &Filters) -> Page {
        Self::page_or_empty(self.try_list_items(cursor, filters).await)
    }

    pub fn page_or_empty(result: Result<Page, IntegrationError>) -> Page {
        match result {
            Ok(page) => page,
            Err(e) => {
                error!("Catalog query failed: {}", e);
                Page::empty()
            }
        }
    }

    /// Like [`Catalog::list_items`] but surfaces whole-request failures
    pub async fn try_list_items(&self, cursor: u32, filters: &Filters) -> Result<Page, IntegrationError> {
        let limit = self.config.page_limit(filters);
        match filters.search_term() {
            Some(term) => self.search_page(cursor, filters, &term, limit).await,
            None => self.listing_page(cursor, filters, limit).await,
        }
    }

    /// Detail record with its evolution chain
    pub async fn get_by_id(&self, item_ref: impl Into<ItemRef>) -> Result<Item, IntegrationError> {
        self.resolver.resolve(&item_ref.into()).await
    }

    pub async fn list_generations(&self) -> Result<Vec<Generation>, IntegrationError> {
        self.taxonomy.list_generations().await
    }

    pub async fn type_members(&self, type_name: &str) -> Result<Vec<String>, IntegrationError> {
        self.taxonomy.type_members(type_name).await
    }

    pub async fn generation_members(&self, generation: &str) -> Result<Vec<String>, IntegrationError> {
        self.taxonomy.generation_members(generation).await
    }

    async fn search_page(
        &self,
        cursor: u32,
        filters: &Filters,
        term: &str,
        limit: u32,
    ) -> Result<Page, IntegrationError> {
        let resources = self.resolver.resources();
        let index_url = resources.listing_url(self.config.search_index_limit, 0);
        let index: ResourceList = resources.fetch_json(&index_url).await?;

        let matches: Vec<NamedResource> = index
            .results
            .into_iter()
            .filter(|entry| entry.name.to_lowercase().contains(term))
            .collect();
        debug!("Search '{}' matched {} names", term, matches.len());

        let chain_urls = self.unique_chain_urls(&matches).await;
        let items = self.collect_chain_items(&chain_urls).await;

        let filtered: Vec<Item> = items.into_values().filter(|item| filters.matches(item)).collect();
        let total = filtered.len();
        let start = (cursor as usize).saturating_mul(limit as usize).min(total);
        let end = start.saturating_add(limit as usize).min(total);
        let data: Vec<Item> = filtered.into_iter().skip(start).take(end - start).collect();

        info!(
            "Search '{}' page {}: {} of {} items from {} chains",
            term,
            cursor,
            data.len(),
            total,
            chain_urls.len()
        );

        Ok(Page {
            data,
            next_cursor: (end < total).then(|| cursor + 1),
            total: total as u32,
            total_exact: true,
        })
    }

    /// Chain URL for every match, deduplicated, first occurrence wins.
    /// Matches whose chain cannot be resolved are logged and skipped.
    async fn unique_chain_urls(&self, matches: &[NamedResource]) -> Vec<String> {
        let resolved: Vec<(NamedResource, Result<String, IntegrationError>)> = stream::iter(matches.to_vec())
            .map(|entry| async move {
                let result = self.resolver.chain_url(&entry).await;
                (entry, result)
            })
            .buffered(self.config.concurrency())
            .collect()
            .await;

        let mut seen = HashSet::new();
        let mut urls = Vec::new();
        for (entry, result) in resolved {
            match result {
                Ok(url) => {
                    if seen.insert(url.clone()) {
                        urls.push(url);
                    }
                }
                Err(e) => warn!("Skipping search match {}: {}", entry.name, e),
            }
        }
        urls
    }

    /// Walk every chain and merge the results into an id-keyed map.
    /// A failed chain is logged and left out.
    async fn collect_chain_items(&self, chain_urls: &[String]) -> BTreeMap<u32, Item> {
        let walks: Vec<(String, Result<Vec<Item>, IntegrationError>)> = stream::iter(chain_urls.to_vec())
            .map(|url| async move {
                let result = self.resolver.walk_chain_at(&url).await;
                (url, result)
            })
            .buffer_unordered(self.config.concurrency())
            .collect()
            .await;

        let mut items = BTreeMap::new();
        for (url, result) in walks {
            match result {
                Ok(chain_items) => merge_by_id(&mut items, chain_items),
                Err(e) => warn!("Skipping evolution chain {}: {}", url, e),
            }
        }
        items
    }

    async fn listing_page(&self, cursor: u32, filters: &Filters, limit: u32) -> Result<Page, IntegrationError> {
        let resources = self.resolver.resources();
        let mut cursor = cursor;

        // Bounded by the upstream's finite item count: every iteration moves
        // the offset forward and stops once `next` is null.
        loop {
            let offset = cursor.saturating_mul(limit);
            let listing: ResourceList = resources.fetch_json(&resources.listing_url(limit, offset)).await?;
            let has_more = listing.next.is_some() && !listing.results.is_empty();

            let resolved: Vec<(NamedResource, Result<Item, IntegrationError>)> = stream::iter(listing.results)
                .map(|entry| async move {
                    let result = self.resolver.resolve_summary(&entry.name).await;
                    (entry, result)
                })
                .buffered(self.config.concurrency())
                .collect()
                .await;

            let mut data: Vec<Item> = resolved
                .into_iter()
                .filter_map(|(entry, result)| match result {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!("Dropping {} from page {}: {}", entry.name, cursor, e);
                        None
                    }
                })
                .filter(|item| filters.matches(item))
                .collect();
            data.sort_by_key(|item| item.id);

            if data.is_empty() && has_more {
                debug!("Page {} is empty after filtering, trying page {}", cursor, cursor + 1);
                cursor += 1;
                continue;
            }

            return Ok(Page {
                data,
                next_cursor: has_more.then(|| cursor + 1),
                total: listing.count,
                total_exact: !filters.has_attribute_filter(),
            });
        }
    }
}

/// Insert chain results into the per-query dedup map. Later records replace
/// earlier ones with the same id.
fn merge_by_id(items: &mut BTreeMap<u32, Item>, chain_items: Vec<Item>) {
    for item in chain_items {
        items.insert(item.id, item);
    }
}
