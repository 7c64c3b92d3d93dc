//! Read-only HTTP access to the upstream API

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::IntegrationError;

/// Thin GET + decode client. Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ResourceClient {
    client: Client,
    base_url: String,
}

impl ResourceClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, IntegrationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IntegrationError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `url` and decode the body as `T`. No retries.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, IntegrationError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        handle_response(url, response).await
    }

    pub fn pokemon_url(&self, ident: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, ident)
    }

    pub fn species_url(&self, ident: &str) -> String {
        format!("{}/pokemon-species/{}", self.base_url, ident)
    }

    pub fn listing_url(&self, limit: u32, offset: u32) -> String {
        format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset)
    }

    pub fn type_url(&self, name: &str) -> String {
        format!("{}/type/{}", self.base_url, name)
    }

    pub fn generation_url(&self, name: &str) -> String {
        format!("{}/generation/{}", self.base_url, name)
    }

    pub fn generation_index_url(&self) -> String {
        format!("{}/generation", self.base_url)
    }
}

async fn handle_response<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T, IntegrationError> {
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(IntegrationError::NotFound { url: url.to_string() });
    }
    if !status.is_success() {
        return Err(IntegrationError::Remote {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| IntegrationError::decode(url, e.to_string()))
}
