//! Generation and type lookups

use pokedex_core::Generation;

use crate::error::IntegrationError;
use crate::resource::ResourceClient;
use crate::types::{GenerationResponse, ResourceList, TypeResponse};

/// API client for the generation and type resources
pub struct TaxonomyApi {
    resources: ResourceClient,
}

impl TaxonomyApi {
    pub fn new(resources: ResourceClient) -> Self {
        Self { resources }
    }

    /// All generations, in upstream order
    pub async fn list_generations(&self) -> Result<Vec<Generation>, IntegrationError> {
        let url = self.resources.generation_index_url();
        let listing: ResourceList = self.resources.fetch_json(&url).await?;
        Ok(listing
            .results
            .into_iter()
            .map(|r| Generation { name: r.name, url: r.url })
            .collect())
    }

    /// Names of every item carrying the given type
    pub async fn type_members(&self, type_name: &str) -> Result<Vec<String>, IntegrationError> {
        let url = self.resources.type_url(type_name);
        let response: TypeResponse = self.resources.fetch_json(&url).await?;
        Ok(response.pokemon.into_iter().map(|m| m.pokemon.name).collect())
    }

    /// Names of every species introduced in the given generation
    pub async fn generation_members(&self, generation: &str) -> Result<Vec<String>, IntegrationError> {
        let url = self.resources.generation_url(generation);
        let response: GenerationResponse = self.resources.fetch_json(&url).await?;
        Ok(response.pokemon_species.into_iter().map(|s| s.name).collect())
    }
}
