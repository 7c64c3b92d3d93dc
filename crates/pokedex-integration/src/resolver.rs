//! Builds denormalized [`Item`] records from the item and species resources

use tracing::debug;

use pokedex_core::{color_code_or_default, Item, ItemRef, ItemStat, ItemType};

use crate::config::CatalogConfig;
use crate::error::IntegrationError;
use crate::evolution::EvolutionWalker;
use crate::resource::ResourceClient;
use crate::types::{ChainLink, EvolutionChainResponse, NamedResource, PokemonRecord, SpeciesRecord};

/// Resolves item identifiers into view models
pub struct ItemResolver {
    resources: ResourceClient,
    placeholder_image: String,
}

impl ItemResolver {
    pub fn new(resources: ResourceClient, config: &CatalogConfig) -> Self {
        Self {
            resources,
            placeholder_image: config.placeholder_image.clone(),
        }
    }

    pub fn resources(&self) -> &ResourceClient {
        &self.resources
    }

    /// Full record including the evolution chain, for detail lookups
    pub async fn resolve(&self, item_ref: &ItemRef) -> Result<Item, IntegrationError> {
        let ident = item_ref.to_string();
        let (pokemon, species) = self.fetch_records(&ident).await?;

        let chain_url = species
            .evolution_chain
            .as_ref()
            .map(|c| c.url.clone())
            .ok_or_else(|| {
                IntegrationError::decode(
                    &self.resources.species_url(&species.name),
                    "species has no evolution chain",
                )
            })?;
        let chain = self.fetch_chain(&chain_url).await?;
        let evolutions = EvolutionWalker::new(self).walk(&chain).await?;

        let mut item = self.assemble(pokemon, species);
        item.evolutions = evolutions;
        Ok(item)
    }

    /// Record without evolutions, as shown in list views and chain entries
    pub async fn resolve_summary(&self, ident: &str) -> Result<Item, IntegrationError> {
        let (pokemon, species) = self.fetch_records(ident).await?;
        Ok(self.assemble(pokemon, species))
    }

    /// Evolution-chain URL for an index entry: item record -> species -> chain
    pub async fn chain_url(&self, entry: &NamedResource) -> Result<String, IntegrationError> {
        let url = if entry.url.is_empty() {
            self.resources.pokemon_url(&entry.name)
        } else {
            entry.url.clone()
        };
        let pokemon: PokemonRecord = self.resources.fetch_json(&url).await?;
        let species: SpeciesRecord = self.resources.fetch_json(&pokemon.species.url).await?;
        species
            .evolution_chain
            .map(|c| c.url)
            .ok_or_else(|| IntegrationError::decode(&pokemon.species.url, "species has no evolution chain"))
    }

    pub async fn fetch_chain(&self, url: &str) -> Result<ChainLink, IntegrationError> {
        let response: EvolutionChainResponse = self.resources.fetch_json(url).await?;
        Ok(response.chain)
    }

    /// Fetch a chain and walk it. Entries carry no nested evolutions.
    pub async fn walk_chain_at(&self, url: &str) -> Result<Vec<Item>, IntegrationError> {
        let chain = self.fetch_chain(url).await?;
        EvolutionWalker::new(self).walk(&chain).await
    }

    /// Fetch the item and species records for `ident` concurrently.
    ///
    /// Item names and species names usually coincide. When one side is
    /// missing, the other side's cross-reference is followed instead: an
    /// alternate form points at its species, and a species lists its default
    /// variety.
    pub async fn fetch_records(
        &self,
        ident: &str,
    ) -> Result<(PokemonRecord, SpeciesRecord), IntegrationError> {
        let pokemon_url = self.resources.pokemon_url(ident);
        let species_url = self.resources.species_url(ident);
        let (pokemon, species) = futures::join!(
            self.resources.fetch_json::<PokemonRecord>(&pokemon_url),
            self.resources.fetch_json::<SpeciesRecord>(&species_url)
        );

        match (pokemon, species) {
            (Ok(pokemon), Ok(species)) => Ok((pokemon, species)),
            (Ok(pokemon), Err(e)) if e.is_not_found() => {
                debug!("No species named {}, following {}", ident, pokemon.species.url);
                let species = self.resources.fetch_json(&pokemon.species.url).await?;
                Ok((pokemon, species))
            }
            (Err(e), Ok(species)) if e.is_not_found() => {
                let variety = species.default_variety().ok_or(e)?;
                debug!("No item named {}, using default variety {}", ident, variety.name);
                let url = if variety.url.is_empty() {
                    self.resources.pokemon_url(&variety.name)
                } else {
                    variety.url.clone()
                };
                let pokemon = self.resources.fetch_json(&url).await?;
                Ok((pokemon, species))
            }
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }

    fn assemble(&self, pokemon: PokemonRecord, species: SpeciesRecord) -> Item {
        let image = pokemon.image_or(&self.placeholder_image);

        let mut types: Vec<ItemType> = pokemon
            .types
            .into_iter()
            .map(|t| ItemType {
                slot: t.slot,
                type_name: t.kind.name,
            })
            .collect();
        types.sort_by_key(|t| t.slot);

        let mut stats: Vec<ItemStat> = Vec::with_capacity(pokemon.stats.len());
        for entry in pokemon.stats {
            if stats.iter().any(|s| s.stat_name == entry.stat.name) {
                continue;
            }
            stats.push(ItemStat {
                stat_name: entry.stat.name,
                base_value: entry.base_stat,
            });
        }

        let color_code = color_code_or_default(&species.color.name).to_string();

        Item {
            id: pokemon.id,
            name: pokemon.name,
            image,
            types,
            stats,
            generation: species.generation.name,
            color: species.color.name,
            color_code,
            weight: pokemon.weight,
            height: pokemon.height,
            evolutions: Vec::new(),
        }
    }
}
