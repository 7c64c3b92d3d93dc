//! Decode contracts for the upstream endpoints.
//!
//! Only the fields the catalog reads are modelled; a response missing any of
//! them fails to decode instead of producing a half-filled record.

use serde::Deserialize;

/// `{name, url}` reference used throughout the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Bare `{url}` reference
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

/// Paged listing from `/pokemon` and `/generation`
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Item record from `/pokemon/{idOrName}`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub species: NamedResource,
    pub weight: u32,
    pub height: u32,
}

impl PokemonRecord {
    /// Official artwork, else the default sprite, else `placeholder`
    pub fn image_or(&self, placeholder: &str) -> String {
        self.sprites
            .other
            .official_artwork
            .as_ref()
            .and_then(|art| non_empty(art.front_default.as_deref()))
            .or_else(|| non_empty(self.sprites.front_default.as_deref()))
            .unwrap_or(placeholder)
            .to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// Species record from `/pokemon-species/{idOrName}`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    pub color: NamedResource,
    pub generation: NamedResource,
    #[serde(default)]
    pub evolution_chain: Option<UrlResource>,
    #[serde(default)]
    pub varieties: Vec<Variety>,
}

impl SpeciesRecord {
    /// The item record this species is displayed as by default
    pub fn default_variety(&self) -> Option<&NamedResource> {
        self.varieties
            .iter()
            .find(|v| v.is_default)
            .or_else(|| self.varieties.first())
            .map(|v| &v.pokemon)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Variety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: NamedResource,
}

/// Response from an evolution-chain URL
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainResponse {
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Response from `/type/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct TypeResponse {
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedResource,
}

/// Response from `/generation/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    pub pokemon_species: Vec<NamedResource>,
}
