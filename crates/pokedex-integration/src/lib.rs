//! Pokedex Integration - PokeAPI aggregation layer
//!
//! Fetches item, species and evolution-chain resources, assembles them into
//! catalog view models, and serves filtered, searched and paginated queries.

pub mod error;
pub mod config;
pub mod types;
pub mod resource;
pub mod resolver;
pub mod evolution;
pub mod taxonomy;
pub mod catalog;
pub mod client;

pub use catalog::Catalog;
pub use client::{CatalogClient, PendingRequest};
pub use config::CatalogConfig;
pub use error::IntegrationError;
