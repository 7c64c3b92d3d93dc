//! Pokedex Core - Catalog types and static lookups
//!
//! This crate provides the types shared by the query layer and its consumers:
//! - Denormalized item view model, filters and pages
//! - Species color and type style tables
//! - Display helpers for generations and stats

pub mod display;
pub mod palette;
pub mod types;

pub use display::{format_generation_name, generation_short_label, StatTier};
pub use palette::{color_code_or_default, type_style, TypeStyle, DEFAULT_COLOR_CODE};
pub use types::{Filters, Generation, Item, ItemRef, ItemStat, ItemType, Page, ALL};
