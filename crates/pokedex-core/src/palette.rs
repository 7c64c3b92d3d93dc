//! Static lookup tables for species colors and type styles
//!
//! Species colors map the upstream's canonical color names to hex codes.
//! Type styles give each elemental type a display color and an icon path.

use serde::Serialize;

/// Hex code used when a species color has no table entry
pub const DEFAULT_COLOR_CODE: &str = "#000000";

static SPECIES_COLORS: [(&str, &str); 10] = [
    ("black", "#000000"),
    ("blue", "#3B4CCA"),
    ("brown", "#B97A57"),
    ("gray", "#7B7B7B"),
    ("green", "#4CAF50"),
    ("pink", "#FF69B4"),
    ("purple", "#9B59B6"),
    ("red", "#FF0000"),
    ("white", "#FFFFFF"),
    ("yellow", "#FFD700"),
];

/// Display color and icon for one elemental type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeStyle {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

const fn style(name: &'static str, color: &'static str, icon: &'static str) -> TypeStyle {
    TypeStyle { name, color, icon }
}

/// All known types, in the order filter controls list them
pub static TYPE_STYLES: [TypeStyle; 20] = [
    style("normal", "#B3A492", "/images/types/normal.webp"),
    style("fighting", "#DE513F", "/images/types/fighting.webp"),
    style("flying", "#658ABB", "/images/types/flying.webp"),
    style("poison", "#B15292", "/images/types/poison.webp"),
    style("ground", "#E6AF44", "/images/types/ground.webp"),
    style("rock", "#AB9153", "/images/types/rock.webp"),
    style("bug", "#A5B613", "/images/types/bug.webp"),
    style("ghost", "#594592", "/images/types/ghost.webp"),
    style("steel", "#92A3AA", "/images/types/steel.webp"),
    style("fire", "#DA2C32", "/images/types/fire.webp"),
    style("water", "#0167AB", "/images/types/water.webp"),
    style("grass", "#01913A", "/images/types/grass.webp"),
    style("electric", "#F2C400", "/images/types/electric.webp"),
    style("psychic", "#D9558C", "/images/types/psychic.webp"),
    style("ice", "#39A3C4", "/images/types/ice.webp"),
    style("dragon", "#7D6DA4", "/images/types/dragon.webp"),
    style("dark", "#623A25", "/images/types/dark.webp"),
    style("fairy", "#E3A0C4", "/images/types/fairy.webp"),
    style("stellar", "#9B4DCA", "/images/types/stellar.webp"),
    style("unknown", "#486F60", "/images/types/unknown.webp"),
];

/// Hex code for a species color name, if the table knows it
pub fn color_code(color_name: &str) -> Option<&'static str> {
    SPECIES_COLORS
        .iter()
        .find(|(name, _)| *name == color_name)
        .map(|(_, code)| *code)
}

/// Hex code for a species color name, falling back to black
pub fn color_code_or_default(color_name: &str) -> &'static str {
    color_code(color_name).unwrap_or(DEFAULT_COLOR_CODE)
}

/// Style for a type name
pub fn type_style(type_name: &str) -> Option<&'static TypeStyle> {
    TYPE_STYLES.iter().find(|s| s.name == type_name)
}
