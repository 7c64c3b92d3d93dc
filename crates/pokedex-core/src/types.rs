//! Catalog view models shared by the query layer and its consumers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel filter value meaning "no constraint"
pub const ALL: &str = "all";

/// A type slot on an item. Lower slots are displayed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemType {
    pub slot: u8,
    pub type_name: String,
}

/// A base stat on an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStat {
    pub stat_name: String,
    pub base_value: u32,
}

/// Denormalized creature record assembled from the item, species and
/// evolution-chain resources.
///
/// `weight` and `height` are in the upstream's native units (hectograms and
/// decimetres); use [`Item::weight_kg`] and [`Item::height_m`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Artwork URL or the local placeholder path. Never empty.
    pub image: String,
    pub types: Vec<ItemType>,
    pub stats: Vec<ItemStat>,
    pub generation: String,
    pub color: String,
    pub color_code: String,
    pub weight: u32,
    pub height: u32,
    /// Related items from the evolution chain. Only filled on detail lookups;
    /// nested entries never carry their own evolutions.
    #[serde(default)]
    pub evolutions: Vec<Item>,
}

impl Item {
    /// Whether any of the item's type slots carries `type_name`
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.type_name == type_name)
    }

    /// Base value of the named stat, if present
    pub fn stat(&self, stat_name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat_name == stat_name)
            .map(|s| s.base_value)
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_value).sum()
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    /// Height in metres
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }
}

/// Client-requested filters. `"all"` disables the type/generation constraint
/// and an empty search disables name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    #[serde(rename = "type")]
    pub item_type: String,
    pub generation: String,
    pub search: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            item_type: ALL.to_string(),
            generation: ALL.to_string(),
            search: String::new(),
        }
    }
}

impl Filters {
    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn with_generation(mut self, generation: impl Into<String>) -> Self {
        self.generation = generation.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Normalized search term, or `None` when search is off.
    /// Whitespace-only input counts as no search.
    pub fn search_term(&self) -> Option<String> {
        let term = self.search.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    /// Whether any filter (type, generation or search) narrows the result set
    pub fn is_active(&self) -> bool {
        self.has_attribute_filter() || self.search_term().is_some()
    }

    /// Whether a type or generation constraint is set
    pub fn has_attribute_filter(&self) -> bool {
        self.item_type != ALL || self.generation != ALL
    }

    /// Type and generation predicate. Search is applied upstream of this.
    pub fn matches(&self, item: &Item) -> bool {
        (self.item_type == ALL || item.has_type(&self.item_type))
            && (self.generation == ALL || item.generation == self.generation)
    }
}

/// One page of catalog results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub data: Vec<Item>,
    /// Cursor of the following page, `None` once the result set is exhausted
    pub next_cursor: Option<u32>,
    /// Number of matching items before slicing
    pub total: u32,
    /// `false` when `total` is the upstream's unfiltered count used as an
    /// upper bound for a filtered listing
    pub total_exact: bool,
}

impl Page {
    /// The renderable empty page returned when a whole request fails
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            next_cursor: None,
            total: 0,
            total_exact: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A generation entry from the generation index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub name: String,
    pub url: String,
}

/// Identifier accepted by the upstream item endpoints: numeric id or name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Id(u32),
    Name(String),
}

impl ItemRef {
    /// Parse user input: digits become an id, anything else a lowercase name
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(input.to_lowercase()),
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<u32> for ItemRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ItemRef {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for ItemRef {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 6,
            name: "charizard".into(),
            image: "https://img.example/6.png".into(),
            types: vec![
                ItemType { slot: 1, type_name: "fire".into() },
                ItemType { slot: 2, type_name: "flying".into() },
            ],
            stats: vec![
                ItemStat { stat_name: "hp".into(), base_value: 78 },
                ItemStat { stat_name: "attack".into(), base_value: 84 },
            ],
            generation: "generation-i".into(),
            color: "red".into(),
            color_code: "#FF0000".into(),
            weight: 905,
            height: 17,
            evolutions: Vec::new(),
        }
    }

    #[test]
    fn test_default_filters_are_inactive() {
        let filters = Filters::default();
        assert_eq!(filters.item_type, "all");
        assert_eq!(filters.generation, "all");
        assert!(!filters.is_active());
        assert!(filters.matches(&sample_item()));
    }

    #[test]
    fn test_filters_type_and_generation() {
        let item = sample_item();
        assert!(Filters::default().with_type("flying").matches(&item));
        assert!(!Filters::default().with_type("water").matches(&item));
        assert!(Filters::default().with_generation("generation-i").matches(&item));
        assert!(!Filters::default()
            .with_type("fire")
            .with_generation("generation-ii")
            .matches(&item));
    }

    #[test]
    fn test_search_term_normalization() {
        assert_eq!(Filters::default().with_search("  ChAr ").search_term(), Some("char".into()));
        assert_eq!(Filters::default().with_search("   ").search_term(), None);
        assert!(Filters::default().with_search("pika").is_active());
        assert!(!Filters::default().with_search("pika").has_attribute_filter());
    }

    #[test]
    fn test_filters_deserialize_partial() {
        let filters: Filters = serde_json::from_str(r#"{"type": "grass"}"#).unwrap();
        assert_eq!(filters.item_type, "grass");
        assert_eq!(filters.generation, "all");
        assert_eq!(filters.search, "");
    }

    #[test]
    fn test_item_display_units() {
        let item = sample_item();
        assert!((item.weight_kg() - 90.5).abs() < f32::EPSILON);
        assert!((item.height_m() - 1.7).abs() < f32::EPSILON);
        assert_eq!(item.stat("attack"), Some(84));
        assert_eq!(item.stat("speed"), None);
        assert_eq!(item.base_stat_total(), 162);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page {
            data: vec![sample_item()],
            next_cursor: Some(1),
            total: 1302,
            total_exact: true,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"nextCursor\":1"));
        assert!(json.contains("\"colorCode\":\"#FF0000\""));
        assert!(json.contains("\"typeName\":\"fire\""));

        let empty = serde_json::to_value(Page::empty()).unwrap();
        assert_eq!(empty["nextCursor"], serde_json::Value::Null);
        assert_eq!(empty["total"], 0);
    }

    #[test]
    fn test_item_ref_parse() {
        assert_eq!(ItemRef::parse("25"), ItemRef::Id(25));
        assert_eq!(ItemRef::parse(" Pikachu "), ItemRef::Name("pikachu".into()));
        assert_eq!(ItemRef::from(4).to_string(), "4");
        assert_eq!(ItemRef::from("mr-mime").to_string(), "mr-mime");
    }
}
