//! Display formatting for generations and base stats

use serde::Serialize;

/// Rating bucket for a single base stat, used to pick a bar color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StatTier {
    Poor,
    Low,
    Average,
    Good,
    Great,
    Exceptional,
}

impl StatTier {
    pub fn of(value: u32) -> Self {
        match value {
            v if v > 100 => Self::Exceptional,
            v if v >= 90 => Self::Great,
            v if v >= 75 => Self::Good,
            v if v >= 50 => Self::Average,
            v if v >= 25 => Self::Low,
            _ => Self::Poor,
        }
    }

    /// Color name used for this tier
    pub fn color(self) -> &'static str {
        match self {
            Self::Exceptional => "blue",
            Self::Great => "green",
            Self::Good => "yellow",
            Self::Average => "orange",
            Self::Low => "light-red",
            Self::Poor => "red",
        }
    }
}

fn roman(number: &str) -> Option<&'static str> {
    Some(match number {
        "1" => "I",
        "2" => "II",
        "3" => "III",
        "4" => "IV",
        "5" => "V",
        "6" => "VI",
        "7" => "VII",
        "8" => "VIII",
        "9" => "IX",
        _ => return None,
    })
}

/// `generation-iv` -> `Generation IV`. Numeric suffixes are converted to
/// roman numerals, anything else is upper-cased as-is.
pub fn format_generation_name(generation: &str) -> String {
    let suffix = generation.strip_prefix("generation-").unwrap_or(generation);
    let numeral = roman(suffix)
        .map(str::to_string)
        .unwrap_or_else(|| suffix.to_uppercase());
    format!("Generation {}", numeral)
}

/// Short label for filter controls: `generation-iv` -> `IV`
pub fn generation_short_label(generation: &str) -> String {
    generation
        .strip_prefix("generation-")
        .unwrap_or(generation)
        .to_uppercase()
}
