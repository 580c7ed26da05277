use crate::fractions;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Units recognized right after the quantity, tried in order.
const UNITS: [&str; 21] = [
    "ounce(?:s)?",
    "oz",
    "pound(?:s)?",
    "lb(?:s)?",
    "(?:kilo)?gram(?:s)?",
    r"g\b",
    "kg",
    "teaspoon(?:s)?",
    "tablespoon(?:s)?",
    "cup(?:s)?",
    "tsp",
    "tbsp",
    r"c\.",
    "small",
    "medium",
    "large",
    "stick(?:s)?",
    "clove(?:s)?",
    "bunch(?:es)?",
    "can(?:s)?",
    "stalk(?:s)?",
];

// Try to match things like "1 tablespoon sugar". The remainder stops at any
// line terminator, so a line holding one is left whole.
static RECIPE_QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let glyphs: String = fractions::glyphs().collect();
    let pattern = format!(
        r"(?i)^((?:[0-9]+\s?)?[0-9{glyphs}/{slash}-]+)\s*({units})?\.?\s*([^\r\n\x{{2028}}\x{{2029}}]*)$",
        slash = fractions::FRACTION_SLASH,
        units = UNITS.join("|"),
    );
    Regex::new(&pattern).expect("valid quantity regex")
});

/// One ingredient line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub ingredient: String,
}

impl Ingredient {
    /// An ingredient with no detected quantity or unit.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            quantity: None,
            unit: None,
            ingredient: text.into(),
        }
    }
}

/// Best-effort split of a line like `"1 1/2 cups flour"`.
///
/// Lines that do not start with a quantity come back whole in `ingredient`.
/// Units are matched lexically, so `"1 cupcake"` reads as one `cup` of `cake`.
pub fn ingredient(raw: &str) -> Ingredient {
    let Some(captures) = RECIPE_QUANTITY_RE.captures(raw) else {
        debug!("ingredient: no quantity in {raw:?}");
        return Ingredient::plain(raw);
    };

    let non_empty = |index: usize| {
        captures
            .get(index)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Ingredient {
        quantity: non_empty(1),
        unit: non_empty(2),
        ingredient: captures
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    }
}
