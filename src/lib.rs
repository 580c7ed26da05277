//! Normalize loosely-structured recipe metadata scraped from the web.
//!
//! The [`sanitize`] module holds one pure function per field shape:
//!
//! ```
//! use recipe_sanitize::sanitize;
//! use serde_json::json;
//!
//! assert_eq!(sanitize::time(Some("PT1H30M")).as_deref(), Some("1 hr 30 min"));
//! assert_eq!(sanitize::author(&json!({"name": "Jane"})).as_deref(), Some("Jane"));
//!
//! let line = sanitize::ingredient("2 large eggs");
//! assert_eq!(line.quantity.as_deref(), Some("2"));
//! assert_eq!(line.unit.as_deref(), Some("large"));
//! assert_eq!(line.ingredient, "eggs");
//! ```
//!
//! [`Recipe::from_raw`] applies all of them to a JSON-LD recipe node.

pub mod config;
pub mod error;
pub mod fractions;
pub mod model;
pub mod render;
pub mod sanitize;

pub use config::{load_config, OutputFormat, SanitizeConfig};
pub use error::SanitizeError;
pub use model::{RawRecipe, Recipe};
pub use sanitize::{AuthorRef, ImageRef, Ingredient};

use std::path::Path;

/// Sanitize the recipe found in a JSON-LD document.
pub fn sanitize_json_ld(text: &str) -> Result<Recipe, SanitizeError> {
    let raw = RawRecipe::from_json_ld_str(text)?;
    Ok(Recipe::from_raw(&raw))
}

/// Sanitize the recipe found in a JSON-LD file.
pub fn sanitize_json_ld_file(path: &Path) -> Result<Recipe, SanitizeError> {
    let text = std::fs::read_to_string(path)?;
    sanitize_json_ld(&text)
}
