use crate::error::SanitizeError;
use crate::sanitize::{self, ImageRef, Ingredient};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recipe fields as handed over by the extraction layer, untouched.
///
/// Every field keeps its raw JSON shape; the normalizers decide what to make
/// of it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecipe {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub image: Value,
    #[serde(default)]
    pub author: Value,
    #[serde(rename = "recipeIngredient", default)]
    pub recipe_ingredient: Value,
    #[serde(rename = "recipeInstructions", default)]
    pub recipe_instructions: Value,
    #[serde(rename = "recipeYield", default)]
    pub recipe_yield: Value,
    #[serde(rename = "prepTime", default)]
    pub prep_time: Value,
    #[serde(rename = "cookTime", default)]
    pub cook_time: Value,
    #[serde(rename = "totalTime", default)]
    pub total_time: Value,
    #[serde(default)]
    pub url: Value,
}

impl RawRecipe {
    /// Find the Recipe node of a JSON-LD document and take its fields.
    ///
    /// The node may be the root object, an entry of a root array, or an entry
    /// of an `@graph` array.
    pub fn from_json_ld(json_ld: &Value) -> Result<Self, SanitizeError> {
        let recipe_json = if is_recipe_type(json_ld) {
            debug!("RawRecipe: found Recipe type in root");
            Some(json_ld)
        } else if let Some(items) = json_ld.as_array() {
            debug!("RawRecipe: JSON-LD is an array of {} items", items.len());
            items.iter().find(|item| is_recipe_type(item))
        } else if let Some(graph) = json_ld.get("@graph").and_then(Value::as_array) {
            debug!("RawRecipe: searching @graph of {} items", graph.len());
            graph.iter().find(|item| is_recipe_type(item))
        } else {
            None
        };

        let recipe_json = recipe_json.ok_or(SanitizeError::NoRecipe)?;
        Ok(serde_json::from_value(recipe_json.clone())?)
    }

    /// Parse a JSON-LD document from text.
    pub fn from_json_ld_str(text: &str) -> Result<Self, SanitizeError> {
        let json_ld: Value = serde_json::from_str(text)?;
        Self::from_json_ld(&json_ld)
    }
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(type_str)) => type_str.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|type_str| type_str.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

/// A recipe with every field in its canonical shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(rename = "yield", skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Recipe {
    /// Run each field of `raw` through its normalizer.
    pub fn from_raw(raw: &RawRecipe) -> Self {
        Recipe {
            name: text_field(&raw.name),
            description: text_field(&raw.description),
            author: sanitize::author(&raw.author),
            image: sanitize::image(&raw.image),
            recipe_yield: sanitize::recipe_yield(yield_text(&raw.recipe_yield).as_deref()),
            prep_time: sanitize::time(raw.prep_time.as_str()),
            cook_time: sanitize::time(raw.cook_time.as_str()),
            total_time: sanitize::time(raw.total_time.as_str()),
            ingredients: ingredient_lines(&raw.recipe_ingredient)
                .iter()
                .map(|line| sanitize::common(line))
                .filter(|line| !line.is_empty())
                .map(|line| sanitize::ingredient(&line))
                .collect(),
            instructions: instruction_steps(&raw.recipe_instructions)
                .iter()
                .map(|step| sanitize::common(step))
                .filter(|step| !step.is_empty())
                .collect(),
            url: raw.url.as_str().filter(|url| !url.is_empty()).map(str::to_string),
        }
    }
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Recipe::from_raw(&raw)
    }
}

// Sometimes a string, sometimes {"text": "..."}
fn text_field(value: &Value) -> String {
    match value {
        Value::String(text) => sanitize::common(text),
        Value::Object(obj) => obj
            .get("text")
            .and_then(Value::as_str)
            .map(sanitize::common)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn yield_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let entries: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            // Prefer the descriptive entry (e.g. "15 cookies") over a bare number
            entries
                .iter()
                .find(|entry| entry.contains(char::is_alphabetic))
                .or_else(|| entries.first())
                .cloned()
        }
        _ => None,
    }
}

fn ingredient_lines(value: &Value) -> Vec<String> {
    match value {
        Value::String(line) => vec![line.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(line) => Some(line.clone()),
                Value::Object(obj) => {
                    let name = obj.get("name").and_then(Value::as_str)?.trim();
                    let amount = obj.get("amount").and_then(Value::as_str).unwrap_or("").trim();
                    if amount.is_empty() {
                        Some(name.to_string())
                    } else {
                        Some(format!("{amount} {name}"))
                    }
                }
                other => {
                    debug!("ingredient_lines: skipping {other}");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn instruction_steps(value: &Value) -> Vec<String> {
    let mut steps = Vec::new();
    collect_steps(value, &mut steps);
    steps
}

fn collect_steps(value: &Value, steps: &mut Vec<String>) {
    match value {
        Value::String(step) => steps.push(step.clone()),
        Value::Array(items) => {
            for item in items {
                collect_steps(item, steps);
            }
        }
        Value::Object(obj) => {
            if let Some(section) = obj.get("itemListElement") {
                collect_steps(section, steps);
            } else if let Some(text) = obj.get("text").and_then(Value::as_str) {
                // Prefer text over name
                steps.push(text.to_string());
            } else if let Some(name) = obj.get("name").and_then(Value::as_str) {
                steps.push(name.to_string());
            } else {
                debug!("instruction_steps: no text in {value}");
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_node_in_root() {
        let raw = RawRecipe::from_json_ld(&json!({
            "@context": "https://schema.org/",
            "@type": "Recipe",
            "name": "Soup"
        }))
        .unwrap();
        assert_eq!(raw.name, json!("Soup"));
    }

    #[test]
    fn test_recipe_node_in_array_and_graph() {
        let raw = RawRecipe::from_json_ld(&json!([
            {"@type": "WebSite", "name": "Site"},
            {"@type": "recipe", "name": "Pasta"}
        ]))
        .unwrap();
        assert_eq!(raw.name, json!("Pasta"));

        let raw = RawRecipe::from_json_ld(&json!({
            "@graph": [
                {"@type": "Organization", "name": "Org"},
                {"@type": ["Recipe", "NewsArticle"], "name": "Stew"}
            ]
        }))
        .unwrap();
        assert_eq!(raw.name, json!("Stew"));
    }

    #[test]
    fn test_no_recipe_node() {
        let result = RawRecipe::from_json_ld(&json!({"@type": "WebSite"}));
        assert!(matches!(result, Err(SanitizeError::NoRecipe)));

        let result = RawRecipe::from_json_ld_str("{not json");
        assert!(matches!(result, Err(SanitizeError::JsonError(_))));
    }

    #[test]
    fn test_yield_shapes() {
        assert_eq!(yield_text(&json!("Serves 4")), Some("Serves 4".to_string()));
        assert_eq!(yield_text(&json!(4)), Some("4".to_string()));
        assert_eq!(
            yield_text(&json!(["15", "15 Stück"])),
            Some("15 Stück".to_string())
        );
        assert_eq!(yield_text(&json!([6, "6"])), Some("6".to_string()));
        assert_eq!(yield_text(&json!([])), None);
        assert_eq!(yield_text(&Value::Null), None);
    }

    #[test]
    fn test_ingredient_line_shapes() {
        assert_eq!(ingredient_lines(&json!("1 egg")), vec!["1 egg"]);
        assert_eq!(
            ingredient_lines(&json!([
                "2 cups flour",
                {"name": "sugar", "amount": "1 cup"},
                {"name": "salt"},
                {"amount": "3"},
                7
            ])),
            vec!["2 cups flour", "1 cup sugar", "salt"]
        );
    }

    #[test]
    fn test_instruction_shapes() {
        assert_eq!(instruction_steps(&json!("Cook it.")), vec!["Cook it."]);
        assert_eq!(
            instruction_steps(&json!([
                {"@type": "HowToStep", "text": "Boil water"},
                {"@type": "HowToStep", "name": "Add pasta"},
                {
                    "@type": "HowToSection",
                    "name": "Sauce",
                    "itemListElement": [
                        {"@type": "HowToStep", "text": "Fry garlic"},
                        {"@type": "HowToStep", "text": "Add tomatoes"}
                    ]
                },
                [{"@type": "HowToStep", "text": "Serve"}]
            ])),
            vec!["Boil water", "Add pasta", "Fry garlic", "Add tomatoes", "Serve"]
        );
    }

    #[test]
    fn test_text_field_shapes() {
        assert_eq!(text_field(&json!("Tasty &amp; quick")), "Tasty & quick");
        assert_eq!(text_field(&json!({"text": " Nice "})), "Nice");
        assert_eq!(text_field(&json!(3)), "");
    }
}
