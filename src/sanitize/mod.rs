//! Field normalizers for scraped recipe data.
//!
//! Every function here is pure and total: malformed input degrades to `None`,
//! a passthrough, or a best-effort split, never an error.

mod author;
mod common;
mod duration;
mod image;
mod ingredient;
mod yields;

use serde_json::Value;

pub use self::author::{author, AuthorRef};
pub use self::common::{common, common_with, HtmlText, MarkupText};
pub use self::duration::time;
pub use self::image::{image, ImageRef};
pub use self::ingredient::{ingredient, Ingredient};
pub use self::yields::recipe_yield;

/// Loose truthiness for shape checks: null, false, zero and "" count as empty.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
