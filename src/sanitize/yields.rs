use regex::Regex;
use std::sync::LazyLock;

static YIELD_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:serves|yields?):?\s?").expect("valid yield regex"));

/// Strip a leading "Serves"/"Yield(s)" label and lowercase the rest.
pub fn recipe_yield(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;

    Some(YIELD_PREFIX_RE.replace(raw.trim(), "").to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(recipe_yield(Some("Serves: 4-6")), Some("4-6".to_string()));
        assert_eq!(recipe_yield(Some("YIELDS 2 Dozen")), Some("2 dozen".to_string()));
        assert_eq!(recipe_yield(Some("yield: 12 muffins")), Some("12 muffins".to_string()));
        assert_eq!(recipe_yield(Some("  serves 4  ")), Some("4".to_string()));
        assert_eq!(recipe_yield(Some("Serves4")), Some("4".to_string()));
    }

    #[test]
    fn test_prefix_only_at_start() {
        assert_eq!(
            recipe_yield(Some("Makes 4, serves 2")),
            Some("makes 4, serves 2".to_string())
        );
        assert_eq!(recipe_yield(Some("24 cookies")), Some("24 cookies".to_string()));
    }

    #[test]
    fn test_only_one_space_after_prefix_is_removed() {
        assert_eq!(recipe_yield(Some("Serves:  4")), Some(" 4".to_string()));
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(recipe_yield(None), None);
        assert_eq!(recipe_yield(Some("")), None);
        assert_eq!(recipe_yield(Some("   ")), Some(String::new()));
        assert_eq!(recipe_yield(Some("Serves")), Some(String::new()));
    }
}
