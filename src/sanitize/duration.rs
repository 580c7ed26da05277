use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// PnYnMnDTnHnMnS, numbers allow up to three decimals.
// Grammar adapted from https://github.com/tolu/ISO8601-duration (MIT)
const NUMBER: &str = r"[0-9]+(?:[.,][0-9]{0,3})?";

static ISO8601_DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let week = format!("(?:{NUMBER}W)");
    let date = format!("(?:{NUMBER}Y)?(?:{NUMBER}M)?(?:{NUMBER}D)?");
    let time = format!("T(?:({NUMBER})H)?(?:({NUMBER})M)?(?:{NUMBER}S)?");
    Regex::new(&format!("^P(?:{week}|{date}(?:{time})?)$")).expect("valid duration regex")
});

/// Turn an ISO-8601 duration into `"1 hr 30 min"`.
///
/// Only hours and minutes are reported. Days, weeks and seconds are accepted by
/// the grammar but dropped, so `"P1D"` yields `None`. A component spelled
/// exactly `"0"` is skipped.
pub fn time(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;

    let Some(captures) = ISO8601_DURATION_RE.captures(raw.trim()) else {
        debug!("time: {raw:?} is not an ISO-8601 duration");
        return None;
    };

    let mut parts = Vec::new();

    if let Some(hours) = captures.get(1).map(|m| m.as_str()).filter(|h| *h != "0") {
        parts.push(format!("{hours} hr"));
    }

    if let Some(minutes) = captures.get(2).map(|m| m.as_str()).filter(|m| *m != "0") {
        parts.push(format!("{minutes} min"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(time(Some("PT1H30M")), Some("1 hr 30 min".to_string()));
        assert_eq!(time(Some("PT45M")), Some("45 min".to_string()));
        assert_eq!(time(Some("PT2H")), Some("2 hr".to_string()));
        assert_eq!(time(Some("  PT20M \n")), Some("20 min".to_string()));
    }

    #[test]
    fn test_zero_components_are_dropped() {
        assert_eq!(time(Some("PT0H0M")), None);
        assert_eq!(time(Some("PT0H15M")), Some("15 min".to_string()));
        assert_eq!(time(Some("PT1H0M")), Some("1 hr".to_string()));
        // only the literal "0" counts as zero
        assert_eq!(time(Some("PT00M")), Some("00 min".to_string()));
    }

    #[test]
    fn test_date_parts_and_seconds_are_discarded() {
        assert_eq!(time(Some("P1DT2H5M")), Some("2 hr 5 min".to_string()));
        assert_eq!(time(Some("P1Y2M3DT4H")), Some("4 hr".to_string()));
        assert_eq!(time(Some("PT10M30S")), Some("10 min".to_string()));
        assert_eq!(time(Some("PT5400S")), None);
        assert_eq!(time(Some("P2W")), None);
        assert_eq!(time(Some("P3D")), None);
        assert_eq!(time(Some("P")), None);
    }

    #[test]
    fn test_decimal_components() {
        assert_eq!(time(Some("PT1.5H")), Some("1.5 hr".to_string()));
        assert_eq!(time(Some("PT2,25M")), Some("2,25 min".to_string()));
        assert_eq!(time(Some("PT1.2345H")), None);
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(time(None), None);
        assert_eq!(time(Some("")), None);
        assert_eq!(time(Some("garbage")), None);
        assert_eq!(time(Some("30 minutes")), None);
        assert_eq!(time(Some("PT15-20M")), None);
        assert_eq!(time(Some("pt1h")), None);
        assert_eq!(time(Some("P1W2D")), None);
    }

    #[test]
    fn test_long_input_is_rejected_quickly() {
        let hostile = format!("P{}", "1".repeat(100_000));
        assert_eq!(time(Some(&hostile)), None);
    }
}
