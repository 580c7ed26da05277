use crate::fractions;
use log::debug;
use regex::{Captures, Regex};
use scraper::Html;
use std::sync::LazyLock;

// Closing tags that show markup leaked into a text field
static CLOSING_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</(?:a|p|ol|li|ul|div|span|b|i|em)>").expect("valid closing tag regex")
});

static ASCII_FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)/([0-9]+)").expect("valid fraction regex"));

static TEMPERATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+) degree(?:s)? ([CF])").expect("valid temperature regex")
});

// Junk that appears on some sites
const SAVE_JUNK: &str = "Save $";

/// Markup handling needed by text cleanup.
pub trait MarkupText {
    /// Decode named and numeric character references.
    fn decode_entities(&self, text: &str) -> String;

    /// Parse `text` as markup and return only its visible text.
    fn strip_tags(&self, text: &str) -> String;
}

/// [`MarkupText`] backed by `scraper`.
///
/// References are decoded by the HTML5 tokenizer, so legacy forms
/// (`&amp` or `&#39` without `;`) and the Windows-1252 remap of
/// `&#x80;`..`&#x9F;` decode the way browsers do.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlText;

impl MarkupText for HtmlText {
    fn decode_entities(&self, text: &str) -> String {
        if !text.contains('&') {
            return text.to_string();
        }

        // Escape what the parser would otherwise read as markup or rewrite
        let escaped = text.replace('<', "&lt;").replace('\r', "&#13;");
        Html::parse_fragment(&escaped).root_element().text().collect()
    }

    fn strip_tags(&self, text: &str) -> String {
        let fragment = Html::parse_fragment(text);
        fragment.root_element().text().collect()
    }
}

/// Clean a free-text field (name, description, instruction step, ...).
pub fn common(raw: &str) -> String {
    common_with(&HtmlText, raw)
}

/// [`common`] with an explicit markup implementation.
pub fn common_with<M: MarkupText + ?Sized>(markup: &M, raw: &str) -> String {
    let mut text = markup.decode_entities(raw);

    if CLOSING_TAG_RE.is_match(&text) {
        debug!("common: stripping markup from {text:?}");
        text = markup.strip_tags(&text);
    }

    // Prefer the single glyph, otherwise keep the fraction with U+2044
    let text = ASCII_FRACTION_RE.replace_all(&text, |caps: &Captures| {
        match fractions::glyph(&caps[0]) {
            Some(glyph) => glyph.to_string(),
            None => format!("{}{}{}", &caps[1], fractions::FRACTION_SLASH, &caps[2]),
        }
    });

    let text = TEMPERATURE_RE.replace_all(&text, "${1}° ${2}");

    text.replacen(SAVE_JUNK, "", 1).trim().to_string()
}
