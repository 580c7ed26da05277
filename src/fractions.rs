/// Unicode FRACTION SLASH (U+2044), used for fractions without a dedicated glyph.
pub const FRACTION_SLASH: char = '\u{2044}';

/// ASCII fractions that have a single vulgar fraction glyph.
// Missing some fractions still (5/6, 3/8, ...), none of them show up in practice
pub const FRACTIONS: [(&str, char); 7] = [
    ("1/2", '½'),
    ("1/3", '⅓'),
    ("2/3", '⅔'),
    ("1/4", '¼'),
    ("3/4", '¾'),
    ("1/8", '⅛'),
    ("1/10", '⅒'),
];

/// Look up the vulgar fraction glyph for an exact ASCII fraction like `"1/2"`.
pub fn glyph(ascii: &str) -> Option<char> {
    FRACTIONS
        .iter()
        .find(|(fraction, _)| *fraction == ascii)
        .map(|(_, glyph)| *glyph)
}

/// All glyphs of the table, in table order.
pub fn glyphs() -> impl Iterator<Item = char> {
    FRACTIONS.iter().map(|(_, glyph)| *glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph("1/2"), Some('½'));
        assert_eq!(glyph("3/4"), Some('¾'));
        assert_eq!(glyph("1/10"), Some('⅒'));
        assert_eq!(glyph("5/6"), None);
        assert_eq!(glyph("01/2"), None);
        assert_eq!(glyph(""), None);
    }

    #[test]
    fn test_glyphs_in_table_order() {
        let all: String = glyphs().collect();
        assert_eq!(all, "½⅓⅔¼¾⅛⅒");
    }
}
