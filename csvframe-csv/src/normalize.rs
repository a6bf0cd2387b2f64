use std::borrow::Cow;

use deunicode::deunicode_with_tofu;

/// Normalise one raw CSV field before it is stored.
///
/// Non-ASCII characters are transliterated to their closest ASCII spelling
/// (`"Zoë"` → `"Zoe"`, `"Straße"` → `"Strasse"`); characters without one are
/// dropped. Literal double quotes are then removed. Pure-ASCII fields without
/// quotes are returned borrowed.
pub fn normalize_field(raw: &str) -> Cow<'_, str> {
    let ascii = if raw.is_ascii() {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(deunicode_with_tofu(raw, ""))
    };

    if !ascii.contains('"') {
        return ascii;
    }
    Cow::Owned(ascii.replace('"', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_without_quotes_is_borrowed() {
        assert!(matches!(normalize_field("plain text"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn accents_are_transliterated() {
        assert_eq!(normalize_field("Zoë Müller"), "Zoe Muller");
        assert_eq!(normalize_field("café"), "cafe");
    }

    #[test]
    fn quotes_are_stripped() {
        assert_eq!(normalize_field("say \"hi\""), "say hi");
        assert_eq!(normalize_field("\"\""), "");
    }

    #[test]
    fn typographic_quotes_are_stripped_after_transliteration() {
        assert_eq!(normalize_field("\u{201C}quoted\u{201D}"), "quoted");
    }
}
