use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Anything that is not a lowercase ascii letter, digit, apostrophe or whitespace
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9'\s]").unwrap());

/// Lowercase, fold accents away and drop punctuation.
///
/// Text goes through NFKD so accented letters decompose into a base letter plus
/// combining marks; every non-ascii char is then dropped, which removes the marks
/// along with anything that has no ascii decomposition. Finally every char outside
/// `[a-z0-9'\s]` is removed. Whitespace is left as-is.
pub fn basic_clean(text: &str) -> String {
    let text = text.to_lowercase();
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();

    DISALLOWED.replace_all(&ascii, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(basic_clean("Hello, World!"), "hello world");
    }

    #[test]
    fn folds_accents() {
        assert_eq!(basic_clean("Café Déjà Vu"), "cafe deja vu");
    }

    #[test]
    fn keeps_apostrophes_digits_and_whitespace() {
        assert_eq!(basic_clean("It's 2024\tnow"), "it's 2024\tnow");
    }

    #[test]
    fn drops_chars_without_ascii_form() {
        assert_eq!(basic_clean("日本 data"), " data");
    }

    #[test]
    fn empty_input() {
        assert_eq!(basic_clean(""), "");
    }
}
