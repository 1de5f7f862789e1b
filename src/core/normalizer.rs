/// Search normalization
///
/// Folds case, diacritics, and whitespace so that substring checks on the
/// folded keys line up with what people expect when typing into a search box.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// Any run of whitespace, including non-breaking and ideographic spaces
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Map raw text to its comparison key.
///
/// NFKD-decomposes, drops combining marks ("é" becomes "e", "ﬁ" becomes
/// "fi"), lower-cases, collapses whitespace runs to a single space and trims.
/// Never fails; empty input gives an empty key.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    WHITESPACE_RUN.replace_all(folded.trim(), " ").into_owned()
}

/// Whether `needle` (already normalized) occurs in the normalized `haystack`
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(needle)
}

// ASCII punctuation and symbols in root collation order. Anything not listed
// here that isn't a letter, digit or space sorts right after this run.
const ASCII_SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

// Character classes in collation order
const CLASS_SPACE: u8 = 0;
const CLASS_ASCII_SYMBOL: u8 = 1;
const CLASS_OTHER_SYMBOL: u8 = 2;
const CLASS_DIGIT: u8 = 3;
const CLASS_LETTER: u8 = 4;

fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (CLASS_SPACE, 0)
    } else if let Some(pos) = ASCII_SYMBOL_ORDER.find(c) {
        (CLASS_ASCII_SYMBOL, pos as u32)
    } else if c.is_numeric() {
        (CLASS_DIGIT, c as u32)
    } else if c.is_alphabetic() {
        (CLASS_LETTER, c as u32)
    } else {
        (CLASS_OTHER_SYMBOL, c as u32)
    }
}

/// Locale-style name ordering.
///
/// Three levels, like a collator:
/// 1. base characters of the folded key, with spaces before punctuation,
///    punctuation before symbols, symbols before digits, digits before letters
/// 2. accents ("cafe" before "café")
/// 3. case, lowercase first ("ban" before "Ban")
///
/// Raw strings break any remaining tie so the order stays total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| normalize(s).chars().map(primary_weight).collect::<Vec<_>>();
    let accents = |s: &str| s.to_lowercase().nfd().collect::<String>();
    let case = |s: &str| s.chars().map(|c| c.is_uppercase()).collect::<Vec<_>>();

    primary(a)
        .cmp(&primary(b))
        .then_with(|| accents(a).cmp(&accents(b)))
        .then_with(|| case(a).cmp(&case(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("LayPeople"), "laypeople");
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("Café Crème"), "cafe creme");
        assert_eq!(normalize("Ångström"), "angstrom");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  slow \t\n  mode  "), "slow mode");
        assert_eq!(normalize("a\u{00A0}b"), "a b");
    }

    #[test]
    fn test_compatibility_forms() {
        assert_eq!(normalize("ﬁnd"), "find");
        assert_eq!(normalize("ＡＢＣ"), "abc");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  Ünïcödé   Text ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_contains_normalized() {
        assert!(contains_normalized("Résumé builder", "resume"));
        assert!(!contains_normalized("Help", "ban"));
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Éclair", "donut"), Ordering::Greater);
        assert_eq!(locale_cmp("Éclair", "fudge"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
        assert_ne!(locale_cmp("ban", "Ban"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_symbols_digits_and_case() {
        let mut names = vec!["Ban", "ban", "_x", "8ball", "~z", "a b", "ab"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["_x", "~z", "8ball", "a b", "ab", "ban", "Ban"]);
    }

    #[test]
    fn test_locale_cmp_accent_before_case() {
        assert_eq!(locale_cmp("cafe", "café"), Ordering::Less);
        assert_eq!(locale_cmp("café", "Cafe"), Ordering::Greater);
        assert_eq!(locale_cmp("ban", "Ban"), Ordering::Less);
    }
}
