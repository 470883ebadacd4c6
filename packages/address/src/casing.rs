//! Word casing.
//!
//! Every word is title-cased except two-letter upper-case state codes and
//! ZIP tokens. Interior capitals are not preserved: `McDonald` becomes
//! `Mcdonald`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::suffix::is_state_candidate;

/// A ZIP+4 token, or any run of word characters.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{5}-[0-9]{4}|\w+").expect("valid regex"));

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").expect("valid regex"));

/// Title-cases a single word unless it is a state code or ZIP.
#[must_use]
pub fn case_word(word: &str) -> String {
    if is_state_candidate(word) || ZIP_RE.is_match(word) {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Applies [`case_word`] to every word in `input`, leaving separators
/// untouched.
#[must_use]
pub fn title_case(input: &str) -> String {
    WORD_RE
        .replace_all(input, |caps: &Captures<'_>| case_word(&caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("123 MAIN st, springfield"), "123 Main St, Springfield");
    }

    #[test]
    fn keeps_state_and_zip() {
        assert_eq!(title_case("Austin, TX 78701-4321"), "Austin, TX 78701-4321");
    }

    #[test]
    fn non_ascii_digits_are_not_a_zip() {
        assert!(!ZIP_RE.is_match("\u{0666}\u{0666}\u{0660}\u{0660}\u{0662}"));
    }

    #[test]
    fn kelvin_sign_is_not_a_state_code() {
        assert_eq!(case_word("\u{212A}S"), "Ks");
    }

    #[test]
    fn lower_case_state_is_title_cased() {
        assert_eq!(case_word("tx"), "Tx");
    }

    #[test]
    fn collapses_interior_capitals() {
        assert_eq!(case_word("McDonald"), "Mcdonald");
    }

    #[test]
    fn apostrophe_splits_words() {
        assert_eq!(title_case("o'brien"), "O'Brien");
    }

    #[test]
    fn ordinals_keep_digits_first() {
        assert_eq!(title_case("1ST AVE"), "1st Ave");
    }
}
