//! Street suffix table and the suffix abbreviation stage.
//!
//! Long-form and abbreviated spellings ("Street", "St.", "ST") all map to
//! a single canonical abbreviation ("St"). Canonical forms map to
//! themselves, so re-applying the table is a no-op.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Maps lowercase suffix spellings to their canonical abbreviation.
static STREET_SUFFIXES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("street", "St"),
        ("st", "St"),
        ("avenue", "Ave"),
        ("ave", "Ave"),
        ("road", "Rd"),
        ("rd", "Rd"),
        ("boulevard", "Blvd"),
        ("blvd", "Blvd"),
        ("trail", "Trl"),
        ("trl", "Trl"),
        ("drive", "Dr"),
        ("dr", "Dr"),
        ("lane", "Ln"),
        ("ln", "Ln"),
        ("court", "Ct"),
        ("ct", "Ct"),
        ("way", "Way"),
        ("place", "Pl"),
        ("pl", "Pl"),
        ("parkway", "Pkwy"),
        ("pkwy", "Pkwy"),
        ("circle", "Cir"),
        ("cir", "Cir"),
    ])
});

/// Canonical abbreviations recognized when splitting street from city.
pub const ABBREVIATIONS: &[&str] = &[
    "St", "Ave", "Rd", "Blvd", "Trl", "Dr", "Ln", "Ct", "Way", "Pl", "Pkwy", "Cir",
];

/// Last word of a street segment, with an optional trailing period.
static TRAILING_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z]+)\.?$").expect("valid regex"));

fn strip_period(word: &str) -> &str {
    word.strip_suffix('.').unwrap_or(word)
}

/// Looks up the canonical abbreviation for any known suffix spelling.
///
/// Matching is case-insensitive and ignores one trailing period, so
/// `"STREET"`, `"St."` and `"st"` all resolve to `"St"`.
#[must_use]
pub fn canonical(word: &str) -> Option<&'static str> {
    let key = strip_period(word).to_ascii_lowercase();
    STREET_SUFFIXES.get(key.as_str()).copied()
}

/// Like [`canonical`], but only accepts words that are already one of the
/// [`ABBREVIATIONS`] (in any casing). Long forms such as `"Court"` are
/// rejected so that a street name is not mistaken for a suffix.
#[must_use]
pub fn canonical_abbreviation(word: &str) -> Option<&'static str> {
    let word = strip_period(word);
    ABBREVIATIONS
        .iter()
        .find(|abbr| abbr.eq_ignore_ascii_case(word))
        .copied()
}

/// Returns `true` for a word that looks like a state code as typed:
/// exactly two upper-case ASCII letters.
#[must_use]
pub fn is_state_candidate(word: &str) -> bool {
    word.len() == 2 && word.bytes().all(|b| b.is_ascii_uppercase())
}

/// Canonicalizes the street suffix of a whitespace-normalized address.
///
/// Inputs that already contain a comma have their first segment treated
/// as the street; otherwise a positional guess is made on the free-form
/// word list (see [`abbreviate_free_form`]).
#[must_use]
pub fn abbreviate(input: &str) -> String {
    if input.contains(',') {
        abbreviate_street_segment(input)
    } else {
        abbreviate_free_form(input)
    }
}

/// Replaces a suffix word at the very end of `street`, if there is one.
#[must_use]
pub fn abbreviate_trailing(street: &str) -> String {
    let Some(caps) = TRAILING_WORD_RE.captures(street) else {
        return street.to_string();
    };

    match (caps.get(0), caps.get(1).and_then(|w| canonical(w.as_str()))) {
        (Some(whole), Some(abbr)) => format!("{}{abbr}", &street[..whole.start()]),
        _ => street.to_string(),
    }
}

/// Replaces a suffix word at the very end of the first comma segment.
fn abbreviate_street_segment(input: &str) -> String {
    let mut segments = input.split(',');
    let street = abbreviate_trailing(segments.next().unwrap_or_default().trim());

    let rest: Vec<&str> = segments.map(str::trim).collect();

    format!("{street}, {}", rest.join(", "))
}

/// Free-form input has no separators, so the suffix is assumed to sit two
/// words before the first state-like token: `... <Suffix> <City> <ST> <ZIP>`.
///
/// Nothing is replaced unless at least three words precede that token.
#[must_use]
pub fn abbreviate_free_form(input: &str) -> String {
    let mut words: Vec<&str> = input.split_whitespace().collect();

    let street_end = words
        .iter()
        .position(|w| is_state_candidate(w))
        .unwrap_or(words.len());

    if street_end >= 3 {
        let idx = street_end - 2;
        if let Some(abbr) = canonical(words[idx]) {
            words[idx] = abbr;
        }
    }

    words.join(" ")
}
