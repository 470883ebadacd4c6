//! Street / city / state / ZIP segmentation anchored on a trailing
//! `<ST> <ZIP>` pair.
//!
//! Splitting street from city in a comma-less address is a positional
//! guess. Each guess is its own step with its own [`Segmentation`]
//! outcome.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::suffix;

/// Trailing `<2 ASCII letters> <5 digits>[-<4 digits>]`.
static STATE_ZIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z]{2})\s+([0-9]{5}(?:-[0-9]{4})?)\s*$").expect("valid regex")
});

/// A single token that runs a street into a city, e.g. `MainStSpringfield`.
static RUN_TOGETHER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*[a-z])([A-Z][a-z]+)$").expect("valid regex"));

/// Below this many words before the anchor, no city is inserted.
pub const MIN_SEGMENTABLE_WORDS: usize = 4;

/// The state code and ZIP detected at the end of an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateZipAnchor {
    /// Two-letter state code, upper-cased.
    pub state: String,
    /// Five-digit ZIP, optionally with a `-NNNN` extension.
    pub zip: String,
}

impl fmt::Display for StateZipAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.zip)
    }
}

impl StateZipAnchor {
    /// Finds the anchor at the end of `input`.
    ///
    /// Returns the anchor and the text before it, trimmed and without
    /// trailing commas.
    #[must_use]
    pub fn find(input: &str) -> Option<(Self, &str)> {
        let caps = STATE_ZIP_RE.captures(input)?;
        let whole = caps.get(0)?;
        let anchor = Self {
            state: caps.get(1)?.as_str().to_ascii_uppercase(),
            zip: caps.get(2)?.as_str().to_string(),
        };
        let before = input[..whole.start()]
            .trim()
            .trim_end_matches(',')
            .trim_end();

        Some((anchor, before))
    }
}

/// How an address was split around its state/ZIP anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmentation {
    /// Street and city were separated.
    Segmented {
        /// Street line, suffix included.
        street: String,
        /// City name.
        city: String,
        /// Trailing state and ZIP.
        anchor: StateZipAnchor,
    },
    /// The text before the anchor already carries its own commas.
    Presegmented {
        /// Everything before the anchor.
        prefix: String,
        /// Trailing state and ZIP.
        anchor: StateZipAnchor,
    },
    /// Too few words to tell street from city; no city is inserted.
    InsufficientWords {
        /// Everything before the anchor.
        prefix: String,
        /// Trailing state and ZIP.
        anchor: StateZipAnchor,
    },
    /// No trailing state/ZIP; the input is passed through.
    NoAnchorFound(String),
}

impl Segmentation {
    /// Renders the outcome as `<Street>, <City>, <ST> <ZIP>` or the
    /// closest shape the outcome allows.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Segmented {
                street,
                city,
                anchor,
            } => format!("{street}, {city}, {anchor}"),
            Self::Presegmented { prefix, anchor } | Self::InsufficientWords { prefix, anchor } => {
                if prefix.is_empty() {
                    anchor.to_string()
                } else {
                    format!("{prefix}, {anchor}")
                }
            }
            Self::NoAnchorFound(input) => input.clone(),
        }
    }
}

/// Segments `input` around its trailing state/ZIP anchor.
#[must_use]
pub fn segment(input: &str) -> Segmentation {
    let Some((anchor, before)) = StateZipAnchor::find(input) else {
        return Segmentation::NoAnchorFound(input.to_string());
    };

    if before.contains(',') {
        return Segmentation::Presegmented {
            prefix: before.to_string(),
            anchor,
        };
    }

    let words: Vec<&str> = before.split_whitespace().collect();
    if words.len() < MIN_SEGMENTABLE_WORDS {
        return Segmentation::InsufficientWords {
            prefix: suffix::abbreviate_trailing(before),
            anchor,
        };
    }

    let (street, city) = split_at_suffix(&words).unwrap_or_else(|| split_last_word(&words));

    Segmentation::Segmented {
        street,
        city,
        anchor,
    }
}

/// Splits after the first suffix abbreviation that is neither the first
/// nor the last word.
fn split_at_suffix(words: &[&str]) -> Option<(String, String)> {
    let last = words.len().checked_sub(1)?;

    (1..last).find_map(|i| {
        suffix::canonical_abbreviation(words[i]).map(|abbr| {
            let mut street = words[..i].to_vec();
            street.push(abbr);
            (street.join(" "), words[i + 1..].join(" "))
        })
    })
}

/// Uses the last word as the city, first splitting it at a lower-to-upper
/// case transition when the street ran into it without a space.
fn split_last_word(words: &[&str]) -> (String, String) {
    let Some((last, leading)) = words.split_last() else {
        return (String::new(), String::new());
    };
    let mut street = leading.to_vec();

    let city = match split_run_together(last) {
        Some((head, city)) => {
            street.push(head);
            city
        }
        None => *last,
    };

    (suffix::abbreviate_trailing(&street.join(" ")), city.to_string())
}

/// Splits `MainStSpringfield` into `("MainSt", "Springfield")`.
#[must_use]
pub fn split_run_together(word: &str) -> Option<(&str, &str)> {
    let caps = RUN_TOGETHER_RE.captures(word)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
