#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Free-text US postal address normalization.
//!
//! Users type addresses in every shape imaginable:
//! - Missing commas: `"123 Main Street Springfield IL 62704"`
//! - Shouting: `"123 MAIN STREET, springfield, il 62704"`
//! - Irregular spacing: `"123  Main St ,Springfield,  IL 62704"`
//!
//! [`normalize`] rewrites them into `"123 Main St, Springfield, IL 62704"`
//! through a fixed sequence of stages:
//!
//! 1. Collapse whitespace
//! 2. Abbreviate the street suffix ([`suffix`])
//! 3. Split street/city around the trailing state and ZIP ([`segment`])
//! 4. Title-case words, keeping state codes and ZIPs ([`casing`])
//! 5. Tidy comma spacing
//!
//! Every stage is total, so [`normalize`] never fails. Lookup tables and
//! regexes are built once and shared, so it can be called from any number
//! of threads.

pub mod casing;
pub mod segment;
pub mod suffix;

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub use segment::{Segmentation, StateZipAnchor};

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));

/// Result of normalizing an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAddress {
    /// The canonical form of the address.
    pub normalized: String,
    /// Whether `normalized` differs from the raw input in any way,
    /// including whitespace and casing.
    pub changed: bool,
}

/// Errors from address verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The address was empty or only whitespace.
    #[error("Address is required")]
    Empty,
}

/// Normalizes a raw address string.
///
/// Input without a detectable trailing state and ZIP is still
/// whitespace-, suffix- and case-normalized, just not segmented.
#[must_use]
pub fn normalize(raw: &str) -> NormalizedAddress {
    let collapsed = collapse_whitespace(raw);
    let abbreviated = suffix::abbreviate(&collapsed);

    let segmentation = segment::segment(&abbreviated);
    log::trace!("normalize: {raw:?} segmented as {segmentation:?}");

    let cased = casing::title_case(&segmentation.render());
    let normalized = tidy_commas(&cased);
    let changed = normalized != raw;

    NormalizedAddress {
        normalized,
        changed,
    }
}

/// Validates and normalizes a raw address.
///
/// # Errors
///
/// * [`AddressError::Empty`] - if `raw` is empty or only whitespace
pub fn verify(raw: &str) -> Result<NormalizedAddress, AddressError> {
    if raw.trim().is_empty() {
        return Err(AddressError::Empty);
    }

    Ok(normalize(raw))
}

fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RE.replace_all(input, " ").trim().to_string()
}

fn tidy_commas(input: &str) -> String {
    COMMA_RE.replace_all(input, ", ").trim().to_string()
}
