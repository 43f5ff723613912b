//! Query text normalization.
//!
//! Normalization runs once over the whole raw query before tokenization:
//!
//! 1. escape characters (`\`) are removed, so `real\-time` becomes `real-time`;
//! 2. the text is decomposed (NFD) and non-spacing marks are dropped, so `ö`
//!    becomes `o`. Spacing marks such as Devanagari vowel signs are kept;
//! 3. whitespace runs collapse to a single space and the ends are trimmed.
//!
//! Every phrase produced downstream, both for dictionary lookups and for the
//! rewritten query, is therefore diacritic-free. Synonym dictionaries apply the
//! same function to their entries so that lookups agree.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

const ESCAPE_CHAR: char = '\\';

/// Normalize raw query text.
///
/// Never fails; empty input yields empty output and
/// `normalize(&normalize(x)) == normalize(x)` holds for any `x`.
///
/// ```
/// use synoptic::analysis::normalize;
///
/// assert_eq!(normalize("  Förskola \t real\\-time "), "Forskola real-time");
/// ```
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|&c| c != ESCAPE_CHAR)
        .nfd()
        .filter(|&c| c.general_category() != GeneralCategory::NonspacingMark)
        .collect();

    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}
