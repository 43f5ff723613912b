//! Phrase tokenizer for normalized query text.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::phrase::Phrase;

/// Maximum number of phrases taken from a query; the rest are dropped.
///
/// Bounds phrase variation generation to at most `50 * 51 / 2` candidates.
pub const MAX_PHRASES: usize = 50;

/// A bare word, or a double-quoted phrase of words, spaces and apostrophes.
/// Alternatives are tried left to right at every position.
const PHRASE_PATTERN: &str = r#"[\w-]+|"[\w\s'’‘`´-]+""#;

static DEFAULT_TOKENIZER: LazyLock<PhraseTokenizer> = LazyLock::new(PhraseTokenizer::new);

/// Splits normalized text into an ordered sequence of phrases.
///
/// Bare terms are made of letters, digits, underscores and hyphens. Quoted
/// phrases keep their quotes and are never split further.
#[derive(Clone, Debug)]
pub struct PhraseTokenizer {
    pattern: Arc<Regex>,
}

impl PhraseTokenizer {
    pub fn new() -> Self {
        PhraseTokenizer {
            pattern: Arc::new(Regex::new(PHRASE_PATTERN).expect("phrase regex")),
        }
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokenize `text` into at most [`MAX_PHRASES`] phrases, in query order.
    ///
    /// An empty result means no expansion is possible; it is not an error.
    pub fn tokenize(&self, text: &str) -> Vec<Phrase> {
        self.pattern
            .find_iter(text)
            .map(|mat| mat.as_str().trim())
            .filter(|phrase| !phrase.is_empty())
            .take(MAX_PHRASES)
            .enumerate()
            .map(|(position, phrase)| Phrase::new(phrase, position))
            .collect()
    }
}

impl Default for PhraseTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize normalized text with the default [`PhraseTokenizer`].
pub fn tokenize(normalized: &str) -> Vec<Phrase> {
    DEFAULT_TOKENIZER.tokenize(normalized)
}
