//! Phrases extracted from a query.

use std::fmt;

use serde::{Deserialize, Serialize};

const QUOTE: char = '"';

/// Whether `text` is wrapped in double quotes.
///
/// Quoted text is treated atomically: it is never split and never AND-joined.
pub fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with(QUOTE) && text.ends_with(QUOTE)
}

/// One tokenized unit of a query: a bare term or a quoted multi-word phrase.
///
/// `position` is the index of the phrase in the tokenized query; equality of
/// phrase *text* is what the synonym lookup uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phrase {
    /// The phrase text, quotes retained for quoted phrases.
    pub text: String,
    /// Index of the phrase within the tokenized query (0-based).
    pub position: usize,
}

impl Phrase {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Phrase {
            text: text.into(),
            position,
        }
    }

    pub fn is_quoted(&self) -> bool {
        is_quoted(&self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
