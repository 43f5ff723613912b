//! Text analysis for synonym rewriting.
//!
//! Raw query text is first normalized and then split into phrases:
//!
//! - [`normalizer`] - Escape removal, diacritic stripping, whitespace collapsing
//! - [`tokenizer`] - Phrase extraction (bare terms and quoted phrases)
//! - [`phrase`] - The [`Phrase`] type flowing through the pipeline
//!
//! # Examples
//!
//! ```
//! use synoptic::analysis::{normalize, tokenize};
//!
//! let phrases = tokenize(&normalize("Förskola \"red bike\""));
//! assert_eq!(phrases.len(), 2);
//! assert_eq!(phrases[0].text, "Forskola");
//! assert_eq!(phrases[1].text, "\"red bike\"");
//! ```

pub mod normalizer;
pub mod phrase;
pub mod tokenizer;

pub use normalizer::normalize;
pub use phrase::{Phrase, is_quoted};
pub use tokenizer::{MAX_PHRASES, PhraseTokenizer, tokenize};
