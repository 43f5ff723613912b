//! Synonym dictionaries and phrase matching.
//!
//! - [`SynonymDictionary`] - Normalized phrase to synonym-set mapping
//! - [`SynonymStore`] - Holder of the current dictionary snapshot
//! - [`variations`] - Candidate sub-phrases of a query
//! - [`match_synonyms`] - Split candidates into expanded and literal phrases

pub mod dictionary;
pub mod matcher;
pub mod store;
pub mod variation;

pub use dictionary::SynonymDictionary;
pub use matcher::{SynonymMatch, match_synonyms};
pub use store::SynonymStore;
pub use variation::{PhraseVariation, variations};
