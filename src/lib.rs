//! # Synoptic
//!
//! Synonym-aware rewriting of free-text search queries.
//!
//! A query such as `dagis` is rewritten into a boolean query string that also
//! matches its configured synonyms,
//! `((dagis) (forskola)) ((dagis) (lekis))`, together with a
//! minimum-should-match relaxation so that relevance degrades gracefully.
//!
//! ## Features
//!
//! - Diacritic-insensitive phrase extraction with quoted-phrase support
//! - Multi-word synonym matching over every contiguous sub-phrase
//! - No term is matched both literally and through an expansion
//! - Deterministic output for a given dictionary snapshot
//! - Concurrent rewrites against shared, hot-swappable dictionary snapshots

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod query;
pub mod rewrite;
pub mod synonym;

pub mod prelude {
    pub use crate::config::RewriteConfig;
    pub use crate::error::{Result, SynopticError};
    pub use crate::query::{MinimumShouldMatch, Operator, QueryStringQuery, SearchQuery};
    pub use crate::rewrite::{RewriteOutcome, SynonymQueryRewriter, UnchangedReason};
    pub use crate::synonym::{SynonymDictionary, SynonymStore};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
