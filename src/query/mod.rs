//! Query model shared by the rewrite pipeline and the CLI.
//!
//! - [`SearchQuery`] - The query envelope received from callers
//! - [`QueryStringQuery`] - A boolean query-string query (input and output of a rewrite)
//! - [`Operator`] - Default boolean operator
//! - [`MinimumShouldMatch`] - Relaxation of an OR-combined query

pub mod minimum_should_match;
pub mod operator;
pub mod query_string;

pub use minimum_should_match::MinimumShouldMatch;
pub use operator::Operator;
pub use query_string::{MatchAllQuery, QueryStringQuery, SearchQuery, TermQuery};
