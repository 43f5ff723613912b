//! Synonym expansion of query-string queries.
//!
//! A rewrite runs these stages, each a pure function of its input and the
//! dictionary snapshot:
//!
//! ```text
//! raw text -> normalize -> tokenize -> variations -> match_synonyms -> expand -> build
//! ```
//!
//! [`SynonymQueryRewriter`] drives the stages and decides when a query is
//! passed through unchanged; [`expand`] and [`build`] are exposed for callers
//! composing their own pipeline.

mod builder;
mod diagnostics;
mod expander;
mod rewriter;
mod types;

pub use builder::{build, escape_phrase, minimum_should_match};
pub use diagnostics::{DiagnosticSink, LogDiagnosticSink, NoopDiagnosticSink, RewriteEvent};
pub use expander::{ExpandedQueryFragment, and_join, expand, expand_phrase};
pub use rewriter::SynonymQueryRewriter;
pub use types::{RewriteOutcome, RewriteTrace, UnchangedReason};
