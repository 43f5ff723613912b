//! Result types of a rewrite.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::Phrase;
use crate::query::{QueryStringQuery, SearchQuery};
use crate::synonym::{PhraseVariation, SynonymMatch};

use super::expander::ExpandedQueryFragment;

/// Why a query was passed through without rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnchangedReason {
    /// The target index does not support synonym expansion.
    SynonymsUnsupported,
    /// The query is not a query-string query.
    UnsupportedQueryShape,
    /// The query text is absent or empty after normalization.
    EmptyQuery,
    /// No phrase could be extracted from the query text.
    NoPhrases,
}

impl fmt::Display for UnchangedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            UnchangedReason::SynonymsUnsupported => "synonym expansion is not supported",
            UnchangedReason::UnsupportedQueryShape => "query is not a query_string query",
            UnchangedReason::EmptyQuery => "query text is empty",
            UnchangedReason::NoPhrases => "no phrases found in query text",
        };
        f.write_str(description)
    }
}

/// Result of a rewrite: the expanded query, or the original one and why it was
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RewriteOutcome {
    Rewritten {
        query: SearchQuery,
    },
    Unchanged {
        query: SearchQuery,
        reason: UnchangedReason,
    },
}

impl RewriteOutcome {
    pub(crate) fn rewritten(query: QueryStringQuery) -> Self {
        RewriteOutcome::Rewritten {
            query: SearchQuery::QueryString(query),
        }
    }

    pub(crate) fn unchanged(query: &SearchQuery, reason: UnchangedReason) -> Self {
        RewriteOutcome::Unchanged {
            query: query.clone(),
            reason,
        }
    }

    /// The query to send to the search engine.
    pub fn query(&self) -> &SearchQuery {
        match self {
            RewriteOutcome::Rewritten { query } | RewriteOutcome::Unchanged { query, .. } => query,
        }
    }

    pub fn into_query(self) -> SearchQuery {
        match self {
            RewriteOutcome::Rewritten { query } | RewriteOutcome::Unchanged { query, .. } => query,
        }
    }

    pub fn is_rewritten(&self) -> bool {
        matches!(self, RewriteOutcome::Rewritten { .. })
    }

    /// The reason the query was kept, if it was.
    pub fn unchanged_reason(&self) -> Option<UnchangedReason> {
        match self {
            RewriteOutcome::Rewritten { .. } => None,
            RewriteOutcome::Unchanged { reason, .. } => Some(*reason),
        }
    }
}

/// Intermediate results of every pipeline stage for one query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteTrace {
    pub normalized: String,
    pub phrases: Vec<Phrase>,
    pub variations: Vec<PhraseVariation>,
    pub matched: SynonymMatch,
    pub fragments: Vec<ExpandedQueryFragment>,
}
