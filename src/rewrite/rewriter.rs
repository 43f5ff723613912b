//! Synonym query rewriter.

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::{normalize, tokenize};
use crate::config::RewriteConfig;
use crate::query::{QueryStringQuery, SearchQuery};
use crate::synonym::{SynonymDictionary, match_synonyms, variations};

use super::builder::build;
use super::diagnostics::{DiagnosticSink, LogDiagnosticSink, RewriteEvent};
use super::expander::expand;
use super::types::{RewriteOutcome, RewriteTrace, UnchangedReason};

/// Rewrites query-string queries so that they also match synonyms.
///
/// The rewriter holds no dictionary of its own: each call receives the
/// dictionary snapshot to use, typically [`crate::synonym::SynonymStore::snapshot`].
/// It is `Send + Sync` and can serve concurrent rewrites.
///
/// # Example
///
/// ```
/// use synoptic::query::{Operator, QueryStringQuery, SearchQuery};
/// use synoptic::rewrite::SynonymQueryRewriter;
/// use synoptic::synonym::SynonymDictionary;
///
/// let dictionary = SynonymDictionary::from_mappings([("dagis", ["förskola", "lekis"])]);
/// let query: SearchQuery = QueryStringQuery::new("dagis")
///     .field("title")
///     .with_default_operator(Operator::And)
///     .into();
///
/// let outcome = SynonymQueryRewriter::new().rewrite(&query, &dictionary, true);
/// let rewritten = outcome.query().as_query_string().unwrap();
/// assert_eq!(rewritten.query_text(), "((dagis) (forskola)) ((dagis) (lekis))");
/// assert_eq!(rewritten.default_operator, Operator::Or);
/// assert_eq!(rewritten.minimum_should_match.unwrap().to_string(), "1<40%");
/// ```
pub struct SynonymQueryRewriter {
    config: RewriteConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl SynonymQueryRewriter {
    /// Create a rewriter with the default configuration, logging diagnostics.
    pub fn new() -> Self {
        Self::with_config(RewriteConfig::default())
    }

    pub fn with_config(config: RewriteConfig) -> Self {
        SynonymQueryRewriter {
            config,
            sink: Arc::new(LogDiagnosticSink),
        }
    }

    /// Send diagnostics to `sink` instead of the log.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Rewrite `query` against `dictionary`.
    ///
    /// `supports_synonyms` tells whether the target index supports synonym
    /// expansion at all. Queries that cannot be expanded come back unchanged
    /// together with the reason, and the diagnostic sink is notified.
    pub fn rewrite(
        &self,
        query: &SearchQuery,
        dictionary: &SynonymDictionary,
        supports_synonyms: bool,
    ) -> RewriteOutcome {
        if !supports_synonyms {
            return self.pass_through(query, UnchangedReason::SynonymsUnsupported);
        }

        let Some(query_string) = query.as_query_string() else {
            return self.pass_through(query, UnchangedReason::UnsupportedQueryShape);
        };

        let normalized = normalize(query_string.query_text());
        if normalized.is_empty() {
            return self.pass_through(query, UnchangedReason::EmptyQuery);
        }

        match self.rewrite_normalized(&normalized, query_string, dictionary) {
            Some(rewritten) => {
                log::debug!(
                    "Rewrote query {:?} to {:?}",
                    query_string.query_text(),
                    rewritten.query_text()
                );
                RewriteOutcome::rewritten(rewritten)
            }
            None => self.pass_through(query, UnchangedReason::NoPhrases),
        }
    }

    /// Rewrite a batch of queries in parallel against one dictionary snapshot.
    ///
    /// Outcomes are returned in input order.
    pub fn rewrite_all(
        &self,
        queries: &[SearchQuery],
        dictionary: &SynonymDictionary,
        supports_synonyms: bool,
    ) -> Vec<RewriteOutcome> {
        queries
            .par_iter()
            .map(|query| self.rewrite(query, dictionary, supports_synonyms))
            .collect()
    }

    /// Run the pipeline stages on `text` and return every intermediate result.
    pub fn analyze(&self, text: &str, dictionary: &SynonymDictionary) -> RewriteTrace {
        let normalized = normalize(text);
        let phrases = tokenize(&normalized);
        let variations = variations(&phrases);
        let matched = match_synonyms(&phrases, variations.clone(), dictionary);
        let fragments = expand(&matched.to_expand, dictionary);

        RewriteTrace {
            normalized,
            phrases,
            variations,
            matched,
            fragments,
        }
    }

    fn rewrite_normalized(
        &self,
        normalized: &str,
        original: &QueryStringQuery,
        dictionary: &SynonymDictionary,
    ) -> Option<QueryStringQuery> {
        let phrases = tokenize(normalized);
        if phrases.is_empty() {
            return None;
        }

        let matched = match_synonyms(&phrases, variations(&phrases), dictionary);
        let fragments = expand(&matched.to_expand, dictionary);
        build(&matched.not_to_expand, &fragments, original, &self.config)
    }

    fn pass_through(&self, query: &SearchQuery, reason: UnchangedReason) -> RewriteOutcome {
        self.sink.notify(&RewriteEvent {
            reason,
            query_kind: query.kind().to_string(),
        });
        RewriteOutcome::unchanged(query, reason)
    }
}

impl Default for SynonymQueryRewriter {
    fn default() -> Self {
        Self::new()
    }
}
