//! Diagnostic notifications emitted when a query is passed through.

use serde::{Deserialize, Serialize};

use super::types::UnchangedReason;

/// A non-fatal notification that a query was not rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteEvent {
    pub reason: UnchangedReason,
    /// Type of the query that was passed through (`query_string`, `term`, ...).
    pub query_kind: String,
}

/// Receiver of rewrite diagnostics.
///
/// The rewriter calls the sink at its decision points (synonyms unsupported,
/// unsupported query shape, empty query, no phrases). Sinks must not fail and
/// must be cheap; any closure `Fn(&RewriteEvent)` is a sink.
pub trait DiagnosticSink: Send + Sync {
    fn notify(&self, event: &RewriteEvent);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&RewriteEvent) + Send + Sync,
{
    fn notify(&self, event: &RewriteEvent) {
        self(event)
    }
}

/// Forwards diagnostics to the `log` facade.
///
/// Configuration-level fallbacks are logged as warnings, empty input at debug
/// level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnosticSink;

impl DiagnosticSink for LogDiagnosticSink {
    fn notify(&self, event: &RewriteEvent) {
        match event.reason {
            UnchangedReason::SynonymsUnsupported | UnchangedReason::UnsupportedQueryShape => {
                log::warn!(
                    "Synonym rewrite skipped for {} query: {}",
                    event.query_kind,
                    event.reason
                );
            }
            UnchangedReason::EmptyQuery | UnchangedReason::NoPhrases => {
                log::debug!(
                    "Synonym rewrite skipped for {} query: {}",
                    event.query_kind,
                    event.reason
                );
            }
        }
    }
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnosticSink;

impl DiagnosticSink for NoopDiagnosticSink {
    fn notify(&self, _event: &RewriteEvent) {}
}
