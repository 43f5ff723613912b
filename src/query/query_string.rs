//! Query-string queries and the search query envelope.

use serde::{Deserialize, Serialize};

use super::minimum_should_match::MinimumShouldMatch;
use super::operator::Operator;

/// A free-text query in boolean query-string syntax.
///
/// This is both the input of the synonym rewrite and its output: a rewritten
/// query keeps `fields` and `analyzer`, replaces `query`, forces
/// `default_operator` to OR and may carry a `minimum_should_match`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryStringQuery {
    /// The raw query text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Fields the query is run against, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    /// Name of the analyzer applied to the query text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    /// Operator between clauses without an explicit operator.
    #[serde(default)]
    pub default_operator: Operator,
    /// Optional relaxation of the OR-combined top level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<MinimumShouldMatch>,
}

impl QueryStringQuery {
    /// Create a query string query for the given text.
    pub fn new<S: Into<String>>(query: S) -> Self {
        QueryStringQuery {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Add a target field.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Replace the target fields.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the analyzer name.
    pub fn with_analyzer<S: Into<String>>(mut self, analyzer: S) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Set the default operator.
    pub fn with_default_operator(mut self, operator: Operator) -> Self {
        self.default_operator = operator;
        self
    }

    /// Set the minimum-should-match expression.
    pub fn with_minimum_should_match(mut self, minimum: MinimumShouldMatch) -> Self {
        self.minimum_should_match = Some(minimum);
        self
    }

    /// The query text, or an empty string when absent.
    pub fn query_text(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}

/// A term query. Carried through the rewrite untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermQuery {
    pub field: String,
    pub value: String,
}

impl TermQuery {
    pub fn new<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        TermQuery {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Matches every document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchAllQuery {}

/// A search query as handed over by the query-construction layer.
///
/// Serialized in the familiar externally tagged form, e.g.
/// `{"query_string": {"query": "dagis", "default_operator": "AND"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchQuery {
    QueryString(QueryStringQuery),
    Term(TermQuery),
    MatchAll(MatchAllQuery),
}

impl SearchQuery {
    /// Short name of the query type, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchQuery::QueryString(_) => "query_string",
            SearchQuery::Term(_) => "term",
            SearchQuery::MatchAll(_) => "match_all",
        }
    }

    pub fn as_query_string(&self) -> Option<&QueryStringQuery> {
        match self {
            SearchQuery::QueryString(query) => Some(query),
            _ => None,
        }
    }
}

impl From<QueryStringQuery> for SearchQuery {
    fn from(query: QueryStringQuery) -> Self {
        SearchQuery::QueryString(query)
    }
}

impl From<TermQuery> for SearchQuery {
    fn from(query: TermQuery) -> Self {
        SearchQuery::Term(query)
    }
}
