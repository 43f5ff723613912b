//! Assembly of the rewritten query string.

use crate::analysis::{Phrase, is_quoted};
use crate::config::RewriteConfig;
use crate::query::{MinimumShouldMatch, Operator, QueryStringQuery};

use super::expander::ExpandedQueryFragment;

/// Characters with a special meaning in query-string syntax that may occur in
/// phrases or synonyms.
const RESERVED_CHARS: &[char] = &[
    '+', '-', '=', '!', '{', '}', '[', ']', '^', '~', ':', '\\', '/', '<', '>', '&', '|',
];

/// Characters the rewrite uses for its own grouping. They are escaped inside
/// phrase text so that the generated groups stay balanced.
const GROUPING_CHARS: &[char] = &['(', ')', '"'];

/// Escape one phrase or synonym before it is wrapped into the query.
///
/// Reserved and grouping characters get a backslash. A quoted phrase keeps
/// its enclosing quotes; only its inner text is escaped. Wildcards (`*`, `?`)
/// pass through.
///
/// ```
/// use synoptic::rewrite::escape_phrase;
///
/// assert_eq!(escape_phrase("real-time"), r"real\-time");
/// assert_eq!(escape_phrase("c(x)"), r"c\(x\)");
/// assert_eq!(escape_phrase("\"red bike\""), "\"red bike\"");
/// ```
pub fn escape_phrase(phrase: &str) -> String {
    let (open, inner, close) = if is_quoted(phrase) {
        ("\"", &phrase[1..phrase.len() - 1], "\"")
    } else {
        ("", phrase, "")
    };

    let mut escaped = String::with_capacity(phrase.len() + 4);
    escaped.push_str(open);
    for ch in inner.chars() {
        if RESERVED_CHARS.contains(&ch) || GROUPING_CHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push_str(close);
    escaped
}

/// Pick the relaxation for the rewritten query.
///
/// Only a query whose original default operator was AND gets one: a query of
/// nothing but expansions uses the looser `expansion_only` setting, anything
/// with literal phrases the stricter `mixed` setting.
pub fn minimum_should_match(
    literal_phrases: usize,
    fragments: usize,
    original_operator: Operator,
    config: &RewriteConfig,
) -> Option<MinimumShouldMatch> {
    match original_operator {
        Operator::Or => None,
        Operator::And if literal_phrases == 0 && fragments > 0 => {
            Some(config.expansion_only_minimum_should_match)
        }
        Operator::And => Some(config.mixed_minimum_should_match),
    }
}

/// Merge literal phrases and expansion fragments into the rewritten query.
///
/// Pieces are laid out by the query position they start at, so the rewritten
/// text follows the original phrase order. Returns `None` when there is
/// nothing to search for, in which case the original query is kept.
pub fn build(
    not_to_expand: &[Phrase],
    fragments: &[ExpandedQueryFragment],
    original: &QueryStringQuery,
    config: &RewriteConfig,
) -> Option<QueryStringQuery> {
    if not_to_expand.is_empty() && fragments.is_empty() {
        return None;
    }

    // Fragment text is escaped by the expander; literal phrases are escaped here.
    let mut pieces: Vec<(usize, String)> = not_to_expand
        .iter()
        .map(|phrase| (phrase.position, escape_phrase(phrase.as_str())))
        .chain(
            fragments
                .iter()
                .map(|fragment| (fragment.start, fragment.text.clone())),
        )
        .collect();
    pieces.sort_by_key(|(position, _)| *position);

    let joined = pieces
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join(" ");

    Some(QueryStringQuery {
        query: Some(joined),
        fields: original.fields.clone(),
        analyzer: original.analyzer.clone(),
        default_operator: Operator::Or,
        minimum_should_match: minimum_should_match(
            not_to_expand.len(),
            fragments.len(),
            original.default_operator,
            config,
        ),
    })
}
