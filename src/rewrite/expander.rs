//! Boolean expansion of matched phrases.

use serde::{Deserialize, Serialize};

use crate::analysis::is_quoted;
use crate::synonym::{PhraseVariation, SynonymDictionary};

use super::builder::escape_phrase;

/// Boolean sub-expression OR-ing one matched phrase with each of its synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedQueryFragment {
    /// The matched phrase the fragment was built from.
    pub source: String,
    /// Index of the first query phrase covered by `source`.
    pub start: usize,
    /// Query-string text of the fragment.
    pub text: String,
}

/// Require every word of an unquoted multi-word phrase.
///
/// `machine learning` becomes `machine AND learning`; quoted phrases and
/// single terms are returned unchanged.
pub fn and_join(phrase: &str) -> String {
    if is_quoted(phrase) {
        phrase.to_string()
    } else {
        phrase.replace(' ', " AND ")
    }
}

/// Build the fragment for a single phrase and its synonyms.
///
/// Each synonym yields a group `((phrase) (synonym))`; groups are separated by
/// a space, which the OR top-level operator reads as a disjunction. Phrase and
/// synonym text is escaped before it is grouped. Returns `None` when there are
/// no synonyms.
pub fn expand_phrase<'a, I>(phrase: &str, synonyms: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let source = and_join(&escape_phrase(phrase));
    let groups: Vec<String> = synonyms
        .into_iter()
        .map(|synonym| format!("(({source}) ({}))", and_join(&escape_phrase(synonym))))
        .collect();

    if groups.is_empty() {
        None
    } else {
        Some(groups.join(" "))
    }
}

/// Build one fragment per phrase in `to_expand`, in the same order.
///
/// Synonyms are visited in ascending order, so the output is stable for a
/// given dictionary snapshot.
pub fn expand(
    to_expand: &[PhraseVariation],
    dictionary: &SynonymDictionary,
) -> Vec<ExpandedQueryFragment> {
    to_expand
        .iter()
        .filter_map(|variation| {
            let synonyms = dictionary.get_synonyms(&variation.text)?;
            let text = expand_phrase(&variation.text, synonyms)?;
            Some(ExpandedQueryFragment {
                source: variation.text.clone(),
                start: variation.start,
                text,
            })
        })
        .collect()
}
