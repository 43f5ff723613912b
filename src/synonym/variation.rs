//! Phrase variation generation.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::Phrase;

/// A contiguous run of tokenized phrases joined with single spaces.
///
/// Variations are only used to probe the synonym dictionary. `start` and `len`
/// describe the first run that produced the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhraseVariation {
    pub text: String,
    /// Index of the first phrase of the run.
    pub start: usize,
    /// Number of phrases in the run.
    pub len: usize,
}

impl PhraseVariation {
    /// The single space-separated terms of the variation.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ').filter(|term| !term.is_empty())
    }
}

/// Generate every contiguous sub-sequence of `phrases`.
///
/// Runs are produced for every start index and every length, shortest first,
/// so `[a, b, c]` yields `a`, `a b`, `a b c`, `b`, `b c`, `c`. Repeated texts
/// collapse onto their first run. Quoted phrases stay whole.
pub fn variations(phrases: &[Phrase]) -> Vec<PhraseVariation> {
    let n = phrases.len();
    let mut seen = AHashSet::with_capacity(n * (n + 1) / 2);
    let mut result = Vec::with_capacity(n * (n + 1) / 2);

    for start in 0..n {
        let mut text = String::new();
        for (offset, phrase) in phrases[start..].iter().enumerate() {
            if offset > 0 {
                text.push(' ');
            }
            text.push_str(&phrase.text);

            if seen.insert(text.clone()) {
                result.push(PhraseVariation {
                    text: text.clone(),
                    start,
                    len: offset + 1,
                });
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize;

    fn texts(variations: &[PhraseVariation]) -> Vec<&str> {
        variations.iter().map(|v| v.text.as_str()).collect()
    }

    #[test]
    fn test_all_contiguous_runs() {
        let result = variations(&tokenize("a b c"));
        assert_eq!(texts(&result), vec!["a", "a b", "a b c", "b", "b c", "c"]);
        assert_eq!(result[2].start, 0);
        assert_eq!(result[2].len, 3);
        assert_eq!(result[4].start, 1);
        assert_eq!(result[4].len, 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = variations(&tokenize("new york new"));
        assert_eq!(
            texts(&result),
            vec!["new", "new york", "new york new", "york", "york new"]
        );
    }

    #[test]
    fn test_quoted_phrase_not_split() {
        let result = variations(&tokenize("\"red bike\""));
        assert_eq!(texts(&result), vec!["\"red bike\""]);

        let result = variations(&tokenize("cheap \"red bike\""));
        assert_eq!(
            texts(&result),
            vec!["cheap", "cheap \"red bike\"", "\"red bike\""]
        );
        assert!(!texts(&result).contains(&"red"));
        assert!(!texts(&result).contains(&"bike"));
    }

    #[test]
    fn test_count_is_bounded() {
        let query: Vec<String> = (0..80).map(|i| format!("t{i}")).collect();
        let result = variations(&tokenize(&query.join(" ")));
        assert_eq!(result.len(), 50 * 51 / 2);
    }

    #[test]
    fn test_empty() {
        assert!(variations(&[]).is_empty());
    }

    #[test]
    fn test_terms() {
        let variation = PhraseVariation {
            text: "machine learning".to_string(),
            start: 0,
            len: 2,
        };
        assert_eq!(variation.terms().collect::<Vec<_>>(), vec!["machine", "learning"]);
    }
}
