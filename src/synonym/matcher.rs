//! Matching phrase variations against a synonym dictionary.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use super::dictionary::SynonymDictionary;
use super::variation::PhraseVariation;
use crate::analysis::Phrase;

/// Outcome of matching a query against a synonym dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymMatch {
    /// Variations that have synonyms, in variation order.
    pub to_expand: Vec<PhraseVariation>,
    /// Original phrases matched literally, in query order, without duplicates.
    pub not_to_expand: Vec<Phrase>,
}

impl SynonymMatch {
    /// Whether neither expanded nor literal phrases remain.
    pub fn is_empty(&self) -> bool {
        self.to_expand.is_empty() && self.not_to_expand.is_empty()
    }
}

/// Split variations into those to expand and the phrases to keep literally.
///
/// `to_expand` holds every variation found in the dictionary. `not_to_expand`
/// starts from the original `phrases` and drops:
///
/// - phrases that are themselves expanded,
/// - phrases equal to any single term of an expanded variation,
/// - phrases that are part of the run an expanded variation was built from.
///
/// A term is thus never matched both literally and through an expansion.
pub fn match_synonyms(
    phrases: &[Phrase],
    variations: Vec<PhraseVariation>,
    dictionary: &SynonymDictionary,
) -> SynonymMatch {
    let to_expand: Vec<PhraseVariation> = variations
        .into_iter()
        .filter(|variation| {
            dictionary
                .get_synonyms(&variation.text)
                .is_some_and(|synonyms| !synonyms.is_empty())
        })
        .collect();

    let not_to_expand = {
        let mut excluded: AHashSet<&str> = AHashSet::new();
        for variation in &to_expand {
            excluded.insert(variation.text.as_str());
            excluded.extend(variation.terms());
            let run_start = variation.start.min(phrases.len());
            let run_end = (variation.start + variation.len).min(phrases.len());
            excluded.extend(phrases[run_start..run_end].iter().map(Phrase::as_str));
        }

        let mut kept: AHashSet<&str> = AHashSet::new();
        phrases
            .iter()
            .filter(|phrase| !excluded.contains(phrase.as_str()) && kept.insert(phrase.as_str()))
            .cloned()
            .collect()
    };

    SynonymMatch {
        to_expand,
        not_to_expand,
    }
}
