//! Synonym dictionary mapping phrases to their synonyms.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;

use crate::analysis::normalize;
use crate::error::{Result, SynopticError};

/// On-disk layouts accepted by [`SynonymDictionary::load_from_file`].
#[derive(Deserialize)]
#[serde(untagged)]
enum SynonymFile {
    /// `[["ml", "machine learning"], ...]`: every term maps to the others.
    Groups(Vec<Vec<String>>),
    /// `{"dagis": ["förskola", "lekis"], ...}`: one-directional mappings.
    Mappings(BTreeMap<String, Vec<String>>),
}

/// Synonym dictionary for query rewriting.
///
/// Keys and synonyms are phrases: single terms, unquoted multi-word phrases
/// (`machine learning`) or quoted phrases (`"red bike"`). Every entry is passed
/// through [`normalize`] when it is added, the same function applied to query
/// text, so a key authored as `förskola` is stored and matched as `forskola`.
/// Case is kept as authored. Synonym sets are ordered, which keeps rewritten
/// queries deterministic.
///
/// A dictionary is immutable once shared; refreshes replace the whole
/// dictionary (see [`super::SynonymStore`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymDictionary {
    synonyms: AHashMap<String, BTreeSet<String>>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a synonym dictionary from a JSON file.
    ///
    /// The file holds either an array of synonym groups, where each group is
    /// an array of phrases that are synonyms of each other, or an object
    /// mapping a phrase to its synonyms:
    ///
    /// ```json
    /// [
    ///   ["ml", "machine learning", "machine-learning"],
    ///   ["ai", "artificial intelligence"]
    /// ]
    /// ```
    ///
    /// ```json
    /// { "dagis": ["förskola", "lekis"] }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SynopticError::dictionary(format!(
                "Failed to read synonym dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            SynopticError::dictionary(format!(
                "Failed to parse synonym dictionary '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a synonym dictionary from JSON text (see [`Self::load_from_file`]).
    pub fn from_json(json: &str) -> Result<Self> {
        let dictionary = match serde_json::from_str::<SynonymFile>(json)? {
            SynonymFile::Groups(groups) => Self::from_synonym_groups(groups),
            SynonymFile::Mappings(mappings) => Self::from_mappings(mappings),
        };
        Ok(dictionary)
    }

    /// Build a dictionary from synonym groups.
    ///
    /// For example `["big", "large", "huge"]` creates:
    /// - "big" -> {"huge", "large"}
    /// - "large" -> {"big", "huge"}
    /// - "huge" -> {"big", "large"}
    ///
    /// A phrase appearing in several groups gets the union of their synonyms.
    pub fn from_synonym_groups<G, S>(groups: G) -> Self
    where
        G: IntoIterator,
        G::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for group in groups {
            dictionary.add_synonym_group(group);
        }
        dictionary
    }

    /// Build a dictionary from one-directional mappings.
    pub fn from_mappings<M, K, V, S>(mappings: M) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for (phrase, synonyms) in mappings {
            dictionary.insert(phrase, synonyms);
        }
        dictionary
    }

    /// Add synonyms for `phrase`, merging with any already present.
    ///
    /// Entries that normalize to the empty string, and synonyms equal to the
    /// phrase itself, are ignored.
    pub fn insert<K, V, S>(&mut self, phrase: K, synonyms: V)
    where
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = normalize(phrase.as_ref());
        if key.is_empty() {
            return;
        }

        let normalized: BTreeSet<String> = synonyms
            .into_iter()
            .map(|synonym| normalize(synonym.as_ref()))
            .filter(|synonym| !synonym.is_empty() && *synonym != key)
            .collect();
        if normalized.is_empty() {
            return;
        }

        self.synonyms.entry(key).or_default().extend(normalized);
    }

    /// Add a synonym group where all phrases are synonyms of each other.
    pub fn add_synonym_group<G, S>(&mut self, group: G)
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = group
            .into_iter()
            .map(|term| term.as_ref().to_string())
            .collect();

        for (i, term) in terms.iter().enumerate() {
            let others = terms
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| other.as_str());
            self.insert(term, others);
        }
    }

    /// Get the synonyms of a normalized phrase.
    pub fn get_synonyms(&self, phrase: &str) -> Option<&BTreeSet<String>> {
        self.synonyms.get(phrase)
    }

    /// Whether `phrase` has synonyms.
    pub fn contains(&self, phrase: &str) -> bool {
        self.synonyms.contains_key(phrase)
    }

    /// Number of phrases with synonyms.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// All phrases with synonyms, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.synonyms.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
