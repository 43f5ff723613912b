//! Configuration for synonym rewriting.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynopticError};
use crate::query::MinimumShouldMatch;

/// Configuration for the synonym rewrite.
///
/// Every field has a default, so a configuration file only needs the values
/// it changes:
///
/// ```json
/// { "synonyms_path": "synonyms.json", "mixed_minimum_should_match": "3<75%" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Relaxation used when every phrase of an AND query was expanded.
    pub expansion_only_minimum_should_match: MinimumShouldMatch,
    /// Relaxation used when an AND query keeps literal phrases.
    pub mixed_minimum_should_match: MinimumShouldMatch,
    /// Path to a JSON synonym dictionary.
    pub synonyms_path: Option<PathBuf>,
    /// Whether the target index supports synonym expansion.
    pub synonyms_supported: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            expansion_only_minimum_should_match: MinimumShouldMatch::conditional(1, 40),
            mixed_minimum_should_match: MinimumShouldMatch::conditional(2, 60),
            synonyms_path: None,
            synonyms_supported: true,
        }
    }
}

impl RewriteConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            SynopticError::config(format!(
                "Failed to parse configuration '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Set the relaxation for queries made only of expansions.
    pub fn with_expansion_only_minimum_should_match(mut self, minimum: MinimumShouldMatch) -> Self {
        self.expansion_only_minimum_should_match = minimum;
        self
    }

    /// Set the relaxation for queries mixing literal phrases and expansions.
    pub fn with_mixed_minimum_should_match(mut self, minimum: MinimumShouldMatch) -> Self {
        self.mixed_minimum_should_match = minimum;
        self
    }

    pub fn with_synonyms_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.synonyms_path = Some(path.into());
        self
    }
}
