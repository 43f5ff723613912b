//! Shared holder for the current synonym dictionary snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::dictionary::SynonymDictionary;
use crate::error::Result;

/// Owns the current synonym dictionary and replaces it wholesale on refresh.
///
/// Rewrites call [`SynonymStore::snapshot`] once and work on that `Arc` for the
/// whole call; a concurrent [`SynonymStore::replace`] or
/// [`SynonymStore::reload`] never changes a snapshot already handed out.
#[derive(Debug, Default)]
pub struct SynonymStore {
    current: RwLock<Arc<SynonymDictionary>>,
    source: Option<PathBuf>,
}

impl SynonymStore {
    /// Create a store holding `dictionary`.
    pub fn new(dictionary: SynonymDictionary) -> Self {
        SynonymStore {
            current: RwLock::new(Arc::new(dictionary)),
            source: None,
        }
    }

    /// Create a store backed by a JSON synonym file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let dictionary = SynonymDictionary::load_from_file(&path)?;
        log::info!(
            "Loaded {} synonym entries from {}",
            dictionary.len(),
            path.display()
        );

        Ok(SynonymStore {
            current: RwLock::new(Arc::new(dictionary)),
            source: Some(path),
        })
    }

    /// The current dictionary snapshot.
    pub fn snapshot(&self) -> Arc<SynonymDictionary> {
        Arc::clone(&*self.current.read())
    }

    /// Replace the dictionary, returning the previous snapshot.
    pub fn replace(&self, dictionary: SynonymDictionary) -> Arc<SynonymDictionary> {
        std::mem::replace(&mut *self.current.write(), Arc::new(dictionary))
    }

    /// Re-read the backing file, if any.
    ///
    /// Returns `false` for stores without a backing file. On a read or parse
    /// error the current dictionary stays in place.
    pub fn reload(&self) -> Result<bool> {
        let Some(path) = &self.source else {
            return Ok(false);
        };

        let dictionary = SynonymDictionary::load_from_file(path)?;
        log::info!(
            "Reloaded {} synonym entries from {}",
            dictionary.len(),
            path.display()
        );
        self.replace(dictionary);
        Ok(true)
    }

    /// Path of the backing file, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
