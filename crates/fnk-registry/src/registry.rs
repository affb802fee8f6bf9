use std::any::{self, Any};
use std::fmt;

use itertools::Itertools;
use miette::Diagnostic;
use rustc_hash::{FxBuildHasher, FxHashMap};
use thiserror::Error;
use tracing::debug;

use crate::erased::Erased;
use crate::key::Key;

/// Failure causes for [`Registry::try_get`].
///
/// The plain [`Registry::get`] folds both causes into absence; this error
/// tells them apart for hosts that need the distinction.
#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum LookupError {
    #[error("no entry found for \"{0}\"")]
    #[diagnostic(code(fnk::registry::key_missing))]
    KeyMissing(Key),
    #[error("entry \"{key}\" holds {found}, not {expected}")]
    #[diagnostic(
        code(fnk::registry::type_mismatch),
        help("look the entry up as {found}, or store a {expected} under this key")
    )]
    TypeMismatch {
        key: Key,
        expected: &'static str,
        found: &'static str,
    },
}

/// A mapping from string keys to type-erased values.
///
/// Values of otherwise-incompatible types share the one container by going
/// through [`Erased`]; recovery at lookup time is checked against the type
/// the caller requests. Entries live until overwritten, removed, or the
/// registry itself is dropped.
#[derive(Debug, Default)]
pub struct Registry {
    entries: FxHashMap<Key, Erased>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Stores `value` under `key`, overwriting any prior entry.
    #[cfg(not(feature = "sync"))]
    pub fn store<T: Any>(&mut self, key: impl Into<Key>, value: T) {
        self.insert(key.into(), Erased::new(value));
    }

    /// Stores `value` under `key`, overwriting any prior entry.
    #[cfg(feature = "sync")]
    pub fn store<T: Any + Send + Sync>(&mut self, key: impl Into<Key>, value: T) {
        self.insert(key.into(), Erased::new(value));
    }

    fn insert(&mut self, key: Key, boxed: Erased) {
        let stored = boxed.type_name();
        match self.entries.insert(key, boxed) {
            Some(previous) => debug!(
                %key,
                stored,
                previous = previous.type_name(),
                "overwrote registry entry"
            ),
            None => debug!(%key, stored, "stored registry entry"),
        }
    }

    /// Looks up the entry at `key` as a `T`.
    ///
    /// A missing key and an entry of a different type are indistinguishable
    /// here; both come back as `None`. Use [`Registry::try_get`] when the
    /// cause matters.
    pub fn get<T: Any>(&self, key: impl Into<Key>) -> Option<&T> {
        let key = key.into();
        let found = self.entries.get(&key).and_then(|boxed| boxed.downcast_ref());
        if found.is_none() {
            debug!(%key, requested = any::type_name::<T>(), "registry lookup came up empty");
        }
        found
    }

    /// Looks up the entry at `key` as a `T`, reporting why a lookup failed.
    pub fn try_get<T: Any>(&self, key: impl Into<Key>) -> Result<&T, LookupError> {
        let key = key.into();
        let boxed = self
            .entries
            .get(&key)
            .ok_or(LookupError::KeyMissing(key))?;
        boxed.downcast_ref().ok_or_else(|| LookupError::TypeMismatch {
            key,
            expected: any::type_name::<T>(),
            found: boxed.type_name(),
        })
    }

    /// Removes and returns the entry at `key`, still erased.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Erased> {
        let key = key.into();
        let removed = self.entries.remove(&key);
        if removed.is_some() {
            debug!(%key, "removed registry entry");
        }
        removed
    }

    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in lexicographic order of their strings.
    pub fn keys(&self) -> Vec<Key> {
        self.entries
            .keys()
            .copied()
            .sorted_by_key(|key| key.as_str())
            .collect()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .keys()
            .iter()
            .map(|key| format!("{}: {}", key, self.entries[key].type_name()))
            .join(", ");
        write!(f, "Registry {{ {} }}", entries)
    }
}
