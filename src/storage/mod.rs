//! Key-value persistence: the byte-store abstraction, its backends, and the adapter
//! that maps ledger state onto storage keys.

pub mod json_backend;
pub mod persistence;

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use crate::errors::{LedgerError, Result};

/// Abstraction over the host's string key-value store (browser local storage, files, ...).
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LedgerError::Persistence("memory store lock poisoned".into()))?;
        Ok(entries.keys().cloned().collect())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LedgerError::Persistence("memory store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| LedgerError::Persistence("memory store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

pub use json_backend::JsonFileStore;
pub use persistence::{
    LoadOutcome, PersistenceAdapter, CUSTOM_CATEGORIES_KEY, CUSTOM_GIG_TYPES_KEY,
    TRANSACTIONS_KEY,
};
