#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use hustlehub::{
    config::ConfigManager,
    core::{FixedClock, LedgerManager},
    errors::{LedgerError, Result},
    storage::{JsonFileStore, KeyValueStore, MemoryStore},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// The date every test manager believes is today.
pub fn today() -> NaiveDate {
    date(2025, 2, 22)
}

/// Manager over an in-memory store; the returned handle shares its entries.
pub fn memory_manager() -> (LedgerManager, MemoryStore) {
    let storage = MemoryStore::new();
    let manager = LedgerManager::new(Box::new(storage.clone()), Box::new(FixedClock(today())));
    (manager, storage)
}

/// Creates isolated file-backed managers rooted in a unique directory for each test.
pub fn setup_test_env() -> (LedgerManager, ConfigManager, JsonFileStore) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonFileStore::new(base.join("data")).expect("create json store");
    let manager = LedgerManager::new(Box::new(storage.clone()), Box::new(FixedClock(today())));
    let config_manager = ConfigManager::with_base_dir(base).expect("create config manager");
    (manager, config_manager, storage)
}

/// Storage double that reads like an empty store and refuses every write.
#[derive(Debug, Default)]
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        Err(LedgerError::Persistence(format!("quota exceeded writing {key}")))
    }
}
