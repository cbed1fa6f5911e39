use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::KeyValueStore;
use crate::errors::Result;
use crate::utils::write_atomic;

const VALUE_EXTENSION: &str = "json";

/// Filesystem-backed key-value store: one JSON document per key inside `root`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn value_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), VALUE_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key);
        write_atomic(&path, value)?;
        debug!(key, path = %path.display(), bytes = value.len(), "value written");
        Ok(())
    }
}

/// Reversible file stem for `key`: lowercase ASCII letters, digits and `-` pass through,
/// every other byte becomes `_XX` (uppercase hex), so distinct keys never share a file.
fn canonical_key(key: &str) -> String {
    if key.is_empty() {
        return "_".into();
    }
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => encoded.push(char::from(byte)),
            _ => encoded.push_str(&format!("_{:02X}", byte)),
        }
    }
    encoded
}
