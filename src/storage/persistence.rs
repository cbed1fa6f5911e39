//! Maps the transaction store and label registry onto key-value storage.

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::KeyValueStore;
use crate::domain::Transaction;
use crate::errors::{LedgerError, Result};
use crate::ledger::CategoryRegistry;

pub const TRANSACTIONS_KEY: &str = "hustlehub-transactions";
pub const CUSTOM_GIG_TYPES_KEY: &str = "hustlehub-custom-gig-types";
pub const CUSTOM_CATEGORIES_KEY: &str = "hustlehub-custom-categories";

/// Result of reading the transaction list.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A list was stored, possibly empty.
    Loaded(Vec<Transaction>),
    /// Nothing usable was stored; `corruption` is set when a value existed but failed to parse.
    NoData { corruption: Option<LedgerError> },
}

impl LoadOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, LoadOutcome::NoData { .. })
    }

    pub fn corruption(&self) -> Option<&LedgerError> {
        match self {
            LoadOutcome::NoData { corruption } => corruption.as_ref(),
            LoadOutcome::Loaded(_) => None,
        }
    }

    pub fn into_transactions(self) -> Option<Vec<Transaction>> {
        match self {
            LoadOutcome::Loaded(transactions) => Some(transactions),
            LoadOutcome::NoData { .. } => None,
        }
    }
}

/// Reads and writes ledger state through a [`KeyValueStore`].
pub struct PersistenceAdapter {
    store: Box<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Overwrites the stored list. Failures are returned to the caller.
    pub fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string(transactions)?;
        self.store.set(TRANSACTIONS_KEY, &json)?;
        info!(count = transactions.len(), "transactions saved");
        Ok(())
    }

    /// Reads the stored list. Corrupt data degrades to [`LoadOutcome::NoData`].
    pub fn load(&self) -> Result<LoadOutcome> {
        let Some(raw) = self.store.get(TRANSACTIONS_KEY)? else {
            info!("no saved transactions");
            return Ok(LoadOutcome::NoData { corruption: None });
        };
        match parse::<Vec<Transaction>>(TRANSACTIONS_KEY, &raw) {
            Ok(transactions) => {
                info!(count = transactions.len(), "transactions loaded");
                Ok(LoadOutcome::Loaded(transactions))
            }
            Err(err) => {
                warn!(error = %err, "error loading saved data");
                Ok(LoadOutcome::NoData {
                    corruption: Some(err),
                })
            }
        }
    }

    /// Persists only the user-defined labels; base labels are implied.
    pub fn save_registry(&self, registry: &CategoryRegistry) -> Result<()> {
        let gig_types = serde_json::to_string(registry.custom_gig_types())?;
        let categories = serde_json::to_string(registry.custom_categories())?;
        self.store.set(CUSTOM_GIG_TYPES_KEY, &gig_types)?;
        self.store.set(CUSTOM_CATEGORIES_KEY, &categories)?;
        Ok(())
    }

    /// Reads custom labels; a missing or corrupt list falls back to the base labels only.
    pub fn load_registry(&self) -> Result<CategoryRegistry> {
        let gig_types = self.load_labels(CUSTOM_GIG_TYPES_KEY)?;
        let categories = self.load_labels(CUSTOM_CATEGORIES_KEY)?;
        Ok(CategoryRegistry::from_custom(gig_types, categories))
    }

    fn load_labels(&self, key: &str) -> Result<Vec<String>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        Ok(parse::<Vec<String>>(key, &raw).unwrap_or_else(|err| {
            warn!(error = %err, "custom labels unreadable, using defaults");
            Vec::new()
        }))
    }
}

fn parse<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|err| LedgerError::CorruptData {
        key: key.to_string(),
        reason: err.to_string(),
    })
}
