#![doc(test(attr(deny(warnings))))]

//! HustleHub keeps a gig worker's income and expense ledger: a persistent transaction
//! store, label registry, filtering and summary views for charts, and a keyword-driven
//! assistant that turns short notes into entries.

pub mod assistant;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::{LedgerManager, BootstrapReport, BootstrapSource};
pub use domain::{FilterSpec, Transaction, TransactionChanges, TransactionDraft, TransactionId};
pub use errors::{LedgerError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("HustleHub tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
