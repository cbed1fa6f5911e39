use thiserror::Error;

use crate::domain::transaction::TransactionId;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),
    #[error("There are no transactions to clear")]
    EmptyStore,
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Corrupt data under `{key}`: {reason}")]
    CorruptData { key: String, reason: String },
    #[error("Could not find an amount in `{0}`")]
    UnparsableAmount(String),
    #[error("Label `{0}` already exists")]
    LabelExists(String),
    #[error("Label not found: {0}")]
    LabelNotFound(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Persistence(err.to_string())
    }
}
