//! Stateful ledger collections: the transaction store and the label registry.

pub mod registry;
pub mod sample;
pub mod store;

pub use registry::{CategoryRegistry, LabelSet};
pub use sample::sample_transactions;
pub use store::TransactionStore;
