pub mod category;
pub mod common;
pub mod filter;
pub mod transaction;

pub use common::{Amounted, Displayable, Identifiable};
pub use filter::FilterSpec;
pub use transaction::{Transaction, TransactionChanges, TransactionDraft, TransactionId};
