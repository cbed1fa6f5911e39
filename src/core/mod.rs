pub mod ledger_manager;
pub mod services;
pub mod time;

pub use ledger_manager::{BootstrapReport, BootstrapSource, LedgerManager};
pub use time::{Clock, FixedClock, SystemClock};
