//! Conversational entry: a short note becomes a saved transaction plus a chat reply.

pub mod rules;

use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::core::LedgerManager;
use crate::domain::{Amounted, Transaction};
use crate::errors::{LedgerError, Result};

pub use rules::{extract_amount, interpret};

/// Hint shown when no amount could be found in the message.
pub const AMOUNT_HINT: &str = "I couldn't understand the amount. Try saying 'Made $50 on Uber'.";

/// Outcome of a handled message.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub message: String,
    pub transaction: Transaction,
}

#[derive(Debug, Clone, Copy)]
pub struct Assistant {
    delay: Duration,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Assistant {
    pub fn from_config(config: &Config) -> Self {
        Self {
            delay: Duration::from_millis(config.assistant_delay_ms),
        }
    }

    /// Pause a front end may show before the reply; nothing here sleeps.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Interprets `text`, records the transaction through `manager` and builds the reply.
    pub fn handle(&self, manager: &mut LedgerManager, text: &str) -> Result<AssistantReply> {
        let draft = interpret(text, manager.today())?;
        let transaction = manager.create(draft)?;
        debug!(id = %transaction.id, "assistant logged transaction");
        Ok(AssistantReply {
            message: confirmation(&transaction),
            transaction,
        })
    }

    /// Chat text for a failed message.
    pub fn reply_for_error(err: &LedgerError) -> String {
        match err {
            LedgerError::UnparsableAmount(_) => AMOUNT_HINT.to_string(),
            other => other.to_string(),
        }
    }
}

fn confirmation(transaction: &Transaction) -> String {
    format!(
        "Got it! I logged a {} of ${} for {}.",
        transaction.category,
        transaction.magnitude(),
        transaction.gig_type
    )
}
