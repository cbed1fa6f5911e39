//! Domain models for ledger transactions and the drafts that produce them.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::category;
use crate::domain::common::{Amounted, Displayable, Identifiable};

/// Integer identifier of a stored transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub gig_type: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        gig_type: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            gig_type: gig_type.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> TransactionId {
        self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "txn:{} {} {} {} {:.2}",
            self.id, self.date, self.gig_type, self.category, self.amount
        )
    }
}

/// Unsaved candidate for [`TransactionStore::create`](crate::ledger::TransactionStore::create).
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub gig_type: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

impl TransactionDraft {
    pub fn new(
        date: NaiveDate,
        gig_type: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            gig_type: gig_type.into(),
            category: category.into(),
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update applied by `TransactionStore::update`. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionChanges {
    pub date: Option<NaiveDate>,
    pub gig_type: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl TransactionChanges {
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn gig_type(mut self, gig_type: impl Into<String>) -> Self {
        self.gig_type = Some(gig_type.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Description used when the caller leaves it blank.
pub fn default_description(category: &str, gig_type: &str) -> String {
    format!("{category} from {gig_type}")
}

/// Resolves an optional description, falling back to [`default_description`].
pub fn resolve_description(description: Option<&str>, category: &str, gig_type: &str) -> String {
    match description.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default_description(category, gig_type),
    }
}

/// Applies the category sign rule; kept here so drafts and updates agree.
pub(crate) fn derive_amount(category_label: &str, amount: f64) -> f64 {
    category::signed_amount(category_label, amount)
}
