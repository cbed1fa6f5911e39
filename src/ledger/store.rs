use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::transaction::{
    derive_amount, resolve_description, Transaction, TransactionChanges, TransactionDraft,
    TransactionId,
};
use crate::errors::{LedgerError, Result};

/// Authoritative in-memory collection of transactions for the current session.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps previously persisted records, repairing them like [`TransactionStore::restore`].
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self::restore(transactions).0
    }

    /// Rebuilds a store from persisted records. Records with a zero or non-finite amount are
    /// dropped and repeated ids are reassigned; each repair is returned as a warning.
    pub fn restore(transactions: Vec<Transaction>) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let (valid, invalid): (Vec<_>, Vec<_>) = transactions
            .into_iter()
            .partition(|txn| validate_amount(txn.amount).is_ok());
        for txn in &invalid {
            warnings.push(format!("dropped transaction {} with invalid amount", txn.id));
        }

        let mut store = Self::new();
        let mut seen = HashSet::with_capacity(valid.len());
        let mut duplicates = Vec::new();
        for txn in valid {
            if seen.insert(txn.id) {
                store.transactions.push(txn);
            } else {
                duplicates.push(txn);
            }
        }
        for mut txn in duplicates {
            let fresh = store.next_id(0);
            warnings.push(format!("reassigned duplicate transaction id {} to {}", txn.id, fresh));
            txn.id = fresh;
            store.transactions.push(txn);
        }

        for warning in &warnings {
            warn!(warning = %warning, "repaired stored transactions");
        }
        (store, warnings)
    }

    /// Validates `draft`, assigns it a fresh id and appends it.
    pub fn create(&mut self, draft: TransactionDraft) -> Result<&Transaction> {
        validate_amount(draft.amount)?;
        validate_label("type", &draft.gig_type)?;
        validate_label("category", &draft.category)?;

        let amount = derive_amount(&draft.category, draft.amount);
        let description =
            resolve_description(draft.description.as_deref(), &draft.category, &draft.gig_type);
        let id = self.next_id(Utc::now().timestamp_millis());
        let transaction = Transaction::new(
            id,
            draft.date,
            draft.gig_type,
            draft.category,
            amount,
            description,
        );
        debug!(transaction = %transaction.display_label(), "transaction created");
        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Merges `changes` into the record identified by `id`.
    pub fn update(
        &mut self,
        id: TransactionId,
        changes: TransactionChanges,
    ) -> Result<&Transaction> {
        if let Some(amount) = changes.amount {
            validate_amount(amount)?;
        }
        if let Some(gig_type) = changes.gig_type.as_deref() {
            validate_label("type", gig_type)?;
        }
        if let Some(category) = changes.category.as_deref() {
            validate_label("category", category)?;
        }
        let index = self.position(id).ok_or(LedgerError::NotFound(id))?;
        let txn = &mut self.transactions[index];

        let recompute_sign = changes.category.is_some() && changes.amount.is_some();
        if let Some(date) = changes.date {
            txn.date = date;
        }
        if let Some(gig_type) = changes.gig_type {
            txn.gig_type = gig_type;
        }
        if let Some(category) = changes.category {
            txn.category = category;
        }
        if let Some(amount) = changes.amount {
            txn.amount = if recompute_sign {
                derive_amount(&txn.category, amount)
            } else {
                amount
            };
        }
        if let Some(description) = changes.description {
            txn.description =
                resolve_description(Some(description.as_str()), &txn.category, &txn.gig_type);
        }
        debug!(id = %id, "transaction updated");
        Ok(&self.transactions[index])
    }

    /// Removes the record identified by `id`, returning it.
    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction> {
        let index = self.position(id).ok_or(LedgerError::NotFound(id))?;
        debug!(id = %id, "transaction deleted");
        Ok(self.transactions.remove(index))
    }

    /// Empties the store, returning how many records were dropped.
    pub fn clear(&mut self) -> Result<usize> {
        if self.transactions.is_empty() {
            return Err(LedgerError::EmptyStore);
        }
        let removed = self.transactions.len();
        self.transactions.clear();
        debug!(removed, "transactions cleared");
        Ok(removed)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Records newest first, the order the transaction table shows them in.
    pub fn sorted_by_date_desc(&self) -> Vec<&Transaction> {
        let mut rows: Vec<&Transaction> = self.transactions.iter().collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|txn| txn.id() == id)
    }

    /// Timestamp-derived id, bumped past the current maximum on collision.
    fn next_id(&self, stamp_millis: i64) -> TransactionId {
        let max = self.transactions.iter().map(|txn| txn.id.0).max();
        match max {
            Some(max) if stamp_millis <= max => TransactionId(max + 1),
            _ => TransactionId(stamp_millis),
        }
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount == 0.0 {
        return Err(LedgerError::Validation("Please enter a valid amount".into()));
    }
    Ok(())
}

fn validate_label(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LedgerError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stored(id: i64, amount: f64) -> Transaction {
        Transaction::new(
            TransactionId(id),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "Uber",
            "Income",
            amount,
            "stored",
        )
    }

    #[test]
    fn restore_drops_zero_amounts_and_reassigns_repeated_ids() {
        let (mut store, warnings) =
            TransactionStore::restore(vec![stored(7, 5.0), stored(7, 0.0), stored(7, 9.0)]);
        assert_eq!(warnings.len(), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[1].id, TransactionId(8));
        assert_eq!(store.list()[1].amount, 9.0);

        store.delete(TransactionId(7)).unwrap();
        assert!(store.get(TransactionId(7)).is_none());
    }

    #[test]
    fn restore_keeps_clean_records_untouched() {
        let rows = vec![stored(1, 5.0), stored(2, -3.0)];
        let (store, warnings) = TransactionStore::restore(rows.clone());
        assert!(warnings.is_empty());
        assert_eq!(store.list(), rows.as_slice());
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn draft(category: &str, amount: f64) -> TransactionDraft {
        TransactionDraft::new(date(15), "DoorDash", category, amount)
    }

    #[test]
    fn create_rejects_zero_amount_and_leaves_store_unchanged() {
        let mut store = TransactionStore::new();
        store.create(draft("Income", 10.0)).unwrap();
        let err = store.create(draft("Income", 0.0)).expect_err("zero must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_rejects_non_finite_amount() {
        let mut store = TransactionStore::new();
        assert!(store.create(draft("Income", f64::NAN)).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn create_fills_default_description() {
        let mut store = TransactionStore::new();
        let txn = store.create(draft("Fees", 3.0)).unwrap();
        assert_eq!(txn.description, "Fees from DoorDash");
        assert_eq!(txn.amount, -3.0);
    }

    #[test]
    fn ids_stay_unique_within_the_same_millisecond() {
        let mut store = TransactionStore::new();
        let first = store.create(draft("Income", 1.0)).unwrap().id;
        let second = store.create(draft("Income", 2.0)).unwrap().id;
        let third = store.create(draft("Income", 3.0)).unwrap().id;
        assert!(first < second && second < third);
    }

    #[test]
    fn next_id_skips_past_loaded_records() {
        let store = TransactionStore::from_transactions(vec![Transaction::new(
            TransactionId(500),
            date(1),
            "Uber",
            "Income",
            5.0,
            "",
        )]);
        assert_eq!(store.next_id(100), TransactionId(501));
        assert_eq!(store.next_id(900), TransactionId(900));
    }

    #[test]
    fn update_recomputes_sign_only_when_category_and_amount_are_supplied() {
        let mut store = TransactionStore::new();
        let id = store.create(draft("Income", 40.0)).unwrap().id;

        let txn = store
            .update(id, TransactionChanges::default().category("Supplies").amount(15.0))
            .unwrap();
        assert_eq!(txn.amount, -15.0);

        let txn = store
            .update(id, TransactionChanges::default().amount(7.0))
            .unwrap();
        assert_eq!(txn.amount, 7.0);
        assert_eq!(txn.category, "Supplies");
    }

    #[test]
    fn update_keeps_id_and_untouched_fields() {
        let mut store = TransactionStore::new();
        let id = store
            .create(draft("Income", 40.0).with_description("Lunch rush"))
            .unwrap()
            .id;
        let txn = store
            .update(id, TransactionChanges::default().date(date(20)))
            .unwrap();
        assert_eq!(txn.id, id);
        assert_eq!(txn.date, date(20));
        assert_eq!(txn.description, "Lunch rush");
        assert_eq!(txn.amount, 40.0);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = TransactionStore::new();
        let err = store
            .update(TransactionId(42), TransactionChanges::default().amount(1.0))
            .expect_err("unknown id");
        assert!(matches!(err, LedgerError::NotFound(TransactionId(42))));
    }

    #[test]
    fn update_rejects_zero_amount_without_touching_record() {
        let mut store = TransactionStore::new();
        let id = store.create(draft("Income", 40.0)).unwrap().id;
        assert!(store
            .update(id, TransactionChanges::default().amount(0.0))
            .is_err());
        assert_eq!(store.get(id).unwrap().amount, 40.0);
    }

    #[test]
    fn delete_unknown_id_leaves_store_unchanged() {
        let mut store = TransactionStore::new();
        store.create(draft("Income", 40.0)).unwrap();
        let err = store.delete(TransactionId(-1)).expect_err("unknown id");
        assert!(matches!(err, LedgerError::NotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_on_empty_store_is_reported() {
        let mut store = TransactionStore::new();
        assert!(matches!(store.clear(), Err(LedgerError::EmptyStore)));
        store.create(draft("Income", 1.0)).unwrap();
        store.create(draft("Expense", 1.0)).unwrap();
        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn sorted_by_date_desc_puts_newest_first() {
        let mut store = TransactionStore::new();
        store
            .create(TransactionDraft::new(date(3), "Uber", "Income", 1.0))
            .unwrap();
        store
            .create(TransactionDraft::new(date(9), "Uber", "Income", 2.0))
            .unwrap();
        let dates: Vec<_> = store.sorted_by_date_desc().iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![date(9), date(3)]);
    }
}
