//! Derives filtered views of the ledger without touching the underlying store.

use crate::domain::{Amounted, FilterSpec, Transaction};

pub struct FilterService;

impl FilterService {
    /// Returns the transactions that pass every criterion of `spec`, in input order.
    pub fn apply<'a>(transactions: &'a [Transaction], spec: &FilterSpec) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| Self::matches(txn, spec))
            .collect()
    }

    /// Amount bounds compare against the absolute value so they treat income and expenses alike.
    pub fn matches(transaction: &Transaction, spec: &FilterSpec) -> bool {
        spec.allows_type(&transaction.gig_type)
            && spec.allows_category(&transaction.category)
            && spec.within_bounds(transaction.magnitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionId;
    use chrono::NaiveDate;

    fn txn(id: i64, gig_type: &str, category: &str, amount: f64) -> Transaction {
        Transaction::new(
            TransactionId(id),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            gig_type,
            category,
            amount,
            "",
        )
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            txn(1, "Uber", "Income", 68.5),
            txn(2, "Other", "Expense", -56.0),
            txn(3, "eBay", "Fees", -12.0),
            txn(4, "DoorDash", "Income", 37.2),
        ]
    }

    #[test]
    fn empty_type_set_yields_nothing() {
        let spec = FilterSpec::new(Vec::<String>::new(), ["Income", "Expense"], None, None).unwrap();
        assert!(FilterService::apply(&ledger(), &spec).is_empty());
    }

    #[test]
    fn empty_category_set_yields_nothing() {
        let spec = FilterSpec::new(["Uber"], Vec::<String>::new(), None, None).unwrap();
        assert!(FilterService::apply(&ledger(), &spec).is_empty());
    }

    #[test]
    fn bounds_apply_to_absolute_amounts() {
        let spec = FilterSpec::new(
            ["Uber", "Other", "eBay", "DoorDash"],
            ["Income", "Expense", "Fees"],
            Some(40.0),
            Some(60.0),
        )
        .unwrap();
        let ids: Vec<_> = FilterService::apply(&ledger(), &spec)
            .iter()
            .map(|t| t.id.0)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn default_spec_keeps_every_base_labelled_row() {
        let rows = ledger();
        assert_eq!(FilterService::apply(&rows, &FilterSpec::default()).len(), rows.len());
    }

    #[test]
    fn custom_labels_are_excluded_by_default_spec() {
        let rows = vec![txn(1, "Lyft", "Income", 10.0)];
        assert!(FilterService::apply(&rows, &FilterSpec::default()).is_empty());
    }
}
