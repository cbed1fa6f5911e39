use chrono::NaiveDate;

use crate::domain::transaction::{Transaction, TransactionId};

/// Demo records seeded on first run when nothing has been persisted yet.
pub fn sample_transactions() -> Vec<Transaction> {
    const ROWS: [(i64, (i32, u32, u32), &str, &str, f64, &str); 12] = [
        (1, (2025, 1, 15), "DoorDash", "Income", 45.20, "Lunch deliveries"),
        (2, (2025, 1, 16), "DoorDash", "Income", 37.20, "Dinner shift"),
        (3, (2025, 1, 18), "Uber", "Income", 68.50, "Airport trip"),
        (4, (2025, 1, 19), "Other", "Expense", -56.00, "Gas refill"),
        (5, (2025, 1, 20), "eBay", "Income", 100.50, "Sold vintage jacket"),
        (6, (2025, 1, 21), "eBay", "Fees", -12.00, "eBay seller fee"),
        (7, (2025, 2, 10), "DoorDash", "Income", 52.30, "Weekend deliveries"),
        (8, (2025, 2, 15), "Uber", "Income", 72.80, "Evening rides"),
        (9, (2025, 2, 20), "Freelance", "Income", 200.00, "Web design project"),
        (10, (2025, 2, 22), "Other", "Expense", -45.00, "Phone bill"),
        (11, (2024, 12, 5), "eBay", "Income", 85.00, "Sold old books"),
        (12, (2024, 12, 20), "Uber", "Income", 95.25, "Holiday trips"),
    ];

    ROWS.iter()
        .filter_map(|&(id, (y, m, d), gig_type, category, amount, description)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Transaction::new(
                TransactionId(id),
                date,
                gig_type,
                category,
                amount,
                description,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique_and_amounts_non_zero() {
        let rows = sample_transactions();
        assert_eq!(rows.len(), 12);
        let ids: HashSet<_> = rows.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), rows.len());
        assert!(rows.iter().all(|t| t.amount != 0.0));
    }
}
