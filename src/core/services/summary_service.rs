//! Summary statistics over a transaction set. Inputs are never mutated.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::core::time::{days_in_month, in_month};
use crate::domain::{Amounted, Transaction};
use crate::errors::{LedgerError, Result};

/// Window used for the dashboard's weekly net.
pub const WEEKLY_WINDOW_DAYS: u32 = 7;
/// Window used for the dashboard's monthly net.
pub const MONTHLY_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    /// Absolute sum of negative amounts.
    pub expenses: f64,
}

impl Totals {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Per-day income and expense sums for one calendar month; index `i` is day `i + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    pub income: Vec<f64>,
    pub expenses: Vec<f64>,
}

impl DailySeries {
    pub fn days(&self) -> usize {
        self.income.len()
    }
}

/// Header figures shown above the transaction table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardSummary {
    pub income: f64,
    pub expenses: f64,
    pub weekly_net: f64,
    pub monthly_net: f64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals(transactions: &[Transaction]) -> Totals {
        transactions
            .iter()
            .fold(Totals::default(), |mut totals, txn| {
                if txn.is_income() {
                    totals.income += txn.amount;
                } else {
                    totals.expenses += txn.magnitude();
                }
                totals
            })
    }

    /// Signed sum over `[as_of - window_days, as_of]`, both ends inclusive.
    /// A window reaching past the earliest representable date is unbounded.
    pub fn rolling_net(transactions: &[Transaction], window_days: u32, as_of: NaiveDate) -> f64 {
        let start = days_before(as_of, u64::from(window_days));
        net_between(transactions, start, as_of)
    }

    /// Signed sum per gig type present in `transactions`.
    pub fn by_type(transactions: &[Transaction]) -> BTreeMap<String, f64> {
        let mut sums = BTreeMap::new();
        for txn in transactions {
            *sums.entry(txn.gig_type.clone()).or_insert(0.0) += txn.amount;
        }
        sums
    }

    pub fn by_day_of_month(
        transactions: &[Transaction],
        month: u32,
        year: i32,
    ) -> Result<DailySeries> {
        let days = days_in_month(year, month).ok_or_else(|| {
            LedgerError::Validation(format!("invalid month {month} for year {year}"))
        })? as usize;
        let mut series = DailySeries {
            income: vec![0.0; days],
            expenses: vec![0.0; days],
        };
        for txn in transactions.iter().filter(|t| in_month(t.date, year, month)) {
            let index = txn.date.day0() as usize;
            if txn.is_income() {
                series.income[index] += txn.amount;
            } else {
                series.expenses[index] += txn.magnitude();
            }
        }
        Ok(series)
    }

    /// Net per consecutive 7-day window; the last entry ends at `as_of`.
    pub fn weekly_series(
        transactions: &[Transaction],
        num_weeks: usize,
        as_of: NaiveDate,
    ) -> Vec<f64> {
        (0..num_weeks)
            .rev()
            .map(|weeks_back| {
                let (start, end) = week_window(as_of, weeks_back);
                net_between(transactions, start, end)
            })
            .collect()
    }

    pub fn dashboard(transactions: &[Transaction], today: NaiveDate) -> DashboardSummary {
        let totals = Self::totals(transactions);
        DashboardSummary {
            income: totals.income,
            expenses: totals.expenses,
            weekly_net: Self::rolling_net(transactions, WEEKLY_WINDOW_DAYS, today),
            monthly_net: Self::rolling_net(transactions, MONTHLY_WINDOW_DAYS, today),
        }
    }
}

/// Inclusive bounds of the window `weeks_back` weeks before the one ending at `as_of`.
/// Windows past the earliest representable date collapse onto `NaiveDate::MIN`.
pub(crate) fn week_window(as_of: NaiveDate, weeks_back: usize) -> (NaiveDate, NaiveDate) {
    let end = days_before(as_of, (weeks_back as u64).saturating_mul(7));
    (days_before(end, 6), end)
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

fn net_between(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.date >= start && txn.date <= end)
        .map(|txn| txn.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionId;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn txn(date: NaiveDate, gig_type: &str, amount: f64) -> Transaction {
        Transaction::new(TransactionId(0), date, gig_type, "Income", amount, "")
    }

    #[test]
    fn totals_split_income_and_expenses() {
        let rows = vec![txn(d(2025, 1, 1), "Uber", 45.20), txn(d(2025, 1, 2), "Uber", -12.00)];
        let totals = SummaryService::totals(&rows);
        assert_eq!(totals.income, 45.20);
        assert_eq!(totals.expenses, 12.00);
    }

    #[test]
    fn rolling_net_is_inclusive_on_both_ends() {
        let as_of = d(2025, 1, 31);
        let rows = vec![
            txn(d(2025, 1, 24), "Uber", 10.0),
            txn(d(2025, 1, 23), "Uber", 100.0),
            txn(as_of, "Uber", -4.0),
            txn(d(2025, 2, 1), "Uber", 1000.0),
        ];
        assert_eq!(SummaryService::rolling_net(&rows, 7, as_of), 6.0);
    }

    #[test]
    fn by_type_sums_signed_amounts() {
        let rows = vec![
            txn(d(2025, 1, 1), "eBay", 100.5),
            txn(d(2025, 1, 2), "eBay", -12.0),
            txn(d(2025, 1, 3), "Uber", 20.0),
        ];
        let sums = SummaryService::by_type(&rows);
        assert_eq!(sums.len(), 2);
        assert_eq!(sums["eBay"], 88.5);
        assert_eq!(sums["Uber"], 20.0);
    }

    #[test]
    fn by_day_of_month_rejects_invalid_month() {
        assert!(matches!(
            SummaryService::by_day_of_month(&[], 13, 2025),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn by_day_of_month_buckets_by_day_and_ignores_other_months() {
        let rows = vec![
            txn(d(2024, 2, 29), "Uber", 30.0),
            txn(d(2024, 2, 1), "Uber", -5.0),
            txn(d(2024, 3, 1), "Uber", 99.0),
        ];
        let series = SummaryService::by_day_of_month(&rows, 2, 2024).unwrap();
        assert_eq!(series.days(), 29);
        assert_eq!(series.income[28], 30.0);
        assert_eq!(series.expenses[0], 5.0);
        assert_eq!(series.income.iter().sum::<f64>(), 30.0);
    }

    #[test]
    fn weekly_series_is_oldest_first() {
        let as_of = d(2025, 1, 28);
        let rows = vec![
            txn(as_of, "Uber", 1.0),
            txn(d(2025, 1, 22), "Uber", 2.0),
            txn(d(2025, 1, 21), "Uber", 4.0),
            txn(d(2025, 1, 8), "Uber", 8.0),
        ];
        let series = SummaryService::weekly_series(&rows, 4, as_of);
        assert_eq!(series, vec![0.0, 8.0, 4.0, 3.0]);
    }

    #[test]
    fn weekly_series_with_zero_weeks_is_empty() {
        assert!(SummaryService::weekly_series(&[], 0, d(2025, 1, 1)).is_empty());
    }

    #[test]
    fn oversized_windows_saturate_instead_of_overflowing() {
        let as_of = d(2025, 2, 22);
        let rows = vec![txn(d(1, 1, 1), "Uber", 3.0), txn(as_of, "Uber", 2.0)];
        assert_eq!(SummaryService::rolling_net(&rows, u32::MAX, as_of), 5.0);
        assert_eq!(SummaryService::rolling_net(&[], u32::MAX, as_of), 0.0);

        assert_eq!(week_window(as_of, usize::MAX), (NaiveDate::MIN, NaiveDate::MIN));
    }

    #[test]
    fn weekly_series_near_the_earliest_date_does_not_panic() {
        let as_of = NaiveDate::MIN + Days::new(3);
        let rows = vec![txn(as_of, "Uber", 1.0)];
        let series = SummaryService::weekly_series(&rows, 3, as_of);
        assert_eq!(series.len(), 3);
        assert_eq!(series[2], 1.0);
    }

    #[test]
    fn dashboard_of_empty_ledger_is_zeroed() {
        assert_eq!(
            SummaryService::dashboard(&[], d(2025, 1, 1)),
            DashboardSummary::default()
        );
    }
}
