//! Data preparation for the dashboard charts: period slicing, month paging and labels.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::summary_service::week_window;
use crate::domain::{Amounted, Transaction};
use crate::errors::{LedgerError, Result};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Time span selector for the income-by-type chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    Week,
    Month,
    #[default]
    All,
}

impl ChartPeriod {
    /// Earliest date kept for this period, or `None` when nothing is cut.
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            ChartPeriod::Week => today.checked_sub_days(Days::new(7)),
            ChartPeriod::Month => today.checked_sub_months(Months::new(1)),
            ChartPeriod::All => None,
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChartPeriod::Week => "week",
            ChartPeriod::Month => "month",
            ChartPeriod::All => "all",
        };
        f.write_str(label)
    }
}

/// Month shown by the day-of-month chart, paged with `next` / `previous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::Validation(format!("invalid month {month}")));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// e.g. `Jan 2025`.
    pub fn label(&self) -> String {
        format!("{} {}", month_abbreviation(self.month), self.year)
    }
}

pub struct ChartService;

impl ChartService {
    /// Transactions dated on or after the period's cutoff.
    pub fn filter_by_period<'a>(
        transactions: &'a [Transaction],
        period: ChartPeriod,
        today: NaiveDate,
    ) -> Vec<&'a Transaction> {
        let cutoff = period.cutoff(today);
        transactions
            .iter()
            .filter(|txn| cutoff.map_or(true, |start| txn.date >= start))
            .collect()
    }

    /// Income per gig type; expenses are left out entirely.
    pub fn income_by_type<'a, I>(transactions: I) -> BTreeMap<String, f64>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut sums = BTreeMap::new();
        for txn in transactions.into_iter().filter(|txn| txn.is_income()) {
            *sums.entry(txn.gig_type.clone()).or_insert(0.0) += txn.amount;
        }
        sums
    }

    /// Labels matching `SummaryService::weekly_series`, oldest first, e.g. `Jan 22-28`.
    pub fn weekly_labels(num_weeks: usize, as_of: NaiveDate) -> Vec<String> {
        (0..num_weeks)
            .rev()
            .map(|weeks_back| {
                let (start, end) = week_window(as_of, weeks_back);
                format!(
                    "{} {}-{}",
                    month_abbreviation(start.month()),
                    start.day(),
                    end.day()
                )
            })
            .collect()
    }
}

fn month_abbreviation(month: u32) -> &'static str {
    MONTH_ABBREVIATIONS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("???")
}
