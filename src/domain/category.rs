//! Built-in gig types and categories, plus the sign rules tied to them.

pub const DOORDASH: &str = "DoorDash";
pub const UBER: &str = "Uber";
pub const EBAY: &str = "eBay";
pub const FREELANCE: &str = "Freelance";
pub const OTHER: &str = "Other";

pub const INCOME: &str = "Income";
pub const EXPENSE: &str = "Expense";
pub const FEES: &str = "Fees";
pub const SUPPLIES: &str = "Supplies";
pub const TRANSPORTATION: &str = "Transportation";

/// Gig types every registry starts with.
pub const BASE_GIG_TYPES: [&str; 5] = [DOORDASH, UBER, EBAY, FREELANCE, OTHER];

/// Categories every registry starts with.
pub const BASE_CATEGORIES: [&str; 5] = [INCOME, EXPENSE, FEES, SUPPLIES, TRANSPORTATION];

/// Categories whose amounts are always stored as negative magnitudes.
pub const EXPENSE_CATEGORIES: [&str; 4] = [EXPENSE, FEES, SUPPLIES, TRANSPORTATION];

/// How a category constrains the sign of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
    /// Custom categories keep whatever sign the caller supplied.
    Unsigned,
}

impl CategoryKind {
    pub fn of(category: &str) -> Self {
        if category == INCOME {
            CategoryKind::Income
        } else if EXPENSE_CATEGORIES.contains(&category) {
            CategoryKind::Expense
        } else {
            CategoryKind::Unsigned
        }
    }

    /// Applies the sign rule for this kind to `amount`.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            CategoryKind::Income => amount.abs(),
            CategoryKind::Expense => -amount.abs(),
            CategoryKind::Unsigned => amount,
        }
    }
}

/// Returns `amount` with the sign implied by `category`.
pub fn signed_amount(category: &str, amount: f64) -> f64 {
    CategoryKind::of(category).signed(amount)
}
