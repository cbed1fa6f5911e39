//! Transient filter criteria used to derive a display view of the ledger.

use std::collections::BTreeSet;

use crate::domain::category::{BASE_CATEGORIES, BASE_GIG_TYPES};
use crate::errors::{LedgerError, Result};
use crate::ledger::CategoryRegistry;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    allowed_types: BTreeSet<String>,
    allowed_categories: BTreeSet<String>,
    min_amount: Option<f64>,
    max_amount: Option<f64>,
}

impl FilterSpec {
    /// Builds a validated spec. Bounds apply to the absolute amount.
    pub fn new<T, C>(
        allowed_types: T,
        allowed_categories: C,
        min_amount: Option<f64>,
        max_amount: Option<f64>,
    ) -> Result<Self>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        for bound in [min_amount, max_amount].into_iter().flatten() {
            if !bound.is_finite() || bound < 0.0 {
                return Err(LedgerError::Validation(format!(
                    "amount bound {bound} must be a non-negative number"
                )));
            }
        }
        if let (Some(min), Some(max)) = (min_amount, max_amount) {
            if min > max {
                return Err(LedgerError::Validation(
                    "Minimum amount cannot be greater than maximum amount.".into(),
                ));
            }
        }
        Ok(Self {
            allowed_types: allowed_types.into_iter().map(Into::into).collect(),
            allowed_categories: allowed_categories.into_iter().map(Into::into).collect(),
            min_amount,
            max_amount,
        })
    }

    /// Allows every label known to `registry`, custom ones included, with no bounds.
    pub fn for_registry(registry: &CategoryRegistry) -> Self {
        Self {
            allowed_types: registry.gig_types().map(str::to_string).collect(),
            allowed_categories: registry.categories().map(str::to_string).collect(),
            min_amount: None,
            max_amount: None,
        }
    }

    pub fn allows_type(&self, gig_type: &str) -> bool {
        self.allowed_types.contains(gig_type)
    }

    pub fn allows_category(&self, category: &str) -> bool {
        self.allowed_categories.contains(category)
    }

    pub fn allowed_types(&self) -> impl Iterator<Item = &str> {
        self.allowed_types.iter().map(String::as_str)
    }

    pub fn allowed_categories(&self) -> impl Iterator<Item = &str> {
        self.allowed_categories.iter().map(String::as_str)
    }

    pub fn min_amount(&self) -> Option<f64> {
        self.min_amount
    }

    pub fn max_amount(&self) -> Option<f64> {
        self.max_amount
    }

    /// Returns true when `magnitude` sits inside the configured bounds.
    pub fn within_bounds(&self, magnitude: f64) -> bool {
        self.min_amount.map_or(true, |min| magnitude >= min)
            && self.max_amount.map_or(true, |max| magnitude <= max)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            allowed_types: BASE_GIG_TYPES.iter().map(|s| s.to_string()).collect(),
            allowed_categories: BASE_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            min_amount: None,
            max_amount: None,
        }
    }
}
