//! Extensible gig-type and category label sets.

use tracing::debug;

use crate::domain::category::{BASE_CATEGORIES, BASE_GIG_TYPES};
use crate::errors::{LedgerError, Result};

/// One label set: fixed base labels plus user-defined ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    base: &'static [&'static str],
    custom: Vec<String>,
}

impl LabelSet {
    fn new(base: &'static [&'static str]) -> Self {
        Self {
            base,
            custom: Vec::new(),
        }
    }

    /// Builds a set from persisted custom labels, silently dropping blanks and duplicates.
    fn with_custom<I>(base: &'static [&'static str], labels: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut set = Self::new(base);
        for label in labels {
            if let Err(err) = set.add(&label) {
                debug!(label = %label, error = %err, "skipping persisted label");
            }
        }
        set
    }

    pub fn add(&mut self, label: &str) -> Result<&str> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::Validation("label cannot be empty".into()));
        }
        if self.contains_ignore_case(trimmed) {
            return Err(LedgerError::LabelExists(trimmed.to_string()));
        }
        self.custom.push(trimmed.to_string());
        Ok(&self.custom[self.custom.len() - 1])
    }

    pub fn remove(&mut self, label: &str) -> Result<String> {
        let normalized = normalize(label);
        if self.base.iter().any(|base| normalize(base) == normalized) {
            return Err(LedgerError::Validation(format!(
                "built-in label `{}` cannot be removed",
                label.trim()
            )));
        }
        let index = self
            .custom
            .iter()
            .position(|existing| normalize(existing) == normalized)
            .ok_or_else(|| LedgerError::LabelNotFound(label.trim().to_string()))?;
        Ok(self.custom.remove(index))
    }

    /// Exact-case membership, the same test the filter engine applies.
    pub fn contains(&self, label: &str) -> bool {
        self.iter().any(|existing| existing == label)
    }

    pub fn contains_ignore_case(&self, label: &str) -> bool {
        let normalized = normalize(label);
        self.iter().any(|existing| normalize(existing) == normalized)
    }

    /// Base labels first, then custom labels in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.base
            .iter()
            .copied()
            .chain(self.custom.iter().map(String::as_str))
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Known gig types and categories. Deleting a label never touches transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    gig_types: LabelSet,
    categories: LabelSet,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self {
            gig_types: LabelSet::new(&BASE_GIG_TYPES),
            categories: LabelSet::new(&BASE_CATEGORIES),
        }
    }

    pub fn from_custom(custom_gig_types: Vec<String>, custom_categories: Vec<String>) -> Self {
        Self {
            gig_types: LabelSet::with_custom(&BASE_GIG_TYPES, custom_gig_types),
            categories: LabelSet::with_custom(&BASE_CATEGORIES, custom_categories),
        }
    }

    pub fn add_gig_type(&mut self, label: &str) -> Result<&str> {
        self.gig_types.add(label)
    }

    pub fn remove_gig_type(&mut self, label: &str) -> Result<String> {
        self.gig_types.remove(label)
    }

    pub fn add_category(&mut self, label: &str) -> Result<&str> {
        self.categories.add(label)
    }

    pub fn remove_category(&mut self, label: &str) -> Result<String> {
        self.categories.remove(label)
    }

    pub fn gig_types(&self) -> impl Iterator<Item = &str> {
        self.gig_types.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter()
    }

    pub fn custom_gig_types(&self) -> &[String] {
        self.gig_types.custom()
    }

    pub fn custom_categories(&self) -> &[String] {
        self.categories.custom()
    }

    pub fn has_gig_type(&self, label: &str) -> bool {
        self.gig_types.contains(label)
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.contains(label)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
