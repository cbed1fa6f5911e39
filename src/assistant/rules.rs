//! Ordered keyword rules that turn a free-text note into a transaction draft.
//!
//! Rules run top to bottom and later rules overwrite earlier ones, so a phrase like
//! "sold my bike on a delivery run" ends up as an eBay income entry. Keep the order.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::category::{
    DOORDASH, EBAY, EXPENSE, FEES, FREELANCE, INCOME, OTHER, TRANSPORTATION, UBER,
};
use crate::domain::TransactionDraft;
use crate::errors::{LedgerError, Result};

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?([0-9]+(\.[0-9]{1,2})?)").expect("amount pattern compiles"));

/// What a matching classification rule writes into the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Type(&'static str),
    TypeAndCategory(&'static str, &'static str),
    Category(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    keywords: &'static [&'static str],
    effect: Effect,
}

impl Rule {
    fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|keyword| lower.contains(keyword))
    }
}

const CLASSIFICATION_RULES: &[Rule] = &[
    Rule {
        keywords: &["uber", "drive"],
        effect: Effect::Type(UBER),
    },
    Rule {
        keywords: &["dash", "delivery"],
        effect: Effect::Type(DOORDASH),
    },
    Rule {
        keywords: &["ebay", "sold"],
        effect: Effect::TypeAndCategory(EBAY, INCOME),
    },
    Rule {
        keywords: &["freelance", "project"],
        effect: Effect::TypeAndCategory(FREELANCE, INCOME),
    },
    Rule {
        keywords: &["made", "earned", "sold"],
        effect: Effect::Category(INCOME),
    },
];

/// Words that force an entry to be treated as money going out.
const EXPENSE_KEYWORDS: &[&str] = &["spent", "gas", "fees", "paid"];

/// Refinements of an expense; the first match wins.
const EXPENSE_REFINEMENTS: &[(&str, &str, Option<&str>)] = &[
    ("gas", TRANSPORTATION, Some("Gas")),
    ("fees", FEES, None),
];

/// Parses `text` into a draft dated `today`.
pub fn interpret(text: &str, today: NaiveDate) -> Result<TransactionDraft> {
    let original = text.trim();
    if original.is_empty() {
        return Err(LedgerError::Validation("message is empty".into()));
    }
    let lower = original.to_lowercase();

    let mut gig_type = OTHER;
    let mut category = EXPENSE;
    for rule in CLASSIFICATION_RULES.iter().filter(|rule| rule.matches(&lower)) {
        match rule.effect {
            Effect::Type(label) => gig_type = label,
            Effect::TypeAndCategory(label, kind) => {
                gig_type = label;
                category = kind;
            }
            Effect::Category(kind) => category = kind,
        }
    }

    let magnitude = extract_amount(original)?;
    let mut description = original.to_string();

    let amount = if category == EXPENSE || contains_any(&lower, EXPENSE_KEYWORDS) {
        category = EXPENSE;
        if let Some((_, refined, label)) = EXPENSE_REFINEMENTS
            .iter()
            .find(|(keyword, _, _)| lower.contains(keyword))
        {
            category = *refined;
            if let Some(label) = label {
                description = (*label).to_string();
            }
        }
        -magnitude.abs()
    } else {
        category = INCOME;
        magnitude.abs()
    };

    Ok(TransactionDraft::new(today, gig_type, category, amount).with_description(description))
}

/// First ASCII number in `text`, optionally prefixed with `$`, with at most two decimals.
pub fn extract_amount(text: &str) -> Result<f64> {
    AMOUNT_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| LedgerError::UnparsableAmount(text.to_string()))
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 22).unwrap()
    }

    #[test]
    fn made_on_uber_is_income() {
        let draft = interpret("Made $50 on Uber", today()).unwrap();
        assert_eq!(draft.gig_type, "Uber");
        assert_eq!(draft.category, "Income");
        assert_eq!(draft.amount, 50.0);
        assert_eq!(draft.description.as_deref(), Some("Made $50 on Uber"));
        assert_eq!(draft.date, today());
    }

    #[test]
    fn spent_on_gas_is_transportation() {
        let draft = interpret("Spent $20 on gas", today()).unwrap();
        assert_eq!(draft.gig_type, "Other");
        assert_eq!(draft.category, "Transportation");
        assert_eq!(draft.amount, -20.0);
        assert_eq!(draft.description.as_deref(), Some("Gas"));
    }

    #[test]
    fn missing_number_is_unparsable() {
        assert!(matches!(
            interpret("no numbers here", today()),
            Err(LedgerError::UnparsableAmount(_))
        ));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(matches!(
            interpret("   ", today()),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn later_type_rules_override_earlier_ones() {
        let draft = interpret("drive for delivery earned 30", today()).unwrap();
        assert_eq!(draft.gig_type, "DoorDash");
        assert_eq!(draft.category, "Income");

        let draft = interpret("Sold a lamp after my uber shift for $15.5", today()).unwrap();
        assert_eq!(draft.gig_type, "eBay");
        assert_eq!(draft.amount, 15.5);
    }

    #[test]
    fn expense_keywords_override_income_classification() {
        let draft = interpret("Paid $4.99 ebay fees", today()).unwrap();
        assert_eq!(draft.gig_type, "eBay");
        assert_eq!(draft.category, "Fees");
        assert_eq!(draft.amount, -4.99);
        assert_eq!(draft.description.as_deref(), Some("Paid $4.99 ebay fees"));
    }

    #[test]
    fn gas_wins_over_fees() {
        let draft = interpret("gas station fees 12", today()).unwrap();
        assert_eq!(draft.category, "Transportation");
        assert_eq!(draft.description.as_deref(), Some("Gas"));
    }

    #[test]
    fn unclassified_text_defaults_to_other_expense() {
        let draft = interpret("phone bill 45", today()).unwrap();
        assert_eq!(draft.gig_type, "Other");
        assert_eq!(draft.category, "Expense");
        assert_eq!(draft.amount, -45.0);
    }

    #[test]
    fn amount_takes_first_number_and_two_decimals() {
        assert_eq!(extract_amount("got $12.345 then 9").unwrap(), 12.34);
        assert_eq!(extract_amount("7 rides, $80").unwrap(), 7.0);
    }

    #[test]
    fn non_ascii_digits_are_not_amounts() {
        let draft = interpret("Made \u{0665} tips then $50 on Uber", today()).unwrap();
        assert_eq!(draft.amount, 50.0);
        assert!(matches!(
            extract_amount("\u{0665}\u{0660}"),
            Err(LedgerError::UnparsableAmount(_))
        ));
    }
}
