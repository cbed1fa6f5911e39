use super::transaction::TransactionId;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> TransactionId;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Entities carrying a signed monetary amount.
pub trait Amounted {
    fn amount(&self) -> f64;

    fn is_income(&self) -> bool {
        self.amount() > 0.0
    }

    fn magnitude(&self) -> f64 {
        self.amount().abs()
    }
}
