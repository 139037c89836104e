//! Error types shared by the estimators and the itinerary calculator.

use thiserror::Error;

/// Errors that can occur while estimating or calculating a budget
#[derive(Debug, Error, PartialEq)]
pub enum BudgetError {
    /// A tier name outside the fixed enumeration for its category
    #[error("Unknown {kind} tier: '{value}'")]
    UnknownTier { kind: &'static str, value: String },

    /// Zero day counts, empty itineraries, inverted ranges and the like
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BudgetError {
    pub(crate) fn unknown_tier(kind: &'static str, value: &str) -> Self {
        BudgetError::UnknownTier {
            kind,
            value: value.to_string(),
        }
    }
}

pub type BudgetResult<T> = Result<T, BudgetError>;
