//! Compare a budget against a target range

use crate::error::{BudgetError, BudgetResult};
use serde::{Deserialize, Serialize};

/// Suggested change to bring a budget into range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BudgetSuggestion {
    /// Below the range; raise by `amount`
    Increase { amount: f64, message: String },
    /// Above the range; cut by `amount`
    Decrease { amount: f64, message: String },
    /// Within the range (bounds inclusive)
    Optimal { message: String },
}

impl BudgetSuggestion {
    pub fn amount(&self) -> Option<f64> {
        match self {
            BudgetSuggestion::Increase { amount, .. } | BudgetSuggestion::Decrease { amount, .. } => {
                Some(*amount)
            }
            BudgetSuggestion::Optimal { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            BudgetSuggestion::Increase { message, .. }
            | BudgetSuggestion::Decrease { message, .. }
            | BudgetSuggestion::Optimal { message } => message,
        }
    }
}

/// Suggest how to move `current` into `[min, max]`
///
/// # Example
/// ```
/// use travel_budget_core::{suggest_budget_adjustments, BudgetSuggestion};
///
/// let suggestion = suggest_budget_adjustments(800.0, (1000.0, 2000.0)).unwrap();
/// assert!(matches!(suggestion, BudgetSuggestion::Increase { amount, .. } if amount == 200.0));
/// ```
pub fn suggest_budget_adjustments(current: f64, range: (f64, f64)) -> BudgetResult<BudgetSuggestion> {
    let (min, max) = range;
    if current.is_nan() {
        return Err(BudgetError::InvalidInput(
            "current budget is not a number".to_string(),
        ));
    }
    if min.is_nan() || max.is_nan() || min > max {
        return Err(BudgetError::InvalidInput(format!(
            "budget range is inverted: min {min} > max {max}"
        )));
    }

    let suggestion = if current < min {
        let amount = min - current;
        BudgetSuggestion::Increase {
            amount,
            message: format!("Increase budget by {amount:.2} to reach the minimum of {min:.2}"),
        }
    } else if current > max {
        let amount = current - max;
        BudgetSuggestion::Decrease {
            amount,
            message: format!("Reduce budget by {amount:.2} to stay under {max:.2}"),
        }
    } else {
        BudgetSuggestion::Optimal {
            message: "Budget is within the recommended range".to_string(),
        }
    };

    Ok(suggestion)
}
