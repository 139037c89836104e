//! Daily budget estimates
//!
//! Two flavours: the style × destination-tier formula, and a per-city
//! estimate split into weighted categories.

use crate::costs::styles::{category_weights, city_multiplier, destination_multiplier, style_costs};
use crate::error::{BudgetError, BudgetResult};
use crate::models::tier::{DestinationTier, TravelStyle};
use serde::{Deserialize, Serialize};

/// Per-person daily budget for a style at a destination tier
///
/// `(accommodation + meals + transportation) × destination multiplier`.
///
/// # Example
/// ```
/// use travel_budget_core::{estimate_daily_budget, DestinationTier, TravelStyle};
///
/// let daily = estimate_daily_budget(TravelStyle::Moderate, DestinationTier::Expensive);
/// assert_eq!(daily, 255.0); // 170 × 1.5
/// ```
pub fn estimate_daily_budget(style: TravelStyle, tier: DestinationTier) -> f64 {
    style_costs(style).daily_base() * destination_multiplier(tier)
}

/// One category's share of a daily budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub weight: f64,
    /// Group amount (all travelers)
    pub amount: f64,
}

/// Daily budget for a group in one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBudget {
    pub city: String,
    pub style: TravelStyle,
    pub travelers: u32,
    pub per_person: f64,
    pub total: f64,
    pub categories: Vec<CategoryAmount>,
}

/// City-aware estimator bound to a travel style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetEstimator {
    style: TravelStyle,
}

impl Default for BudgetEstimator {
    fn default() -> Self {
        Self::new(TravelStyle::Moderate)
    }
}

impl BudgetEstimator {
    pub fn new(style: TravelStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> TravelStyle {
        self.style
    }

    /// Per-person daily spend in `city`
    pub fn per_person_daily(&self, city: &str) -> f64 {
        style_costs(self.style).daily_base() * city_multiplier(city)
    }

    /// Daily budget for `travelers` people in `city`
    ///
    /// # Example
    /// ```
    /// use travel_budget_core::{BudgetEstimator, TravelStyle};
    ///
    /// let day = BudgetEstimator::new(TravelStyle::Moderate)
    ///     .estimate_daily_budget("Tokyo", 2)
    ///     .unwrap();
    /// assert_eq!(day.total, day.per_person * 2.0);
    /// ```
    pub fn estimate_daily_budget(&self, city: &str, travelers: u32) -> BudgetResult<DailyBudget> {
        if travelers == 0 {
            return Err(BudgetError::InvalidInput(
                "number of travelers must be at least 1".to_string(),
            ));
        }

        let per_person = self.per_person_daily(city);
        let total = per_person * travelers as f64;
        let categories = category_weights(self.style)
            .as_pairs()
            .iter()
            .map(|(name, weight)| CategoryAmount {
                category: name.to_string(),
                weight: *weight,
                amount: total * weight,
            })
            .collect();

        tracing::debug!(city, style = %self.style, travelers, per_person, "estimated daily budget");

        Ok(DailyBudget {
            city: city.to_string(),
            style: self.style,
            travelers,
            per_person,
            total,
            categories,
        })
    }
}
