//! Whole-trip estimate for a single destination

use crate::costs::styles::{
    destination_multiplier, style_costs, ACTIVITIES_SHARE, CONTINGENCY_SHARE, CURRENCY,
};
use crate::error::{BudgetError, BudgetResult};
use crate::estimator::daily::estimate_daily_budget;
use crate::models::tier::{DestinationTier, TravelStyle};
use serde::{Deserialize, Serialize};

/// Cost breakdown for a trip
///
/// Amounts are kept unrounded so that `total_estimate` is exactly the sum
/// of the five components. Use [`TripEstimate::rounded`] for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEstimate {
    pub daily_budget: f64,
    pub accommodation_total: f64,
    pub meals_total: f64,
    pub transportation_total: f64,
    pub activities_estimate: f64,
    pub contingency: f64,
    pub total_estimate: f64,
    pub currency: String,
}

impl TripEstimate {
    /// Copy with every amount rounded to cents
    pub fn rounded(&self) -> Self {
        Self {
            daily_budget: round_cents(self.daily_budget),
            accommodation_total: round_cents(self.accommodation_total),
            meals_total: round_cents(self.meals_total),
            transportation_total: round_cents(self.transportation_total),
            activities_estimate: round_cents(self.activities_estimate),
            contingency: round_cents(self.contingency),
            total_estimate: round_cents(self.total_estimate),
            currency: self.currency.clone(),
        }
    }
}

pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Estimate a trip of `days` days for `travelers` people
///
/// `base_total = daily × days × travelers`; activities add 15% of the base
/// and contingency 10%.
///
/// # Example
/// ```
/// use travel_budget_core::{estimate_total_budget, DestinationTier, TravelStyle};
///
/// let trip = estimate_total_budget(5, TravelStyle::Budget, DestinationTier::Moderate, 2).unwrap();
/// assert_eq!(trip.daily_budget, 65.0);
/// assert_eq!(trip.total_estimate, 650.0 * 1.25);
/// ```
pub fn estimate_total_budget(
    days: u32,
    style: TravelStyle,
    tier: DestinationTier,
    travelers: u32,
) -> BudgetResult<TripEstimate> {
    if days == 0 {
        return Err(BudgetError::InvalidInput(
            "trip duration must be at least 1 day".to_string(),
        ));
    }
    if travelers == 0 {
        return Err(BudgetError::InvalidInput(
            "number of travelers must be at least 1".to_string(),
        ));
    }

    let daily = estimate_daily_budget(style, tier);
    let costs = style_costs(style);
    let multiplier = destination_multiplier(tier);
    let scale = |rate: f64| rate * multiplier * days as f64 * travelers as f64;

    let base_total = daily * days as f64 * travelers as f64;
    let accommodation_total = scale(costs.accommodation);
    let meals_total = scale(costs.meals);
    let transportation_total = scale(costs.transportation);
    let activities_estimate = base_total * ACTIVITIES_SHARE;
    let contingency = base_total * CONTINGENCY_SHARE;
    let total_estimate =
        accommodation_total + meals_total + transportation_total + activities_estimate + contingency;

    tracing::debug!(days, %style, %tier, travelers, total_estimate, "estimated trip budget");

    Ok(TripEstimate {
        daily_budget: daily,
        accommodation_total,
        meals_total,
        transportation_total,
        activities_estimate,
        contingency,
        total_estimate,
        currency: CURRENCY.to_string(),
    })
}
