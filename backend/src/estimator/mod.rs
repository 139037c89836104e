//! Style- and city-based trip estimators
//!
//! - `daily`: per-day estimates (style × destination tier, or per city)
//! - `total`: single-destination trip breakdown
//! - `itinerary`: multi-city roll-up with per-day detail
//! - `adjust`: range check with a suggested correction
//! - `report`: plain-text rendering of an itinerary estimate

pub mod adjust;
pub mod daily;
pub mod itinerary;
pub mod report;
pub mod total;

pub use adjust::{suggest_budget_adjustments, BudgetSuggestion};
pub use daily::{estimate_daily_budget, BudgetEstimator, CategoryAmount, DailyBudget};
pub use itinerary::{
    estimate_itinerary_budget, CityEstimate, DayEstimate, ItineraryEstimate, MAX_ITINERARY_DAYS,
};
pub use report::generate_budget_report;
pub use total::{estimate_total_budget, TripEstimate};
