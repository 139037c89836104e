//! Travel Budget Core
//!
//! Trip budget estimation and day-by-day itinerary budgeting.
//!
//! # Architecture
//!
//! - **costs**: Static price tables, style base costs, city multipliers
//! - **models**: Domain types (tiers, itineraries, calculator options)
//! - **estimator**: Style/destination estimates, itinerary roll-ups, reports
//! - **calculator**: Itinerary walk with discount days and a daily floor
//! - **extract**: Budget amounts mentioned in free text
//! - **rng**: Deterministic random source for `random` tiers
//!
//! # Invariants
//!
//! 1. Tier names outside the fixed enumerations are errors, never defaults
//! 2. All randomness goes through an injected [`RandomSource`]
//! 3. The itinerary budget may go negative; it is never clamped eagerly

pub mod calculator;
pub mod costs;
pub mod error;
pub mod estimator;
pub mod extract;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use calculator::{BudgetCalculator, CalculationOutcome, SpendLedger};
pub use costs::PriceTable;
pub use error::{BudgetError, BudgetResult};
pub use estimator::{
    estimate_daily_budget, estimate_itinerary_budget, estimate_total_budget,
    generate_budget_report, suggest_budget_adjustments, BudgetEstimator, BudgetSuggestion,
    DailyBudget, ItineraryEstimate, TripEstimate,
};
pub use extract::extract_budget_from_text;
pub use models::{
    ActivitySlot, AttractionTier, CalculatorConfig, CarChoice, CarClass, CityStop, CostOptions,
    DestinationTier, Itinerary, LocationPlan, PriceTier, SlotCategory, TravelStyle, WalkMode,
};
pub use rng::{RandomSource, RngManager};
