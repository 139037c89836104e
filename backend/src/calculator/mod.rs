//! Day-by-day itinerary budget calculator
//!
//! See `engine.rs` for the walk itself.

pub mod engine;
pub mod ledger;

pub use engine::{BudgetCalculator, CalculationOutcome};
pub use ledger::SpendLedger;
