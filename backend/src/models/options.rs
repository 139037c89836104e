//! Calculator configuration
//!
//! [`CostOptions`] picks a price tier per category; [`CalculatorConfig`]
//! holds the walk mode and the fixed adjustment constants. Both deserialize
//! with defaults for any missing field.

use crate::costs::rates::{
    CURRENCY_PREFIX, DAILY_FLOOR, DISCOUNT_CITY_RATE, STANDARD_DISCOUNT_RATE,
};
use crate::models::tier::{AttractionTier, CarChoice, CarClass, PriceTier};
use serde::{Deserialize, Serialize};

/// Price tier selection per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostOptions {
    pub rental_car: CarChoice,
    pub hotel: PriceTier,
    pub restaurant: PriceTier,
    pub attraction: AttractionTier,
    /// Display flag for front ends; the arithmetic ignores it
    pub show_budget: bool,
}

impl Default for CostOptions {
    fn default() -> Self {
        Self {
            rental_car: CarChoice::Class(CarClass::MediumCar),
            hotel: PriceTier::Medium,
            restaurant: PriceTier::Medium,
            attraction: AttractionTier::Medium,
            show_budget: true,
        }
    }
}

/// How far the calculator walks the itinerary
///
/// The planner's calculator stopped after the first day of the first
/// location. `FirstDayOnly` keeps that result; `FullItinerary` walks every
/// day of every location and returns once at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkMode {
    #[default]
    FirstDayOnly,
    FullItinerary,
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub walk_mode: WalkMode,

    /// Minimum budget per remaining day before a top-up kicks in
    pub daily_floor: f64,

    /// Prefix placed before the two-decimal amount
    pub currency_prefix: String,

    /// Discount-day bonus for cities in the discount set (0.10 = 10%)
    pub discount_city_rate: f64,

    /// Discount-day bonus everywhere else
    pub standard_discount_rate: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            walk_mode: WalkMode::FirstDayOnly,
            daily_floor: DAILY_FLOOR,
            currency_prefix: CURRENCY_PREFIX.to_string(),
            discount_city_rate: DISCOUNT_CITY_RATE,
            standard_discount_rate: STANDARD_DISCOUNT_RATE,
        }
    }
}

impl CalculatorConfig {
    pub fn full_itinerary() -> Self {
        Self {
            walk_mode: WalkMode::FullItinerary,
            ..Self::default()
        }
    }
}
