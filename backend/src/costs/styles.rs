//! Travel-style base costs and destination multipliers
//!
//! Used by the estimators. Amounts are USD per person per day.

use crate::models::tier::{DestinationTier, TravelStyle};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Share of the base total reserved for activities
pub const ACTIVITIES_SHARE: f64 = 0.15;

/// Share of the base total held back as contingency
pub const CONTINGENCY_SHARE: f64 = 0.10;

pub const CURRENCY: &str = "USD";

/// Per-day base costs for one travel style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleCosts {
    pub accommodation: f64,
    pub meals: f64,
    pub transportation: f64,
}

impl StyleCosts {
    pub fn daily_base(&self) -> f64 {
        self.accommodation + self.meals + self.transportation
    }
}

pub fn style_costs(style: TravelStyle) -> StyleCosts {
    match style {
        TravelStyle::Budget => StyleCosts {
            accommodation: 30.0,
            meals: 20.0,
            transportation: 15.0,
        },
        TravelStyle::Moderate => StyleCosts {
            accommodation: 80.0,
            meals: 50.0,
            transportation: 40.0,
        },
        TravelStyle::Luxury => StyleCosts {
            accommodation: 200.0,
            meals: 120.0,
            transportation: 100.0,
        },
    }
}

pub fn destination_multiplier(tier: DestinationTier) -> f64 {
    match tier {
        DestinationTier::Expensive => 1.5,
        DestinationTier::Moderate => 1.0,
        DestinationTier::Affordable => 0.7,
    }
}

/// How a day's spend splits across categories, per style
///
/// Weights always sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    pub accommodation: f64,
    pub meals: f64,
    pub transportation: f64,
    pub activities: f64,
    pub miscellaneous: f64,
}

impl CategoryWeights {
    pub fn as_pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("accommodation", self.accommodation),
            ("meals", self.meals),
            ("transportation", self.transportation),
            ("activities", self.activities),
            ("miscellaneous", self.miscellaneous),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_pairs().iter().map(|(_, w)| w).sum()
    }
}

pub fn category_weights(style: TravelStyle) -> CategoryWeights {
    match style {
        TravelStyle::Budget => CategoryWeights {
            accommodation: 0.35,
            meals: 0.30,
            transportation: 0.15,
            activities: 0.15,
            miscellaneous: 0.05,
        },
        TravelStyle::Moderate => CategoryWeights {
            accommodation: 0.40,
            meals: 0.25,
            transportation: 0.15,
            activities: 0.15,
            miscellaneous: 0.05,
        },
        TravelStyle::Luxury => CategoryWeights {
            accommodation: 0.50,
            meals: 0.20,
            transportation: 0.10,
            activities: 0.15,
            miscellaneous: 0.05,
        },
    }
}

static CITY_MULTIPLIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("tokyo", 1.4),
        ("paris", 1.35),
        ("london", 1.5),
        ("new york", 1.6),
        ("san francisco", 1.5),
        ("singapore", 1.3),
        ("seoul", 1.1),
        ("toronto", 1.15),
        ("las vegas", 1.05),
        ("los angeles", 1.35),
        ("bangkok", 0.6),
        ("mexico city", 0.65),
        ("lisbon", 0.9),
        ("barcelona", 1.0),
    ])
});

/// Cost-of-living multiplier for a city; 1.0 for cities not in the table
pub fn city_multiplier(city: &str) -> f64 {
    CITY_MULTIPLIERS
        .get(city.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(1.0)
}
