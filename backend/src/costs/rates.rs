//! Itinerary price tables
//!
//! Per-unit prices used by the calculator. Hotel and restaurant prices are
//! per person; rental cars are per day; flight, train and bus are flat per
//! person; attractions are per person.

use crate::error::{BudgetError, BudgetResult};
use crate::models::tier::{AttractionTier, CarClass, PriceTier};
use serde::{Deserialize, Serialize};

/// Minimum budget per remaining day
pub const DAILY_FLOOR: f64 = 100.0;

/// Prefix of the formatted remaining budget
pub const CURRENCY_PREFIX: &str = "app";

/// Discount-day bonus in discount cities
pub const DISCOUNT_CITY_RATE: f64 = 0.10;

/// Discount-day bonus elsewhere
pub const STANDARD_DISCOUNT_RATE: f64 = 0.05;

/// Cities that earn the larger discount-day bonus
pub const DISCOUNT_CITIES: [&str; 10] = [
    "Toronto",
    "New York",
    "San Francisco",
    "Las Vegas",
    "Los Angeles",
    "Paris",
    "London",
    "Tokyo",
    "Seoul",
    "Singapore",
];

/// Price points a `random` attraction tier samples from
pub const ATTRACTION_PRICE_POINTS: [f64; 4] = [0.0, 500.0, 1000.0, 1500.0];

pub fn is_discount_city(city: &str) -> bool {
    DISCOUNT_CITIES.contains(&city)
}

/// Low/medium/high prices for one category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierPrices {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl TierPrices {
    pub fn get(&self, tier: PriceTier) -> f64 {
        match tier {
            PriceTier::Low => self.low,
            PriceTier::Medium => self.medium,
            PriceTier::High => self.high,
        }
    }
}

/// Daily rental price per car class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CarPrices {
    pub economy_car: f64,
    pub medium_car: f64,
    pub full_size_car: f64,
    pub standard_suv: f64,
    pub large_suv: f64,
}

impl CarPrices {
    pub fn get(&self, class: CarClass) -> f64 {
        match class {
            CarClass::EconomyCar => self.economy_car,
            CarClass::MediumCar => self.medium_car,
            CarClass::FullSizeCar => self.full_size_car,
            CarClass::StandardSuv => self.standard_suv,
            CarClass::LargeSuv => self.large_suv,
        }
    }
}

/// Full set of per-unit prices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTable {
    /// Per night per person
    pub hotel: TierPrices,

    /// Per meal per person
    pub restaurant: TierPrices,

    /// Per rental day
    pub rental_car: CarPrices,

    pub flight: f64,
    pub train: f64,
    pub bus: f64,

    /// Attraction prices indexed as free, low, medium, high
    pub attraction: [f64; 4],
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            hotel: TierPrices {
                low: 80.0,
                medium: 150.0,
                high: 300.0,
            },
            restaurant: TierPrices {
                low: 10.0,
                medium: 30.0,
                high: 60.0,
            },
            rental_car: CarPrices {
                economy_car: 25.0,
                medium_car: 35.0,
                full_size_car: 40.0,
                standard_suv: 60.0,
                large_suv: 90.0,
            },
            flight: 150.0,
            train: 100.0,
            bus: 30.0,
            attraction: ATTRACTION_PRICE_POINTS,
        }
    }
}

impl PriceTable {
    /// Fixed attraction price; `None` for the `random` tier
    pub fn attraction_price(&self, tier: AttractionTier) -> Option<f64> {
        match tier {
            AttractionTier::Free => Some(self.attraction[0]),
            AttractionTier::Low => Some(self.attraction[1]),
            AttractionTier::Medium => Some(self.attraction[2]),
            AttractionTier::High => Some(self.attraction[3]),
            AttractionTier::Random => None,
        }
    }

    /// Every price must be finite and non-negative
    pub fn validate(&self) -> BudgetResult<()> {
        let tiers = [PriceTier::Low, PriceTier::Medium, PriceTier::High];
        let mut entries: Vec<(String, f64)> = vec![
            ("flight".to_string(), self.flight),
            ("train".to_string(), self.train),
            ("bus".to_string(), self.bus),
        ];
        for tier in tiers {
            entries.push((format!("hotel.{tier}"), self.hotel.get(tier)));
            entries.push((format!("restaurant.{tier}"), self.restaurant.get(tier)));
        }
        for class in CarClass::ALL {
            entries.push((format!("rental_car.{class}"), self.rental_car.get(class)));
        }
        for (i, price) in self.attraction.iter().enumerate() {
            entries.push((format!("attraction[{i}]"), *price));
        }

        match entries.into_iter().find(|(_, p)| !p.is_finite() || *p < 0.0) {
            Some((name, price)) => Err(BudgetError::InvalidInput(format!(
                "price '{name}' must be finite and non-negative, got {price}"
            ))),
            None => Ok(()),
        }
    }
}
