//! Price tiers and travel styles
//!
//! Every tier is a closed enumeration. Names are matched after trimming and
//! ASCII-lowercasing. Parsing a name outside the set fails with
//! [`BudgetError::UnknownTier`]; nothing falls back to a default tier.

use crate::error::BudgetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overall travel style used by the estimators
///
/// Accepts `budget`, `moderate` (aliases `mid-range`, `medium`) and
/// `luxury` (alias `high`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TravelStyle {
    Budget,
    Moderate,
    Luxury,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 3] = [TravelStyle::Budget, TravelStyle::Moderate, TravelStyle::Luxury];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Budget => "budget",
            TravelStyle::Moderate => "moderate",
            TravelStyle::Luxury => "luxury",
        }
    }
}

impl FromStr for TravelStyle {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(TravelStyle::Budget),
            "moderate" | "mid-range" | "midrange" | "medium" => Ok(TravelStyle::Moderate),
            "luxury" | "high" => Ok(TravelStyle::Luxury),
            _ => Err(BudgetError::unknown_tier("travel style", s)),
        }
    }
}

/// Relative cost-of-living bracket of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DestinationTier {
    Expensive,
    Moderate,
    Affordable,
}

impl DestinationTier {
    pub const ALL: [DestinationTier; 3] = [
        DestinationTier::Expensive,
        DestinationTier::Moderate,
        DestinationTier::Affordable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationTier::Expensive => "expensive",
            DestinationTier::Moderate => "moderate",
            DestinationTier::Affordable => "affordable",
        }
    }
}

impl FromStr for DestinationTier {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expensive" => Ok(DestinationTier::Expensive),
            "moderate" => Ok(DestinationTier::Moderate),
            "affordable" => Ok(DestinationTier::Affordable),
            _ => Err(BudgetError::unknown_tier("destination", s)),
        }
    }
}

/// Low/medium/high bracket for hotels and restaurants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PriceTier {
    Low,
    Medium,
    High,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Low => "low",
            PriceTier::Medium => "medium",
            PriceTier::High => "high",
        }
    }
}

impl FromStr for PriceTier {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(PriceTier::Low),
            "medium" => Ok(PriceTier::Medium),
            "high" => Ok(PriceTier::High),
            _ => Err(BudgetError::unknown_tier("price", s)),
        }
    }
}

/// Rental car classes, priced per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum CarClass {
    EconomyCar,
    MediumCar,
    FullSizeCar,
    StandardSuv,
    LargeSuv,
}

impl CarClass {
    /// Candidates for a `random` rental choice
    pub const ALL: [CarClass; 5] = [
        CarClass::EconomyCar,
        CarClass::MediumCar,
        CarClass::StandardSuv,
        CarClass::LargeSuv,
        CarClass::FullSizeCar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarClass::EconomyCar => "economy_car",
            CarClass::MediumCar => "medium_car",
            CarClass::FullSizeCar => "full_size_car",
            CarClass::StandardSuv => "standard_suv",
            CarClass::LargeSuv => "large_suv",
        }
    }
}

impl FromStr for CarClass {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy_car" => Ok(CarClass::EconomyCar),
            "medium_car" => Ok(CarClass::MediumCar),
            "full_size_car" => Ok(CarClass::FullSizeCar),
            "standard_suv" => Ok(CarClass::StandardSuv),
            "large_suv" => Ok(CarClass::LargeSuv),
            _ => Err(BudgetError::unknown_tier("rental car", s)),
        }
    }
}

/// Rental car selection: a fixed class or a uniform pick per rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CarChoice {
    Class(CarClass),
    Random,
}

impl FromStr for CarChoice {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(CarChoice::Random);
        }
        s.parse().map(CarChoice::Class)
    }
}

impl From<CarChoice> for String {
    fn from(choice: CarChoice) -> String {
        choice.to_string()
    }
}

/// Attraction pricing: flat brackets or a uniform pick among them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AttractionTier {
    Free,
    Low,
    Medium,
    High,
    Random,
}

impl AttractionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttractionTier::Free => "free",
            AttractionTier::Low => "low",
            AttractionTier::Medium => "medium",
            AttractionTier::High => "high",
            AttractionTier::Random => "random",
        }
    }
}

impl FromStr for AttractionTier {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(AttractionTier::Free),
            "low" => Ok(AttractionTier::Low),
            "medium" => Ok(AttractionTier::Medium),
            "high" => Ok(AttractionTier::High),
            "random" => Ok(AttractionTier::Random),
            _ => Err(BudgetError::unknown_tier("attraction", s)),
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = BudgetError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }
        )*
    };
}

string_conversions!(TravelStyle, DestinationTier, PriceTier, CarClass, CarChoice, AttractionTier);

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DestinationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CarChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarChoice::Class(class) => f.write_str(class.as_str()),
            CarChoice::Random => f.write_str("random"),
        }
    }
}

impl fmt::Display for AttractionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
