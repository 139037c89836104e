//! Domain types: tiers, itineraries and calculator configuration

pub mod itinerary;
pub mod options;
pub mod tier;

pub use itinerary::{ActivitySlot, CityStop, DayPlan, Itinerary, LocationPlan, SlotCategory};
pub use options::{CalculatorConfig, CostOptions, WalkMode};
pub use tier::{AttractionTier, CarChoice, CarClass, DestinationTier, PriceTier, TravelStyle};
