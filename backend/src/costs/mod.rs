//! Static cost tables
//!
//! - `rates`: per-unit prices for the itinerary calculator
//! - `styles`: per-style daily base costs and destination multipliers

pub mod rates;
pub mod styles;

pub use rates::{is_discount_city, CarPrices, PriceTable, TierPrices, DISCOUNT_CITIES};
pub use styles::{
    category_weights, city_multiplier, destination_multiplier, style_costs, CategoryWeights,
    StyleCosts,
};
