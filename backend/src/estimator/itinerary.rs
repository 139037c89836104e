//! Multi-city itinerary estimate with per-city and per-day breakdowns

use crate::error::{BudgetError, BudgetResult};
use crate::estimator::daily::BudgetEstimator;
use crate::models::itinerary::Itinerary;
use crate::models::tier::TravelStyle;
use serde::{Deserialize, Serialize};

/// Longest itinerary the estimator will break down day by day
pub const MAX_ITINERARY_DAYS: u32 = 3650;

/// Spend at one stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityEstimate {
    pub city: String,
    pub days: u32,
    /// Group spend per day in this city
    pub daily_total: f64,
    pub total: f64,
}

/// Spend on one trip day (0-indexed across the whole itinerary)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEstimate {
    pub day: u32,
    pub city: String,
    pub amount: f64,
}

/// Aggregate estimate for an itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryEstimate {
    pub style: TravelStyle,
    pub travelers: u32,
    pub total_days: u32,
    pub cities: Vec<CityEstimate>,
    pub daily: Vec<DayEstimate>,
    pub total: f64,
    pub average_daily: f64,
}

/// Estimate every stop of an itinerary and roll them up
///
/// Stops are kept in travel order. A city visited twice appears twice.
pub fn estimate_itinerary_budget(itinerary: &Itinerary) -> BudgetResult<ItineraryEstimate> {
    if itinerary.stops.is_empty() {
        return Err(BudgetError::InvalidInput(
            "itinerary has no stops".to_string(),
        ));
    }
    if let Some(stop) = itinerary.stops.iter().find(|s| s.days == 0) {
        return Err(BudgetError::InvalidInput(format!(
            "stop '{}' must last at least 1 day",
            stop.city
        )));
    }

    let total_days = match itinerary.total_days() {
        Some(days) if days <= MAX_ITINERARY_DAYS => days,
        _ => {
            return Err(BudgetError::InvalidInput(format!(
                "itinerary is longer than {MAX_ITINERARY_DAYS} days"
            )))
        }
    };

    let estimator = BudgetEstimator::new(itinerary.style);
    let mut cities = Vec::with_capacity(itinerary.stops.len());
    let mut daily = Vec::with_capacity(total_days as usize);
    let mut day_index = 0u32;

    for stop in &itinerary.stops {
        let day_budget = estimator.estimate_daily_budget(&stop.city, itinerary.travelers)?;
        for _ in 0..stop.days {
            daily.push(DayEstimate {
                day: day_index,
                city: stop.city.clone(),
                amount: day_budget.total,
            });
            day_index += 1;
        }
        cities.push(CityEstimate {
            city: stop.city.clone(),
            days: stop.days,
            daily_total: day_budget.total,
            total: day_budget.total * stop.days as f64,
        });
    }

    let total: f64 = cities.iter().map(|c| c.total).sum();
    let average_daily = total / total_days as f64;

    tracing::debug!(
        stops = cities.len(),
        total_days,
        total,
        "estimated itinerary budget"
    );

    Ok(ItineraryEstimate {
        style: itinerary.style,
        travelers: itinerary.travelers,
        total_days,
        cities,
        daily,
        total,
        average_daily,
    })
}
