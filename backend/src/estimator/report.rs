//! Plain-text budget report for an itinerary

use crate::error::{BudgetError, BudgetResult};
use crate::estimator::itinerary::{estimate_itinerary_budget, ItineraryEstimate};
use crate::models::itinerary::Itinerary;
use std::fmt::{self, Write};

/// Render a human-readable report of an itinerary's estimate
///
/// # Example
/// ```
/// use travel_budget_core::{generate_budget_report, Itinerary, TravelStyle};
///
/// let trip = Itinerary::new(TravelStyle::Moderate, 2).stop("Lisbon", 2);
/// let report = generate_budget_report(&trip).unwrap();
/// assert!(report.contains("Lisbon"));
/// assert!(report.contains("Total"));
/// ```
pub fn generate_budget_report(itinerary: &Itinerary) -> BudgetResult<String> {
    let estimate = estimate_itinerary_budget(itinerary)?;
    let mut out = String::new();
    render(&estimate, &mut out)
        .map_err(|e| BudgetError::InvalidInput(format!("failed to render report: {e}")))?;
    Ok(out)
}

fn render(estimate: &ItineraryEstimate, out: &mut String) -> fmt::Result {
    writeln!(out, "Travel Budget Report")?;
    writeln!(out, "====================")?;
    writeln!(
        out,
        "Style: {} | Travelers: {} | Days: {}",
        estimate.style, estimate.travelers, estimate.total_days
    )?;
    writeln!(out)?;

    writeln!(out, "By city:")?;
    for city in &estimate.cities {
        writeln!(
            out,
            "  {:<20} {:>3} day(s) x ${:>10.2} = ${:>12.2}",
            city.city, city.days, city.daily_total, city.total
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Daily breakdown:")?;
    for day in &estimate.daily {
        writeln!(out, "  Day {:>3}  {:<20} ${:>10.2}", day.day + 1, day.city, day.amount)?;
    }
    writeln!(out)?;

    writeln!(out, "Total:         ${:.2}", estimate.total)?;
    write!(out, "Average daily: ${:.2}", estimate.average_daily)
}
