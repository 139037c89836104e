use anyhow::{Context, Result};
use std::path::Path;
use travel_budget_core::{
    estimate_daily_budget, estimate_itinerary_budget, estimate_total_budget,
    extract_budget_from_text, generate_budget_report, suggest_budget_adjustments,
    BudgetEstimator, DestinationTier, Itinerary, TravelStyle,
};

pub fn daily(
    style: TravelStyle,
    tier: DestinationTier,
    city: Option<&str>,
    travelers: u32,
) -> Result<()> {
    match city {
        Some(city) => {
            let day = BudgetEstimator::new(style).estimate_daily_budget(city, travelers)?;
            println!(
                "{} ({}, {} traveler(s)): ${:.2}/person, ${:.2}/day",
                day.city, day.style, day.travelers, day.per_person, day.total
            );
            for category in &day.categories {
                println!(
                    "  {:<15} {:>5.1}%  ${:.2}",
                    category.category,
                    category.weight * 100.0,
                    category.amount
                );
            }
        }
        None => {
            let per_person = estimate_daily_budget(style, tier);
            println!("{style} / {tier}: ${:.2}/person/day", per_person);
            if travelers > 1 {
                println!("{travelers} travelers: ${:.2}/day", per_person * travelers as f64);
            }
        }
    }
    Ok(())
}

pub fn total(
    days: u32,
    style: TravelStyle,
    tier: DestinationTier,
    travelers: u32,
    json: bool,
) -> Result<()> {
    let trip = estimate_total_budget(days, style, tier, travelers)?.rounded();

    if json {
        println!("{}", serde_json::to_string_pretty(&trip)?);
        return Ok(());
    }

    println!("{days} day(s), {style} / {tier}, {travelers} traveler(s)");
    println!("  Daily budget:    ${:.2}", trip.daily_budget);
    println!("  Accommodation:   ${:.2}", trip.accommodation_total);
    println!("  Meals:           ${:.2}", trip.meals_total);
    println!("  Transportation:  ${:.2}", trip.transportation_total);
    println!("  Activities:      ${:.2}", trip.activities_estimate);
    println!("  Contingency:     ${:.2}", trip.contingency);
    println!("  Total:           ${:.2} {}", trip.total_estimate, trip.currency);
    Ok(())
}

pub fn itinerary(file: &Path) -> Result<()> {
    let trip = load_itinerary(file)?;
    let estimate = estimate_itinerary_budget(&trip)?;
    println!("{}", serde_json::to_string_pretty(&estimate)?);
    Ok(())
}

pub fn report(file: &Path) -> Result<()> {
    let trip = load_itinerary(file)?;
    println!("{}", generate_budget_report(&trip)?);
    Ok(())
}

pub fn suggest(current: f64, min: f64, max: f64) -> Result<()> {
    let suggestion = suggest_budget_adjustments(current, (min, max))?;
    println!("{}", suggestion.message());
    Ok(())
}

pub fn extract(text: &str) -> Result<()> {
    match extract_budget_from_text(text) {
        Some(amount) => println!("{amount:.2}"),
        None => println!("no budget amount found"),
    }
    Ok(())
}

fn load_itinerary(file: &Path) -> Result<Itinerary> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid itinerary in {}", file.display()))
}
