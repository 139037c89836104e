use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use travel_budget_core::{
    BudgetCalculator, CalculatorConfig, CostOptions, LocationPlan, RngManager, WalkMode,
};

/// Calculation request read from disk
#[derive(Debug, Deserialize)]
struct CalculationRequest {
    locations: Vec<LocationPlan>,
    total_days: u32,
    budget: f64,
    #[serde(default)]
    cost_options: CostOptions,
    #[serde(default)]
    config: CalculatorConfig,
    #[serde(default)]
    seed: Option<u64>,
}

pub fn execute(file: &Path, seed: Option<u64>, full: bool, json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let mut request: CalculationRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid calculation request in {}", file.display()))?;

    if full {
        request.config.walk_mode = WalkMode::FullItinerary;
    }

    let mut rng = match seed.or(request.seed) {
        Some(seed) => RngManager::new(seed),
        None => RngManager::from_clock(),
    };
    tracing::debug!(seed = rng.get_state(), "random source seeded");

    let calculator = BudgetCalculator::new(request.config);
    let outcome = calculator
        .calculate_detailed(
            &request.locations,
            request.total_days,
            request.budget,
            &request.cost_options,
            &mut rng,
        )
        .context("budget calculation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if request.cost_options.show_budget {
        println!("{}", outcome.formatted);
    }
    println!(
        "food: {} visit(s), {}",
        outcome.food.visits(),
        calculator.format_budget(outcome.food.spend)
    );
    println!(
        "attractions: {} visit(s), {}",
        outcome.attractions.visits(),
        calculator.format_budget(outcome.attractions.spend)
    );
    Ok(())
}
