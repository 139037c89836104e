//! Itinerary walk
//!
//! For each location, each day and each slot in order: price the slot and
//! deduct it, then apply the discount-day bonus and the daily floor top-up.
//! The running budget is allowed to go negative; it is only clamped at zero
//! when computing the per-day floor.

use crate::calculator::ledger::SpendLedger;
use crate::costs::rates::{is_discount_city, PriceTable};
use crate::error::{BudgetError, BudgetResult};
use crate::models::itinerary::{ActivitySlot, LocationPlan, SlotCategory};
use crate::models::options::{CalculatorConfig, CostOptions, WalkMode};
use crate::models::tier::{CarChoice, CarClass};
use crate::rng::{choose, RandomSource};
use serde::{Deserialize, Serialize};

/// Everything a calculation produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    pub remaining_budget: f64,
    /// `remaining_budget` with the currency prefix and two decimals
    pub formatted: String,
    pub food: SpendLedger,
    pub attractions: SpendLedger,
    /// Location-days processed before returning
    pub days_walked: u32,
}

/// Price of one slot, tagged by what it pays for
#[derive(Debug, Clone, Copy, PartialEq)]
enum SlotCharge {
    Lodging(f64),
    Transport(f64),
    Food(f64),
    Attraction(f64),
}

impl SlotCharge {
    fn amount(&self) -> f64 {
        match self {
            SlotCharge::Lodging(a)
            | SlotCharge::Transport(a)
            | SlotCharge::Food(a)
            | SlotCharge::Attraction(a) => *a,
        }
    }
}

/// Mutable state scoped to a single calculation
#[derive(Debug, Default)]
struct Walk {
    budget: f64,
    food: SpendLedger,
    attractions: SpendLedger,
    days_walked: u32,
}

/// Itinerary budget calculator
///
/// # Example
/// ```
/// use travel_budget_core::{
///     ActivitySlot, BudgetCalculator, CostOptions, LocationPlan, RngManager, SlotCategory,
/// };
///
/// let plan = LocationPlan::new("Lisbon", 2)
///     .with_day(vec![ActivitySlot::new(SlotCategory::Food, "Time Out Market")]);
///
/// let calculator = BudgetCalculator::default();
/// let mut rng = RngManager::new(42);
/// let remaining = calculator
///     .calculate(&[plan], 4, 1000.0, &CostOptions::default(), &mut rng)
///     .unwrap();
/// assert_eq!(remaining, "app940.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BudgetCalculator {
    config: CalculatorConfig,
    prices: PriceTable,
}

impl BudgetCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            prices: PriceTable::default(),
        }
    }

    /// Replace the default price table
    ///
    /// Rejects tables with negative or non-finite prices.
    pub fn with_prices(mut self, prices: PriceTable) -> BudgetResult<Self> {
        prices.validate()?;
        self.prices = prices;
        Ok(self)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Walk the itinerary and return the formatted remaining budget
    pub fn calculate<R: RandomSource + ?Sized>(
        &self,
        locations: &[LocationPlan],
        total_days: u32,
        starting_budget: f64,
        options: &CostOptions,
        rng: &mut R,
    ) -> BudgetResult<String> {
        self.calculate_detailed(locations, total_days, starting_budget, options, rng)
            .map(|outcome| outcome.formatted)
    }

    /// Walk the itinerary and return the budget together with the ledgers
    pub fn calculate_detailed<R: RandomSource + ?Sized>(
        &self,
        locations: &[LocationPlan],
        total_days: u32,
        starting_budget: f64,
        options: &CostOptions,
        rng: &mut R,
    ) -> BudgetResult<CalculationOutcome> {
        validate(locations, total_days, starting_budget)?;

        let mut walk = Walk {
            budget: starting_budget,
            ..Walk::default()
        };

        'locations: for location in locations {
            for day in 0..total_days {
                for slot in location.day(day as usize) {
                    if slot.already_slot {
                        continue;
                    }
                    if let Some(charge) = self.price_slot(slot, location.persons, options, rng)? {
                        walk.apply(slot, charge);
                    }
                }

                self.end_of_day(&mut walk, location, day, total_days);
                walk.days_walked += 1;

                if self.config.walk_mode == WalkMode::FirstDayOnly {
                    break 'locations;
                }
            }
        }

        let outcome = CalculationOutcome {
            remaining_budget: walk.budget,
            formatted: self.format_budget(walk.budget),
            food: walk.food,
            attractions: walk.attractions,
            days_walked: walk.days_walked,
        };

        tracing::info!(
            starting_budget,
            remaining = outcome.remaining_budget,
            days_walked = outcome.days_walked,
            walk_mode = ?self.config.walk_mode,
            "itinerary budget calculated"
        );

        Ok(outcome)
    }

    /// Render an amount the way `calculate` does
    pub fn format_budget(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_prefix, amount)
    }

    fn price_slot<R: RandomSource + ?Sized>(
        &self,
        slot: &ActivitySlot,
        persons: u32,
        options: &CostOptions,
        rng: &mut R,
    ) -> BudgetResult<Option<SlotCharge>> {
        let persons = persons as f64;

        let charge = match slot.category {
            SlotCategory::Accommodation => {
                Some(SlotCharge::Lodging(self.prices.hotel.get(options.hotel) * persons))
            }
            SlotCategory::Transport => match slot.content.as_str() {
                "rental picks up" => {
                    let days = rental_days(slot)?;
                    let class = match options.rental_car {
                        CarChoice::Class(class) => class,
                        CarChoice::Random => *choose(rng, &CarClass::ALL),
                    };
                    tracing::debug!(car = %class, days, "pricing rental car");
                    Some(SlotCharge::Transport(
                        self.prices.rental_car.get(class) * days as f64,
                    ))
                }
                "flight" => Some(SlotCharge::Transport(self.prices.flight * persons)),
                "train" => Some(SlotCharge::Transport(self.prices.train * persons)),
                "bus" => Some(SlotCharge::Transport(self.prices.bus * persons)),
                _ => None,
            },
            SlotCategory::Food => Some(SlotCharge::Food(
                self.prices.restaurant.get(options.restaurant) * persons,
            )),
            SlotCategory::Attraction => {
                let price = match self.prices.attraction_price(options.attraction) {
                    Some(price) => price,
                    None => *choose(rng, &self.prices.attraction),
                };
                Some(SlotCharge::Attraction(price * persons))
            }
            SlotCategory::Other => None,
        };

        if charge.is_none() {
            tracing::debug!(
                category = ?slot.category,
                content = %slot.content,
                "slot is not priced"
            );
        }

        Ok(charge)
    }

    fn end_of_day(&self, walk: &mut Walk, location: &LocationPlan, day: u32, total_days: u32) {
        let discount_day = total_days / 4;
        let vacation_day = total_days / 3;

        if day == discount_day || day == vacation_day {
            let rate = if is_discount_city(&location.city) {
                self.config.discount_city_rate
            } else {
                self.config.standard_discount_rate
            };
            let bonus = walk.budget * rate;
            walk.budget += bonus;
            tracing::debug!(city = %location.city, day, rate, bonus, "discount day applied");
        }

        let remaining_per_day = walk.budget.max(0.0) / (total_days - day) as f64;
        if remaining_per_day < self.config.daily_floor {
            let top_up = (self.config.daily_floor - remaining_per_day) * location.persons as f64;
            walk.budget += top_up;
            tracing::debug!(day, remaining_per_day, top_up, "daily floor top-up applied");
        }
    }
}

impl Walk {
    fn apply(&mut self, slot: &ActivitySlot, charge: SlotCharge) {
        let amount = charge.amount();
        self.budget -= amount;
        match charge {
            SlotCharge::Food(_) => self.food.record(&slot.content, amount),
            SlotCharge::Attraction(_) => self.attractions.record(&slot.content, amount),
            SlotCharge::Lodging(_) | SlotCharge::Transport(_) => {}
        }
        tracing::debug!(content = %slot.content, amount, budget = self.budget, "slot charged");
    }
}

fn rental_days(slot: &ActivitySlot) -> BudgetResult<u32> {
    match slot.duration {
        Some(days) if days > 0 => Ok(days),
        Some(_) => Err(BudgetError::InvalidInput(
            "rental duration must be at least 1 day".to_string(),
        )),
        None => Err(BudgetError::InvalidInput(
            "rental slot is missing its duration".to_string(),
        )),
    }
}

fn validate(locations: &[LocationPlan], total_days: u32, starting_budget: f64) -> BudgetResult<()> {
    if locations.is_empty() {
        return Err(BudgetError::InvalidInput(
            "itinerary has no locations".to_string(),
        ));
    }
    if total_days == 0 {
        return Err(BudgetError::InvalidInput(
            "total_days must be at least 1".to_string(),
        ));
    }
    if !starting_budget.is_finite() {
        return Err(BudgetError::InvalidInput(format!(
            "starting budget must be finite, got {starting_budget}"
        )));
    }
    if let Some(location) = locations.iter().find(|l| l.persons == 0) {
        return Err(BudgetError::InvalidInput(format!(
            "location '{}' has no travelers",
            location.city
        )));
    }
    Ok(())
}
