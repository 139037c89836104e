//! Integration tests for the itinerary budget calculator
//!
//! ## Walk mode
//!
//! The planner's calculator returned after the first day of the first
//! location. `WalkMode::FirstDayOnly` (the default) reproduces that result;
//! `WalkMode::FullItinerary` walks every day of every location. Both are
//! pinned down here so neither drifts silently.

use travel_budget_core::{
    ActivitySlot, AttractionTier, BudgetCalculator, BudgetError, CalculatorConfig, CarChoice,
    CarClass, CostOptions, LocationPlan, PriceTable, RandomSource, RngManager, SlotCategory, WalkMode,
};

/// Replays a fixed list of indices
struct ScriptedSource {
    picks: Vec<usize>,
    calls: usize,
}

impl ScriptedSource {
    fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            calls: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.calls % self.picks.len()] % len;
        self.calls += 1;
        pick
    }
}

fn food() -> ActivitySlot {
    ActivitySlot::new(SlotCategory::Food, "Cafe")
}

fn hotel() -> ActivitySlot {
    ActivitySlot::new(SlotCategory::Accommodation, "Hotel")
}

fn transport(mode: &str) -> ActivitySlot {
    ActivitySlot::new(SlotCategory::Transport, mode)
}

fn two_city_trip() -> Vec<LocationPlan> {
    let tokyo = LocationPlan::new("Tokyo", 2)
        .with_day(vec![transport("flight"), hotel(), food()])
        .with_day(vec![
            hotel(),
            food(),
            ActivitySlot::new(SlotCategory::Attraction, "Shrine"),
        ])
        .with_day(vec![hotel(), food()])
        .with_day(vec![transport("train")]);
    let lisbon = LocationPlan::new("Lisbon", 2)
        .with_day(vec![transport("rental picks up").with_duration(3), hotel()])
        .with_day(vec![hotel(), food(), food()]);
    vec![tokyo, lisbon]
}

fn low_attractions() -> CostOptions {
    CostOptions {
        attraction: AttractionTier::Low,
        ..CostOptions::default()
    }
}

// ============================================================================
// Day 0 arithmetic
// ============================================================================

#[test]
fn test_single_food_slot_deducts_sixty() {
    let plan = LocationPlan::new("Lisbon", 2).with_day(vec![food()]);
    let calc = BudgetCalculator::default();
    let mut rng = RngManager::new(7);

    let result = calc
        .calculate(&[plan], 4, 1000.0, &CostOptions::default(), &mut rng)
        .unwrap();

    assert_eq!(result, "app940.00");
}

#[test]
fn test_discount_city_earns_ten_percent() {
    // total_days = 3 puts the discount day on day 0
    let plan = LocationPlan::new("Tokyo", 1).with_day(vec![food()]);
    let calc = BudgetCalculator::default();
    let mut rng = RngManager::new(7);

    let outcome = calc
        .calculate_detailed(&[plan], 3, 1000.0, &CostOptions::default(), &mut rng)
        .unwrap();

    assert_eq!(outcome.remaining_budget, 1067.0);
}

#[test]
fn test_coinciding_discount_and_vacation_day_pays_once() {
    // total_days = 2: both 2 / 4 and 2 / 3 are day 0
    let plan = LocationPlan::new("Tokyo", 1).with_day(vec![food()]);
    let calc = BudgetCalculator::default();
    let mut rng = RngManager::new(7);

    let outcome = calc
        .calculate_detailed(&[plan], 2, 1000.0, &CostOptions::default(), &mut rng)
        .unwrap();

    // 1000 - 30 = 970, one 10% bonus; a second bonus would give 1173.70
    assert_eq!(outcome.remaining_budget, 1067.0);
    assert_eq!(outcome.formatted, "app1067.00");
}

#[test]
fn test_other_city_earns_five_percent() {
    let plan = LocationPlan::new("Lisbon", 1).with_day(vec![food()]);
    let calc = BudgetCalculator::default();
    let mut rng = RngManager::new(7);

    let outcome = calc
        .calculate_detailed(&[plan], 3, 1000.0, &CostOptions::default(), &mut rng)
        .unwrap();

    assert_eq!(outcome.remaining_budget, 1018.5);
}

#[test]
fn test_floor_top_up_per_person() {
    // 200 - 60 = 140; 140 / 4 days = 35 < 100, so add (100 - 35) × 2
    let plan = LocationPlan::new("Lisbon", 2).with_day(vec![food()]);
    let calc = BudgetCalculator::default();
    let mut rng = RngManager::new(7);

    let result = calc
        .calculate(&[plan], 4, 200.0, &CostOptions::default(), &mut rng)
        .unwrap();

    assert_eq!(result, "app270.00");
}

#[test]
fn test_overspent_budget_stays_negative() {
    // 50 - 300 = -250; clamped to 0 only for the floor check, which adds 200
    let plan = LocationPlan::new("Lisbon", 2).with_day(vec![hotel()]);
    let calc = BudgetCalculator::default();
    let mut rng = RngManager::new(7);

    let result = calc
        .calculate(&[plan], 4, 50.0, &CostOptions::default(), &mut rng)
        .unwrap();

    assert_eq!(result, "app-50.00");
}

#[test]
fn test_custom_floor_and_prefix() {
    let config = CalculatorConfig {
        daily_floor: 0.0,
        currency_prefix: "USD ".to_string(),
        ..CalculatorConfig::default()
    };
    let plan = LocationPlan::new("Lisbon", 2).with_day(vec![hotel()]);
    let calc = BudgetCalculator::new(config);
    let mut rng = RngManager::new(7);

    let result = calc
        .calculate(&[plan], 4, 50.0, &CostOptions::default(), &mut rng)
        .unwrap();

    assert_eq!(result, "USD -250.00");
}

#[test]
fn test_custom_price_table_is_used() {
    let mut prices = PriceTable::default();
    prices.restaurant.medium = 45.0;
    let calc = BudgetCalculator::default().with_prices(prices).unwrap();
    let plan = LocationPlan::new("Lisbon", 2).with_day(vec![food()]);

    let outcome = calc
        .calculate_detailed(&[plan], 4, 1000.0, &CostOptions::default(), &mut RngManager::new(7))
        .unwrap();

    assert_eq!(outcome.remaining_budget, 910.0);
    assert_eq!(outcome.food.spend, 90.0);
}

#[test]
fn test_negative_price_table_rejected() {
    let mut prices = PriceTable::default();
    prices.restaurant.medium = -30.0;

    let result = BudgetCalculator::default().with_prices(prices);

    assert!(matches!(result, Err(BudgetError::InvalidInput(_))));
}

// ============================================================================
// Random tiers
// ============================================================================

#[test]
fn test_random_attraction_uses_injected_source() {
    let plan = LocationPlan::new("Lisbon", 2)
        .with_day(vec![ActivitySlot::new(SlotCategory::Attraction, "Museum")]);
    let options = CostOptions {
        attraction: AttractionTier::Random,
        ..CostOptions::default()
    };
    let calc = BudgetCalculator::default();
    let mut source = ScriptedSource::new(&[2]);

    let outcome = calc
        .calculate_detailed(&[plan], 4, 5000.0, &options, &mut source)
        .unwrap();

    // Price point 2 is 1000 per person
    assert_eq!(outcome.remaining_budget, 3000.0);
    assert_eq!(outcome.attractions.spend, 2000.0);
    assert_eq!(outcome.attractions.venues, vec!["Museum"]);
    assert_eq!(source.calls, 1);
}

#[test]
fn test_random_car_uses_injected_source() {
    let plan = LocationPlan::new("Lisbon", 1)
        .with_day(vec![transport("rental picks up").with_duration(2)]);
    let options = CostOptions {
        rental_car: CarChoice::Random,
        ..CostOptions::default()
    };
    let calc = BudgetCalculator::default();
    let mut source = ScriptedSource::new(&[3]);

    let outcome = calc
        .calculate_detailed(&[plan], 4, 1000.0, &options, &mut source)
        .unwrap();

    assert_eq!(CarClass::ALL[3], CarClass::LargeSuv);
    assert_eq!(outcome.remaining_budget, 820.0);
}

#[test]
fn test_fixed_tiers_never_draw() {
    let calc = BudgetCalculator::new(CalculatorConfig::full_itinerary());
    let mut source = ScriptedSource::new(&[0]);

    calc.calculate(&two_city_trip(), 4, 5000.0, &low_attractions(), &mut source)
        .unwrap();

    assert_eq!(source.calls, 0);
}

#[test]
fn test_same_seed_same_result() {
    let options = CostOptions {
        rental_car: CarChoice::Random,
        attraction: AttractionTier::Random,
        ..CostOptions::default()
    };
    let calc = BudgetCalculator::new(CalculatorConfig::full_itinerary());

    let first = calc
        .calculate(&two_city_trip(), 4, 5000.0, &options, &mut RngManager::new(99))
        .unwrap();
    let second = calc
        .calculate(&two_city_trip(), 4, 5000.0, &options, &mut RngManager::new(99))
        .unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Walk modes
// ============================================================================

#[test]
fn test_first_day_only_stops_after_day_zero() {
    let calc = BudgetCalculator::default();
    assert_eq!(calc.config().walk_mode, WalkMode::FirstDayOnly);

    let outcome = calc
        .calculate_detailed(&two_city_trip(), 4, 5000.0, &low_attractions(), &mut RngManager::new(1))
        .unwrap();

    // flight 300 + hotel 300 + food 60
    assert_eq!(outcome.remaining_budget, 4340.0);
    assert_eq!(outcome.days_walked, 1);
    assert_eq!(outcome.food.visits(), 1);
    assert!(outcome.attractions.venues.is_empty());
}

#[test]
fn test_full_itinerary_walks_every_day() {
    let calc = BudgetCalculator::new(CalculatorConfig::full_itinerary());

    let outcome = calc
        .calculate_detailed(&two_city_trip(), 4, 5000.0, &low_attractions(), &mut RngManager::new(1))
        .unwrap();

    // Two locations × four days, missing Lisbon days count as empty
    assert_eq!(outcome.days_walked, 8);
    assert_eq!(outcome.formatted, "app1987.65");
    assert_eq!(outcome.food.visits(), 5);
    assert_eq!(outcome.food.spend, 300.0);
    assert_eq!(outcome.attractions.spend, 1000.0);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_inputs() {
    let calc = BudgetCalculator::default();
    let options = CostOptions::default();
    let mut rng = RngManager::new(1);

    assert!(matches!(
        calc.calculate(&[], 4, 100.0, &options, &mut rng),
        Err(BudgetError::InvalidInput(_))
    ));
    assert!(matches!(
        calc.calculate(&two_city_trip(), 0, 100.0, &options, &mut rng),
        Err(BudgetError::InvalidInput(_))
    ));
}

#[test]
fn test_zero_length_rental_rejected() {
    let plan =
        LocationPlan::new("Lisbon", 1).with_day(vec![transport("rental picks up").with_duration(0)]);
    let calc = BudgetCalculator::default();

    let result = calc.calculate(&[plan], 4, 1000.0, &CostOptions::default(), &mut RngManager::new(1));

    assert!(matches!(result, Err(BudgetError::InvalidInput(_))));
}

#[test]
fn test_plan_from_planner_json() {
    let json = r#"[
        {
            "persons": 2,
            "city": "Paris",
            "detailed_plan": [[
                {"content_category_name": "accommodation", "content": "Hotel Lutetia", "already_slot": false},
                {"content_category_name": "food", "content": "Le Comptoir", "already_slot": true},
                {"content_category_name": "transport", "content": "bus", "already_slot": false}
            ]]
        }
    ]"#;
    let locations: Vec<LocationPlan> = serde_json::from_str(json).unwrap();
    let calc = BudgetCalculator::default();

    let outcome = calc
        .calculate_detailed(&locations, 5, 2000.0, &CostOptions::default(), &mut RngManager::new(1))
        .unwrap();

    // hotel 300 + bus 60; the food slot is already priced
    assert_eq!(outcome.remaining_budget, 1640.0);
    assert!(outcome.food.venues.is_empty());
}
