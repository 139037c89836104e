//! Property tests for the estimator arithmetic and calculator output format

use proptest::prelude::*;
use regex::Regex;
use travel_budget_core::{
    estimate_daily_budget, estimate_total_budget, suggest_budget_adjustments, ActivitySlot,
    AttractionTier, BudgetCalculator, BudgetEstimator, BudgetSuggestion, CalculatorConfig,
    CarChoice, CostOptions, DestinationTier, LocationPlan, RngManager, SlotCategory, TravelStyle,
};

fn any_style() -> impl Strategy<Value = TravelStyle> {
    prop::sample::select(TravelStyle::ALL.to_vec())
}

fn any_tier() -> impl Strategy<Value = DestinationTier> {
    prop::sample::select(DestinationTier::ALL.to_vec())
}

fn slot() -> impl Strategy<Value = ActivitySlot> {
    prop_oneof![
        Just(ActivitySlot::new(SlotCategory::Accommodation, "Hotel")),
        Just(ActivitySlot::new(SlotCategory::Food, "Diner")),
        Just(ActivitySlot::new(SlotCategory::Attraction, "Tower")),
        Just(ActivitySlot::new(SlotCategory::Transport, "flight")),
        Just(ActivitySlot::new(SlotCategory::Transport, "train")),
        Just(ActivitySlot::new(SlotCategory::Transport, "bus")),
        (1u32..10).prop_map(|d| ActivitySlot::new(SlotCategory::Transport, "rental picks up")
            .with_duration(d)),
        Just(ActivitySlot::new(SlotCategory::Other, "Spa")),
    ]
}

fn location() -> impl Strategy<Value = LocationPlan> {
    (
        prop::sample::select(vec!["Tokyo", "Lisbon", "Paris", "Bangkok"]),
        1u32..6,
        prop::collection::vec(prop::collection::vec(slot(), 0..5), 0..8),
    )
        .prop_map(|(city, persons, days)| LocationPlan {
            persons,
            city: city.to_string(),
            detailed_plan: days,
        })
}

proptest! {
    #[test]
    fn daily_budget_is_pure(style in any_style(), tier in any_tier()) {
        prop_assert_eq!(estimate_daily_budget(style, tier), estimate_daily_budget(style, tier));
    }

    #[test]
    fn total_is_sum_of_components(
        days in 1u32..365,
        travelers in 1u32..20,
        style in any_style(),
        tier in any_tier()
    ) {
        let trip = estimate_total_budget(days, style, tier, travelers).unwrap();
        let sum = trip.accommodation_total
            + trip.meals_total
            + trip.transportation_total
            + trip.activities_estimate
            + trip.contingency;
        prop_assert_eq!(trip.total_estimate, sum);

        let base_total = trip.daily_budget * days as f64 * travelers as f64;
        prop_assert_eq!(trip.activities_estimate, base_total * 0.15);
        prop_assert_eq!(trip.contingency, base_total * 0.10);
    }

    #[test]
    fn total_is_linear_in_travelers(
        days in 1u32..365,
        travelers in 1u32..50,
        style in any_style(),
        tier in any_tier()
    ) {
        let single = estimate_total_budget(days, style, tier, travelers).unwrap();
        let double = estimate_total_budget(days, style, tier, travelers * 2).unwrap();
        prop_assert_eq!(double.total_estimate, 2.0 * single.total_estimate);
    }

    #[test]
    fn city_total_scales_per_person(
        style in any_style(),
        travelers in 1u32..12,
        city in prop::sample::select(vec!["Tokyo", "Paris", "Bangkok", "Nowhere"])
    ) {
        let day = BudgetEstimator::new(style).estimate_daily_budget(city, travelers).unwrap();
        let weights: f64 = day.categories.iter().map(|c| c.weight).sum();
        prop_assert!((weights - 1.0).abs() < 1e-9);
        prop_assert_eq!(day.total, day.per_person * travelers as f64);
    }

    #[test]
    fn suggestion_matches_range(
        current in -10_000.0f64..10_000.0,
        min in 0.0f64..5_000.0,
        width in 0.0f64..5_000.0
    ) {
        let max = min + width;
        match suggest_budget_adjustments(current, (min, max)).unwrap() {
            BudgetSuggestion::Increase { amount, .. } => {
                prop_assert!(current < min);
                prop_assert_eq!(amount, min - current);
            }
            BudgetSuggestion::Decrease { amount, .. } => {
                prop_assert!(current > max);
                prop_assert_eq!(amount, current - max);
            }
            BudgetSuggestion::Optimal { .. } => {
                prop_assert!(current >= min && current <= max);
            }
        }
    }

    #[test]
    fn calculator_output_has_prefix_and_two_decimals(
        locations in prop::collection::vec(location(), 1..4),
        total_days in 1u32..10,
        budget in -50_000.0f64..50_000.0,
        seed in any::<u64>(),
        full in any::<bool>()
    ) {
        let pattern = Regex::new(r"^app-?\d+\.\d{2}$").unwrap();
        let config = if full {
            CalculatorConfig::full_itinerary()
        } else {
            CalculatorConfig::default()
        };
        let options = CostOptions {
            rental_car: CarChoice::Random,
            attraction: AttractionTier::Random,
            ..CostOptions::default()
        };
        let calc = BudgetCalculator::new(config);
        let mut rng = RngManager::new(seed);

        let formatted = calc
            .calculate(&locations, total_days, budget, &options, &mut rng)
            .unwrap();
        prop_assert!(pattern.is_match(&formatted), "unexpected output {}", formatted);
    }

    #[test]
    fn first_day_only_never_walks_more_than_one_day(
        locations in prop::collection::vec(location(), 1..4),
        total_days in 1u32..10
    ) {
        let calc = BudgetCalculator::default();
        let outcome = calc
            .calculate_detailed(&locations, total_days, 1000.0, &CostOptions::default(), &mut RngManager::new(3))
            .unwrap();
        prop_assert_eq!(outcome.days_walked, 1);
    }
}
