//! Itinerary shapes consumed by the calculator and the itinerary estimator
//!
//! Field names on [`LocationPlan`] and [`ActivitySlot`] match the JSON
//! produced by the trip planner (`detailed_plan`, `content_category_name`,
//! `already_slot`), so plans deserialize without a translation layer.

use crate::models::tier::TravelStyle;
use serde::{Deserialize, Serialize};

/// Category of a planned activity slot
///
/// Unrecognised category names deserialize to [`SlotCategory::Other`] and
/// are never priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotCategory {
    Accommodation,
    Transport,
    Food,
    Attraction,
    #[serde(other)]
    Other,
}

/// One planned activity within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySlot {
    #[serde(rename = "content_category_name")]
    pub category: SlotCategory,

    /// Venue name, or the transport mode for `transport` slots
    /// (`"rental picks up"`, `"flight"`, `"train"`, `"bus"`)
    pub content: String,

    /// Already priced elsewhere; the calculator skips it
    #[serde(default)]
    pub already_slot: bool,

    /// Length in days, used by car rentals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl ActivitySlot {
    pub fn new(category: SlotCategory, content: impl Into<String>) -> Self {
        Self {
            category,
            content: content.into(),
            already_slot: false,
            duration: None,
        }
    }

    pub fn with_duration(mut self, days: u32) -> Self {
        self.duration = Some(days);
        self
    }

    pub fn already_priced(mut self) -> Self {
        self.already_slot = true;
        self
    }
}

/// Ordered activity slots for a single day
pub type DayPlan = Vec<ActivitySlot>;

/// Everything planned at one destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPlan {
    /// Number of travelers
    pub persons: u32,
    pub city: String,
    /// Day-indexed plans; day `i` is `detailed_plan[i]`
    #[serde(default)]
    pub detailed_plan: Vec<DayPlan>,
}

impl LocationPlan {
    pub fn new(city: impl Into<String>, persons: u32) -> Self {
        Self {
            persons,
            city: city.into(),
            detailed_plan: Vec::new(),
        }
    }

    pub fn with_day(mut self, slots: DayPlan) -> Self {
        self.detailed_plan.push(slots);
        self
    }

    /// Slots for `day`; days past the end of the plan have nothing scheduled
    pub fn day(&self, day: usize) -> &[ActivitySlot] {
        self.detailed_plan.get(day).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A city and the number of days spent there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityStop {
    pub city: String,
    pub days: u32,
}

/// Multi-city trip used by the itinerary estimator and the text report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub style: TravelStyle,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    pub stops: Vec<CityStop>,
}

fn default_travelers() -> u32 {
    1
}

impl Itinerary {
    pub fn new(style: TravelStyle, travelers: u32) -> Self {
        Self {
            style,
            travelers,
            stops: Vec::new(),
        }
    }

    pub fn stop(mut self, city: impl Into<String>, days: u32) -> Self {
        self.stops.push(CityStop {
            city: city.into(),
            days,
        });
        self
    }

    /// Sum of stop lengths; `None` if it does not fit in a `u32`
    pub fn total_days(&self) -> Option<u32> {
        self.stops
            .iter()
            .try_fold(0u32, |total, stop| total.checked_add(stop.days))
    }
}
