//! Running spend ledgers kept during an itinerary walk

use serde::{Deserialize, Serialize};

/// Total spend plus the venues it went to, in visit order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendLedger {
    pub spend: f64,
    pub venues: Vec<String>,
}

impl SpendLedger {
    pub fn record(&mut self, venue: &str, amount: f64) {
        self.spend += amount;
        self.venues.push(venue.to_string());
    }

    pub fn visits(&self) -> usize {
        self.venues.len()
    }
}
