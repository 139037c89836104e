//! Budget amounts mentioned in free text
//!
//! Recognises `$1,500`, `$2k`, `1500 dollars`, `3k USD`, `budget of 2000`.
//! The earliest mention in the text wins.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const NUMBER: &str = r"(?P<num>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)";

static BUDGET_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Dollar sign: $1,500 / $ 800.50 / $2k
        format!(r"\$\s?{NUMBER}(?P<k>[kK]\b)?"),
        // Trailing currency word: 1500 dollars / 3k USD / 200 bucks
        format!(r"(?i)\b{NUMBER}\s*(?P<k>k\b)?\s*(?:usd|dollars?|bucks)\b"),
        // Budget phrase: budget of 2000 / budget is around $1.2k / budget: 900
        format!(r"(?i)\bbudget\s*(?:of|is|:|around|about|under)?\s*(?:around|about)?\s*\$?\s?{NUMBER}(?P<k>k\b)?"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("budget pattern must compile"))
    .collect()
});

/// Find the first budget amount mentioned in `text`
///
/// Returns `None` when no pattern matches.
///
/// # Example
/// ```
/// use travel_budget_core::extract_budget_from_text;
///
/// assert_eq!(extract_budget_from_text("We have about $2,500 for the week"), Some(2500.0));
/// assert_eq!(extract_budget_from_text("no numbers here"), None);
/// ```
pub fn extract_budget_from_text(text: &str) -> Option<f64> {
    let earliest = BUDGET_PATTERNS
        .iter()
        .filter_map(|re| re.captures(text))
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            Some((start, amount_from(&caps)?))
        })
        .min_by_key(|(start, _)| *start);

    match earliest {
        Some((_, amount)) => {
            tracing::debug!(amount, "extracted budget from text");
            Some(amount)
        }
        None => {
            tracing::debug!("no budget amount found in text");
            None
        }
    }
}

fn amount_from(caps: &Captures<'_>) -> Option<f64> {
    let digits = caps.name("num")?.as_str().replace(',', "");
    let mut amount: f64 = digits.parse().ok()?;
    if caps.name("k").is_some() {
        amount *= 1000.0;
    }
    amount.is_finite().then_some(amount)
}
