//! Salary range classification.
//!
//! Parsing is total: any malformed input classifies as neutral, never
//! an error. The location hint selects remote-adjusted thresholds.

use revlens_core::{Polarity, SalaryThresholds};

/// Classify a `"<low>-<high>"` salary range against the average-salary
/// thresholds. Comparison is strict: the average must exceed `high` to
/// be positive and fall below `low` to be negative.
pub fn classify_salary(
    range: &str,
    location: Option<&str>,
    thresholds: &SalaryThresholds,
) -> Polarity {
    let Some(average) = parse_average(range) else {
        return Polarity::Neutral;
    };

    let remote = location
        .map(|loc| loc.to_lowercase().contains(&thresholds.remote_marker.to_lowercase()))
        .unwrap_or(false);
    let (high, low) = if remote {
        (thresholds.remote_high, thresholds.remote_low)
    } else {
        (thresholds.high, thresholds.low)
    };

    if average > high {
        Polarity::Positive
    } else if average < low {
        Polarity::Negative
    } else {
        Polarity::Neutral
    }
}

/// Average of the two sides of the range, or `None` when the text does
/// not split into exactly two parseable sides.
fn parse_average(range: &str) -> Option<f64> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return None;
    }
    let low = parse_side(parts[0])?;
    let high = parse_side(parts[1])?;
    Some((low + high) / 2.0)
}

/// Strip non-digit characters and parse what remains.
fn parse_side(side: &str) -> Option<f64> {
    let digits: String = side.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
