//! Numeric rating classification.

use revlens_core::{Polarity, RatingThresholds, Review, Theme};

/// Classify one 0–10 rating. Intervals are closed: a value exactly at
/// the high threshold is positive, exactly at the low threshold is
/// negative. Non-finite values carry no signal.
pub fn classify_rating(value: f64, thresholds: &RatingThresholds) -> Option<Polarity> {
    if !value.is_finite() {
        return None;
    }
    if value >= thresholds.high {
        Some(Polarity::Positive)
    } else if value <= thresholds.low {
        Some(Polarity::Negative)
    } else {
        Some(Polarity::Neutral)
    }
}

/// Verdicts for the four rating fields of a review. Absent fields are
/// skipped.
pub fn classify_ratings(review: &Review, thresholds: &RatingThresholds) -> Vec<(Theme, Polarity)> {
    let fields = [
        (review.work_life_balance, Theme::WorkLifeBalance),
        (review.career_growth, Theme::CareerGrowth),
        (review.leadership_management, Theme::Leadership),
        (review.innovation, Theme::Innovation),
    ];

    fields
        .into_iter()
        .filter_map(|(value, theme)| {
            let polarity = classify_rating(value?, thresholds)?;
            Some((theme, polarity))
        })
        .collect()
}
