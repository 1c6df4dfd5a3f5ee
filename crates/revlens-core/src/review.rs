//! Review records and per-review analysis results.

use serde::{Deserialize, Serialize};

use crate::theme::{Polarity, Theme};

/// One workplace review. Every field is optional: an absent or
/// malformed field degrades to "no signal", it never aborts analysis
/// of the rest of the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Short review title.
    pub headline: Option<String>,
    /// Free text describing what the reviewer liked.
    pub pros: Option<String>,
    /// Free text describing what the reviewer disliked.
    pub cons: Option<String>,
    /// Numeric ratings, domain 0–10.
    pub work_life_balance: Option<f64>,
    pub career_growth: Option<f64>,
    pub leadership_management: Option<f64>,
    pub innovation: Option<f64>,
    /// Salary range as `"<low>-<high>"`, digits after stripping.
    pub compensation_range: Option<String>,
    /// Currency code. Advisory only, not used in thresholding.
    pub currency: Option<String>,
    /// Location hint. A remote-work marker selects remote salary thresholds.
    pub location: Option<String>,
}

/// Per-review verdict: which themes a single review flagged, per polarity.
///
/// A theme appears at most once within a bucket. The same theme may
/// appear under two polarities when different fields disagree (pros
/// praising pay, cons complaining about it); the corpus-level dominance
/// rule resolves that at aggregation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerReviewResult {
    pub positive: Vec<Theme>,
    pub negative: Vec<Theme>,
    pub neutral: Vec<Theme>,
}

impl PerReviewResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a theme under a polarity. Duplicates are dropped by
    /// `finalize`.
    pub fn insert(&mut self, polarity: Polarity, theme: Theme) {
        self.bucket_mut(polarity).push(theme);
    }

    /// Themes recorded under one polarity.
    pub fn themes(&self, polarity: Polarity) -> &[Theme] {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
            Polarity::Neutral => &self.neutral,
        }
    }

    fn bucket_mut(&mut self, polarity: Polarity) -> &mut Vec<Theme> {
        match polarity {
            Polarity::Positive => &mut self.positive,
            Polarity::Negative => &mut self.negative,
            Polarity::Neutral => &mut self.neutral,
        }
    }

    /// Sort and deduplicate every bucket. Called once at the end of
    /// analysis so results are deterministic.
    pub fn finalize(&mut self) {
        for polarity in Polarity::ALL {
            let bucket = self.bucket_mut(polarity);
            bucket.sort();
            bucket.dedup();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty() && self.neutral.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_review_deserializes() {
        let review: Review =
            serde_json::from_str(r#"{"pros": "great team", "work_life_balance": 8}"#).unwrap();
        assert_eq!(review.pros.as_deref(), Some("great team"));
        assert_eq!(review.work_life_balance, Some(8.0));
        assert!(review.cons.is_none());
        assert!(review.compensation_range.is_none());
    }

    #[test]
    fn test_finalize_sorts_and_dedups() {
        let mut result = PerReviewResult::new();
        result.insert(Polarity::Positive, Theme::WorkCulture);
        result.insert(Polarity::Positive, Theme::Compensation);
        result.insert(Polarity::Positive, Theme::WorkCulture);
        result.finalize();
        assert_eq!(
            result.themes(Polarity::Positive),
            &[Theme::Compensation, Theme::WorkCulture]
        );
    }

    #[test]
    fn test_same_theme_under_two_polarities_is_kept() {
        let mut result = PerReviewResult::new();
        result.insert(Polarity::Positive, Theme::Compensation);
        result.insert(Polarity::Negative, Theme::Compensation);
        result.finalize();
        assert_eq!(result.themes(Polarity::Positive), &[Theme::Compensation]);
        assert_eq!(result.themes(Polarity::Negative), &[Theme::Compensation]);
    }
}
