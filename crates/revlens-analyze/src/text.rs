//! Free-text theme extraction.
//!
//! Lowercases the text, scans it for catalog keywords by substring
//! containment, and resolves each match's polarity from the field role:
//! pros force positive, cons force negative, headlines keep the detected
//! overall sentiment (flat catalog) or the matched list's polarity
//! (per-polarity catalog).

use revlens_core::{Polarity, SentimentThresholds, Theme};
use revlens_sentiment::{classify_compound, SentimentScorer};
use tracing::{debug, warn};

use crate::catalog::{KeywordSet, ThemeCatalog};

/// Which review field a text came from. Decides polarity forcing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Headline,
    Pros,
    Cons,
}

/// Themes found in one text field, with their resolved polarity.
pub fn extract_themes<S: SentimentScorer + ?Sized>(
    text: &str,
    role: FieldRole,
    catalog: &ThemeCatalog,
    scorer: &S,
    thresholds: &SentimentThresholds,
) -> Vec<(Theme, Polarity)> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    // Overall polarity of the whole field. A scorer failure degrades
    // this one field to neutral; it never fails the review.
    let overall = match scorer.score(text) {
        Ok(compound) => classify_compound(compound, thresholds),
        Err(e) => {
            warn!("Sentiment scorer failed, treating field as neutral: {e}");
            Polarity::Neutral
        }
    };

    let text_lower = text.to_lowercase();
    let mut found = Vec::new();

    for (theme, keywords) in catalog.entries() {
        match keywords {
            KeywordSet::Flat(list) => {
                if contains_any(&text_lower, list) {
                    found.push((*theme, resolve_polarity(role, overall)));
                }
            }
            KeywordSet::PerPolarity {
                positive,
                negative,
                neutral,
            } => {
                for (matched, list) in [
                    (Polarity::Positive, positive),
                    (Polarity::Negative, negative),
                    (Polarity::Neutral, neutral),
                ] {
                    if contains_any(&text_lower, list) {
                        found.push((*theme, resolve_polarity(role, matched)));
                    }
                }
            }
        }
    }

    debug!(
        "Text field {:?}: overall={}, {} theme match(es)",
        role,
        overall,
        found.len()
    );
    found
}

/// Pros force positive, cons force negative, headlines keep the
/// detected (or matched-list) polarity.
fn resolve_polarity(role: FieldRole, detected: Polarity) -> Polarity {
    match role {
        FieldRole::Pros => Polarity::Positive,
        FieldRole::Cons => Polarity::Negative,
        FieldRole::Headline => detected,
    }
}

fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use revlens_core::{Error, Result};

    /// Scorer returning a fixed compound score.
    struct ConstScorer(f64);

    impl SentimentScorer for ConstScorer {
        fn score(&self, _text: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    /// Scorer that always fails, for the degradation policy.
    struct FailingScorer;

    impl SentimentScorer for FailingScorer {
        fn score(&self, _text: &str) -> Result<f64> {
            Err(Error::Scorer("scorer unavailable".to_string()))
        }
    }

    fn thresholds() -> SentimentThresholds {
        SentimentThresholds::default()
    }

    #[test]
    fn test_pros_force_positive() {
        let catalog = ThemeCatalog::flat();
        // Strongly negative score, but pros still force positive.
        let found = extract_themes(
            "terrible salary and benefits",
            FieldRole::Pros,
            &catalog,
            &ConstScorer(-0.9),
            &thresholds(),
        );
        assert!(found.contains(&(Theme::Compensation, Polarity::Positive)));
        assert!(found.iter().all(|(_, p)| *p == Polarity::Positive));
    }

    #[test]
    fn test_cons_force_negative() {
        let catalog = ThemeCatalog::flat();
        let found = extract_themes(
            "amazing salary though",
            FieldRole::Cons,
            &catalog,
            &ConstScorer(0.9),
            &thresholds(),
        );
        assert!(found.contains(&(Theme::Compensation, Polarity::Negative)));
    }

    #[test]
    fn test_headline_uses_detected_sentiment() {
        let catalog = ThemeCatalog::flat();
        let text = "management is changing";
        let positive = extract_themes(
            text,
            FieldRole::Headline,
            &catalog,
            &ConstScorer(0.6),
            &thresholds(),
        );
        assert!(positive.contains(&(Theme::Leadership, Polarity::Positive)));

        let negative = extract_themes(
            text,
            FieldRole::Headline,
            &catalog,
            &ConstScorer(-0.6),
            &thresholds(),
        );
        assert!(negative.contains(&(Theme::Leadership, Polarity::Negative)));
    }

    #[test]
    fn test_per_polarity_headline_keeps_buckets() {
        let catalog = ThemeCatalog::per_polarity();
        // "micromanaging" sits in leadership's negative list; the overall
        // score is positive but the bucket wins for headlines.
        let found = extract_themes(
            "micromanaging but well paid",
            FieldRole::Headline,
            &catalog,
            &ConstScorer(0.8),
            &thresholds(),
        );
        assert!(found.contains(&(Theme::Leadership, Polarity::Negative)));
    }

    #[test]
    fn test_per_polarity_cons_force_negative() {
        let catalog = ThemeCatalog::per_polarity();
        let found = extract_themes(
            "supportive on paper",
            FieldRole::Cons,
            &catalog,
            &ConstScorer(0.5),
            &thresholds(),
        );
        assert!(found.contains(&(Theme::WorkCulture, Polarity::Negative)));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = ThemeCatalog::flat();
        let found = extract_themes(
            "GREAT SALARY",
            FieldRole::Pros,
            &catalog,
            &ConstScorer(0.0),
            &thresholds(),
        );
        assert!(found.contains(&(Theme::Compensation, Polarity::Positive)));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let catalog = ThemeCatalog::flat();
        let found = extract_themes(
            "   ",
            FieldRole::Headline,
            &catalog,
            &ConstScorer(0.9),
            &thresholds(),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_scorer_failure_degrades_to_neutral() {
        let catalog = ThemeCatalog::flat();
        let found = extract_themes(
            "the management team",
            FieldRole::Headline,
            &catalog,
            &FailingScorer,
            &thresholds(),
        );
        // Themes still match; the detected polarity degrades to neutral.
        assert!(found.contains(&(Theme::Leadership, Polarity::Neutral)));
        // Forcing still applies even when the scorer is down.
        let found = extract_themes(
            "the management team",
            FieldRole::Pros,
            &catalog,
            &FailingScorer,
            &thresholds(),
        );
        assert!(found.contains(&(Theme::Leadership, Polarity::Positive)));
    }
}
