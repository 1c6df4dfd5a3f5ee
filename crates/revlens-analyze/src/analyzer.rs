//! Per-review analysis: ratings + salary + text, composed into one
//! per-polarity theme verdict.

use std::sync::Arc;

use revlens_core::{AnalyzerConfig, PerReviewResult, Result, Review, Theme};
use revlens_sentiment::{LexiconScorer, SentimentScorer};
use tracing::debug;

use crate::catalog::ThemeCatalog;
use crate::rating::classify_ratings;
use crate::salary::classify_salary;
use crate::text::{extract_themes, FieldRole};

/// Turns one review into a per-polarity set of themes.
///
/// Pure: no field of the review can fail the analysis, and the same
/// review always yields the same result. The analyzer holds its
/// catalog, thresholds and scorer as immutable state so it can be
/// shared across parallel workers.
pub struct ReviewAnalyzer {
    config: AnalyzerConfig,
    catalog: ThemeCatalog,
    scorer: Arc<dyn SentimentScorer>,
}

impl ReviewAnalyzer {
    /// Analyzer with explicit configuration, catalog and scorer.
    pub fn new(
        config: AnalyzerConfig,
        catalog: ThemeCatalog,
        scorer: Arc<dyn SentimentScorer>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            scorer,
        })
    }

    /// Default deployment: flat catalog, built-in lexicon scorer,
    /// documented default thresholds.
    pub fn with_defaults() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            catalog: ThemeCatalog::flat(),
            scorer: Arc::new(LexiconScorer::new()),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one review.
    pub fn analyze(&self, review: &Review) -> PerReviewResult {
        let mut result = PerReviewResult::new();

        // Numeric ratings.
        for (theme, polarity) in classify_ratings(review, &self.config.rating) {
            result.insert(polarity, theme);
        }

        // Salary range. Presence triggers the classifier; a malformed
        // range still records compensation as neutral.
        if let Some(range) = &review.compensation_range {
            let polarity = classify_salary(range, review.location.as_deref(), &self.config.salary);
            result.insert(polarity, Theme::Compensation);
        }

        // Free-text fields with their forcing roles.
        let fields = [
            (review.headline.as_deref(), FieldRole::Headline),
            (review.pros.as_deref(), FieldRole::Pros),
            (review.cons.as_deref(), FieldRole::Cons),
        ];
        for (text, role) in fields {
            let Some(text) = text else { continue };
            for (theme, polarity) in extract_themes(
                text,
                role,
                &self.catalog,
                self.scorer.as_ref(),
                &self.config.sentiment,
            ) {
                result.insert(polarity, theme);
            }
        }

        result.finalize();
        debug!(
            "Review analyzed: {} positive, {} negative, {} neutral theme(s)",
            result.positive.len(),
            result.negative.len(),
            result.neutral.len()
        );
        result
    }
}
