//! Summary generation: dominance rules, inclusion threshold, rendering.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use revlens_analyze::ReviewAnalyzer;
use revlens_core::{DominancePolicy, Polarity, Result, Review, SummaryConfig, Theme};

use crate::describe::render;
use crate::tally::CorpusTally;

/// One theme kept in the summary. The percentage is carried as a
/// first-class field; sorting compares it numerically and never
/// re-parses the rendered text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeMention {
    pub theme: Theme,
    pub text: String,
    pub percentage: f64,
}

/// Ranked corpus summary: per polarity, the themes whose dominant
/// verdict landed there, ordered by percentage descending with ties
/// broken by theme identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub positive: Vec<ThemeMention>,
    pub negative: Vec<ThemeMention>,
    pub neutral: Vec<ThemeMention>,
}

impl Summary {
    pub fn mentions(&self, polarity: Polarity) -> &[ThemeMention] {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
            Polarity::Neutral => &self.neutral,
        }
    }

    /// Rendered lines for one polarity, in rank order.
    pub fn rendered(&self, polarity: Polarity) -> Vec<&str> {
        self.mentions(polarity)
            .iter()
            .map(|m| m.text.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty() && self.neutral.is_empty()
    }
}

/// Dominant polarity and its reported percentage for one theme, under
/// the configured policy.
fn dominant_verdict(
    policy: DominancePolicy,
    pos_pct: f64,
    neg_pct: f64,
    neu_pct: f64,
) -> (Polarity, f64) {
    match policy {
        DominancePolicy::StrictMax { .. } => {
            // Fixed tie order: positive beats negative beats neutral.
            if pos_pct > 0.0 && pos_pct >= neg_pct && pos_pct >= neu_pct {
                (Polarity::Positive, pos_pct)
            } else if neg_pct > 0.0 && neg_pct >= neu_pct {
                (Polarity::Negative, neg_pct)
            } else {
                (Polarity::Neutral, neu_pct)
            }
        }
        DominancePolicy::MarginAware {
            min_dominant_pct,
            parity_margin,
            ..
        } => {
            if pos_pct.max(neg_pct) < min_dominant_pct || (pos_pct - neg_pct).abs() < parity_margin
            {
                (Polarity::Neutral, neu_pct + pos_pct.min(neg_pct))
            } else if pos_pct > neg_pct {
                (Polarity::Positive, pos_pct)
            } else {
                (Polarity::Negative, neg_pct)
            }
        }
    }
}

/// The corpus aggregator: analyzes every review, tallies the verdicts,
/// and renders the ranked summary.
pub struct SummaryBuilder {
    analyzer: ReviewAnalyzer,
    config: SummaryConfig,
}

impl SummaryBuilder {
    pub fn new(analyzer: ReviewAnalyzer, config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { analyzer, config })
    }

    /// Default deployment: default analyzer, strict-max dominance at a
    /// 20% inclusion threshold.
    pub fn with_defaults() -> Self {
        Self {
            analyzer: ReviewAnalyzer::with_defaults(),
            config: SummaryConfig::default(),
        }
    }

    pub fn analyzer(&self) -> &ReviewAnalyzer {
        &self.analyzer
    }

    /// Tally a corpus sequentially.
    pub fn tally(&self, reviews: &[Review]) -> CorpusTally {
        let mut tally = CorpusTally::new();
        for review in reviews {
            tally.record(&self.analyzer.analyze(review));
        }
        tally
    }

    /// Tally a corpus on parallel workers. Each worker accumulates its
    /// own partial tally; partials merge by a commutative reduction, so
    /// the result is identical to the sequential tally.
    pub fn tally_parallel(&self, reviews: &[Review]) -> CorpusTally {
        reviews
            .par_iter()
            .fold(CorpusTally::new, |mut tally, review| {
                tally.record(&self.analyzer.analyze(review));
                tally
            })
            .reduce(CorpusTally::new, |mut a, b| {
                a.merge(b);
                a
            })
    }

    /// Generate the ranked summary for a corpus.
    pub fn generate_summary(&self, reviews: &[Review]) -> Summary {
        self.summarize(&self.tally(reviews))
    }

    /// Parallel variant of [`generate_summary`](Self::generate_summary).
    pub fn generate_summary_parallel(&self, reviews: &[Review]) -> Summary {
        self.summarize(&self.tally_parallel(reviews))
    }

    /// Render a summary from a finished tally.
    pub fn summarize(&self, tally: &CorpusTally) -> Summary {
        let mut summary = Summary::default();
        if tally.total_reviews() == 0 {
            return summary;
        }

        let policy = self.config.dominance;
        let mut kept = 0;
        for theme in tally.themes() {
            let pos_pct = tally.percentage(theme, Polarity::Positive);
            let neg_pct = tally.percentage(theme, Polarity::Negative);
            let neu_pct = tally.percentage(theme, Polarity::Neutral);

            let (dominant, percentage) = dominant_verdict(policy, pos_pct, neg_pct, neu_pct);
            if percentage < policy.inclusion_pct() {
                continue;
            }
            kept += 1;

            let mention = ThemeMention {
                theme,
                text: render(theme, percentage),
                percentage,
            };
            match dominant {
                Polarity::Positive => summary.positive.push(mention),
                Polarity::Negative => summary.negative.push(mention),
                Polarity::Neutral => summary.neutral.push(mention),
            }
        }

        for bucket in [
            &mut summary.positive,
            &mut summary.negative,
            &mut summary.neutral,
        ] {
            bucket.sort_by(|a, b| {
                b.percentage
                    .total_cmp(&a.percentage)
                    .then(a.theme.cmp(&b.theme))
            });
        }

        info!(
            "Summary generated: {} review(s), {} theme(s) kept",
            tally.total_reviews(),
            kept
        );
        summary
    }
}

impl Default for SummaryBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}
