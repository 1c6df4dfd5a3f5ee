//! Analyzer and summary configuration.
//!
//! All thresholds are explicit values constructed up front and passed
//! into the analyzer, never ambient process state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Thresholds for numeric 0–10 rating fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatingThresholds {
    /// Rating at or above this is positive.
    pub high: f64,
    /// Rating at or below this is negative.
    pub low: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self { high: 7.0, low: 4.0 }
    }
}

/// Thresholds for average salary, with a remote-work adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryThresholds {
    /// Average strictly above this is positive.
    pub high: f64,
    /// Average strictly below this is negative.
    pub low: f64,
    /// Thresholds used when the location carries the remote marker.
    pub remote_high: f64,
    pub remote_low: f64,
    /// Case-insensitive substring of the location field that selects
    /// the remote thresholds.
    pub remote_marker: String,
}

impl Default for SalaryThresholds {
    fn default() -> Self {
        Self {
            high: 100_000.0,
            low: 50_000.0,
            remote_high: 90_000.0,
            remote_low: 45_000.0,
            remote_marker: "remote".to_string(),
        }
    }
}

/// Compound-score cutoffs for overall text polarity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentThresholds {
    /// Compound at or above this is positive.
    pub positive: f64,
    /// Compound at or below this is negative.
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

/// Corpus-level dominance rule: which polarity is "the" verdict for a
/// theme, and when a theme is frequent enough to appear in the summary.
///
/// A deployment picks exactly one policy; the two are never hybridized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DominancePolicy {
    /// Dominant polarity is the one with the highest percentage.
    /// Ties are broken in a fixed order: positive, then negative, then
    /// neutral. The theme is included iff its dominant percentage meets
    /// `inclusion_pct`.
    StrictMax { inclusion_pct: f64 },
    /// Near-parity between positive and negative collapses to neutral:
    /// if `max(pos, neg) < min_dominant_pct` or `|pos - neg| <
    /// parity_margin`, the verdict is neutral with percentage
    /// `neu + min(pos, neg)`. Otherwise the larger of positive/negative
    /// wins with its own percentage. Included iff the resulting
    /// percentage meets `inclusion_pct`.
    MarginAware {
        min_dominant_pct: f64,
        parity_margin: f64,
        inclusion_pct: f64,
    },
}

impl DominancePolicy {
    /// Minimum percentage for a theme to appear in the summary.
    pub fn inclusion_pct(&self) -> f64 {
        match self {
            DominancePolicy::StrictMax { inclusion_pct } => *inclusion_pct,
            DominancePolicy::MarginAware { inclusion_pct, .. } => *inclusion_pct,
        }
    }
}

impl Default for DominancePolicy {
    fn default() -> Self {
        DominancePolicy::StrictMax {
            inclusion_pct: 20.0,
        }
    }
}

/// Per-review analysis configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub rating: RatingThresholds,
    pub salary: SalaryThresholds,
    pub sentiment: SentimentThresholds,
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rating.low >= self.rating.high {
            return Err(Error::Config(format!(
                "rating low threshold {} must be below high threshold {}",
                self.rating.low, self.rating.high
            )));
        }
        if self.salary.low >= self.salary.high || self.salary.remote_low >= self.salary.remote_high
        {
            return Err(Error::Config(
                "salary low thresholds must be below high thresholds".to_string(),
            ));
        }
        if self.sentiment.negative >= self.sentiment.positive {
            return Err(Error::Config(
                "sentiment negative cutoff must be below positive cutoff".to_string(),
            ));
        }
        Ok(())
    }
}

/// Corpus summary configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub dominance: DominancePolicy,
}

impl SummaryConfig {
    pub fn validate(&self) -> Result<()> {
        let inclusion = self.dominance.inclusion_pct();
        if !(0.0..=100.0).contains(&inclusion) {
            return Err(Error::Config(format!(
                "inclusion threshold {inclusion} must be a percentage in [0, 100]"
            )));
        }
        Ok(())
    }
}
