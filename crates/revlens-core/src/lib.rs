//! Revlens Core — review data model, theme taxonomy, configuration.

pub mod config;
pub mod error;
pub mod review;
pub mod theme;

pub use config::{
    AnalyzerConfig, DominancePolicy, RatingThresholds, SalaryThresholds, SentimentThresholds,
    SummaryConfig,
};
pub use error::{Error, Result};
pub use review::{PerReviewResult, Review};
pub use theme::{Polarity, Theme};
