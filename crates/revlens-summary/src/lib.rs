//! Corpus aggregation: tally per-review verdicts, pick a dominant
//! polarity per theme, and render a ranked human-readable summary.

pub mod describe;
pub mod summary;
pub mod tally;

pub use describe::{describe, render};
pub use summary::{Summary, SummaryBuilder, ThemeMention};
pub use tally::CorpusTally;
