//! Corpus-level occurrence tally.
//!
//! A pure reduction over per-review results: commutative and
//! associative, so partial tallies from parallel workers merge in any
//! order to the same final tally.

use std::collections::BTreeMap;

use serde::Serialize;

use revlens_core::{PerReviewResult, Polarity, Theme};

/// Occurrence counts per (theme, polarity), plus the review total.
/// Created empty, filled once per review, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusTally {
    counts: BTreeMap<Theme, [u64; 3]>,
    total_reviews: u64,
}

fn slot(polarity: Polarity) -> usize {
    match polarity {
        Polarity::Positive => 0,
        Polarity::Negative => 1,
        Polarity::Neutral => 2,
    }
}

impl CorpusTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one review's verdict. Every (theme, polarity) occurrence
    /// counts once; buckets are already deduplicated per review.
    pub fn record(&mut self, result: &PerReviewResult) {
        self.total_reviews += 1;
        for polarity in Polarity::ALL {
            for theme in result.themes(polarity) {
                self.counts.entry(*theme).or_default()[slot(polarity)] += 1;
            }
        }
    }

    /// Merge a partial tally from another worker.
    pub fn merge(&mut self, other: CorpusTally) {
        self.total_reviews += other.total_reviews;
        for (theme, counts) in other.counts {
            let entry = self.counts.entry(theme).or_default();
            for (into, from) in entry.iter_mut().zip(counts) {
                *into += from;
            }
        }
    }

    pub fn total_reviews(&self) -> u64 {
        self.total_reviews
    }

    pub fn count(&self, theme: Theme, polarity: Polarity) -> u64 {
        self.counts
            .get(&theme)
            .map(|counts| counts[slot(polarity)])
            .unwrap_or(0)
    }

    /// Occurrence as a percentage of the corpus. Zero for an empty
    /// corpus, never a division fault.
    pub fn percentage(&self, theme: Theme, polarity: Polarity) -> f64 {
        if self.total_reviews == 0 {
            return 0.0;
        }
        100.0 * self.count(theme, polarity) as f64 / self.total_reviews as f64
    }

    /// Themes that appeared anywhere in the tally, in identifier order.
    pub fn themes(&self) -> impl Iterator<Item = Theme> + '_ {
        self.counts.keys().copied()
    }
}
