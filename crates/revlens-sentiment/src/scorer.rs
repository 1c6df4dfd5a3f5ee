//! Scorer trait and compound-score classification.

use revlens_core::{Polarity, Result, SentimentThresholds};

/// External sentiment scorer: returns a compound polarity score in
/// [-1, 1] for a text. Implementations must be `Send + Sync` so a
/// corpus can be analyzed on parallel workers.
///
/// A scorer failure is a per-field fault: callers degrade the field's
/// overall polarity to neutral rather than failing the batch.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64>;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn score(&self, text: &str) -> Result<f64> {
        (**self).score(text)
    }
}

/// Map a compound score to a polarity using the configured cutoffs.
pub fn classify_compound(compound: f64, thresholds: &SentimentThresholds) -> Polarity {
    if compound >= thresholds.positive {
        Polarity::Positive
    } else if compound <= thresholds.negative {
        Polarity::Negative
    } else {
        Polarity::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_compound_cutoffs() {
        let t = SentimentThresholds::default();
        assert_eq!(classify_compound(0.05, &t), Polarity::Positive);
        assert_eq!(classify_compound(-0.05, &t), Polarity::Negative);
        assert_eq!(classify_compound(0.0, &t), Polarity::Neutral);
        assert_eq!(classify_compound(0.049, &t), Polarity::Neutral);
        assert_eq!(classify_compound(-0.049, &t), Polarity::Neutral);
    }
}
