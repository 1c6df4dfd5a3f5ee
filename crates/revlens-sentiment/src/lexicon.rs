//! Built-in lexicon sentiment scorer.
//!
//! Word-valence lookup with simple negation and intensifier handling,
//! normalized to a compound score in [-1, 1]. Valences are graded on a
//! [-4, 4] scale; the compound is `sum / sqrt(sum^2 + 15)`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use revlens_core::Result;

use crate::scorer::SentimentScorer;

/// Graded word valences, [-4, 4]. Skewed toward workplace-review
/// vocabulary since that is the domain this engine scores.
static DEFAULT_VALENCES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let entries: &[(&str, f64)] = &[
        // Strong positive
        ("excellent", 3.2),
        ("amazing", 3.0),
        ("outstanding", 3.2),
        ("fantastic", 3.1),
        ("wonderful", 3.0),
        ("awesome", 3.0),
        ("exceptional", 3.0),
        ("best", 3.2),
        ("love", 3.2),
        ("loved", 3.0),
        ("perfect", 3.0),
        ("brilliant", 2.8),
        ("superb", 3.0),
        // Moderate positive
        ("great", 2.6),
        ("good", 1.9),
        ("strong", 1.6),
        ("solid", 1.5),
        ("nice", 1.8),
        ("happy", 2.2),
        ("enjoy", 2.0),
        ("enjoyable", 2.0),
        ("positive", 1.8),
        ("helpful", 1.9),
        ("supportive", 2.1),
        ("friendly", 2.0),
        ("welcoming", 2.0),
        ("inclusive", 1.8),
        ("collaborative", 1.7),
        ("generous", 2.2),
        ("competitive", 1.4),
        ("flexible", 1.6),
        ("transparent", 1.6),
        ("innovative", 1.8),
        ("modern", 1.2),
        ("interesting", 1.6),
        ("rewarding", 2.2),
        ("motivated", 1.8),
        ("motivating", 1.8),
        ("growth", 1.3),
        ("opportunity", 1.5),
        ("opportunities", 1.5),
        ("benefits", 1.4),
        ("improve", 1.2),
        ("improved", 1.4),
        ("improvement", 1.1),
        ("fun", 2.1),
        ("fair", 1.5),
        ("stable", 1.3),
        ("secure", 1.4),
        ("recommend", 1.8),
        ("recommended", 1.8),
        ("appreciate", 1.9),
        ("appreciated", 1.9),
        ("respect", 1.8),
        ("respected", 1.9),
        ("empowered", 2.0),
        ("smart", 1.7),
        ("talented", 2.0),
        ("mentorship", 1.5),
        ("learning", 1.2),
        ("balanced", 1.5),
        ("comfortable", 1.5),
        ("clear", 1.2),
        ("effective", 1.6),
        ("efficient", 1.6),
        ("thrive", 2.2),
        ("thriving", 2.2),
        ("succeed", 1.9),
        ("success", 1.9),
        ("successful", 1.9),
        ("win", 1.8),
        ("easy", 1.2),
        ("free", 1.1),
        ("perks", 1.5),
        ("promotion", 1.5),
        ("promotions", 1.5),
        ("raise", 1.2),
        ("raises", 1.2),
        ("caring", 2.0),
        ("trust", 1.8),
        ("trusted", 1.8),
        ("autonomy", 1.4),
        ("passionate", 2.0),
        ("energetic", 1.7),
        ("vibrant", 1.8),
        // Strong negative
        ("terrible", -3.1),
        ("horrible", -3.1),
        ("awful", -3.0),
        ("worst", -3.3),
        ("hate", -3.0),
        ("hated", -3.0),
        ("toxic", -2.9),
        ("abusive", -3.2),
        ("hostile", -2.8),
        ("miserable", -2.9),
        ("nightmare", -3.0),
        ("disaster", -2.8),
        ("dreadful", -2.9),
        // Moderate negative
        ("bad", -2.0),
        ("poor", -2.1),
        ("poorly", -2.1),
        ("low", -1.2),
        ("lack", -1.5),
        ("lacking", -1.6),
        ("lacks", -1.5),
        ("weak", -1.7),
        ("stress", -1.9),
        ("stressful", -2.1),
        ("burnout", -2.5),
        ("burned", -1.8),
        ("overworked", -2.3),
        ("overwhelming", -2.0),
        ("exhausting", -2.2),
        ("exhausted", -2.2),
        ("pressure", -1.4),
        ("demanding", -1.3),
        ("micromanage", -2.3),
        ("micromanaged", -2.3),
        ("micromanagement", -2.3),
        ("micromanaging", -2.3),
        ("unfair", -2.2),
        ("unclear", -1.5),
        ("disorganized", -1.9),
        ("chaotic", -2.0),
        ("chaos", -2.0),
        ("bureaucratic", -1.6),
        ("bureaucracy", -1.6),
        ("politics", -1.5),
        ("political", -1.3),
        ("favoritism", -2.2),
        ("discrimination", -2.8),
        ("harassment", -3.0),
        ("layoff", -2.2),
        ("layoffs", -2.2),
        ("fired", -2.1),
        ("firing", -2.0),
        ("quit", -1.6),
        ("leaving", -1.0),
        ("turnover", -1.6),
        ("outdated", -1.6),
        ("legacy", -0.8),
        ("obsolete", -1.8),
        ("stagnant", -1.9),
        ("boring", -1.8),
        ("tedious", -1.7),
        ("slow", -1.2),
        ("difficult", -1.4),
        ("hard", -1.0),
        ("tough", -1.1),
        ("tight", -1.0),
        ("long", -0.6),
        ("overtime", -1.1),
        ("unpaid", -2.0),
        ("underpaid", -2.4),
        ("cheap", -1.4),
        ("stingy", -2.0),
        ("disappointed", -2.2),
        ("disappointing", -2.2),
        ("frustrated", -2.1),
        ("frustrating", -2.1),
        ("annoying", -1.8),
        ("uncertainty", -1.4),
        ("uncertain", -1.3),
        ("unstable", -1.8),
        ("insecure", -1.6),
        ("worry", -1.5),
        ("worried", -1.6),
        ("fear", -1.9),
        ("afraid", -1.9),
        ("blame", -1.8),
        ("broken", -1.8),
        ("failure", -2.1),
        ("failing", -2.0),
        ("fail", -2.0),
        ("problem", -1.3),
        ("problems", -1.3),
        ("issue", -1.0),
        ("issues", -1.0),
        ("complaint", -1.4),
        ("complaints", -1.4),
        ("mediocre", -1.5),
        ("mess", -1.7),
        ("rigid", -1.2),
        ("stale", -1.3),
        ("dead-end", -2.3),
        ("grind", -1.4),
        ("churn", -1.3),
    ];
    entries.iter().copied().collect()
});

/// Negation tokens that flip the valence of a following word.
const NEGATORS: &[&str] = &["not", "no", "never", "hardly", "without", "barely", "cannot"];

/// Intensifiers that amplify the valence of the next word.
const INTENSIFIERS: &[&str] = &[
    "very",
    "extremely",
    "really",
    "incredibly",
    "absolutely",
    "highly",
    "super",
    "so",
];

/// How many preceding tokens are searched for a negator.
const NEGATION_WINDOW: usize = 3;

/// Dampened sign flip applied by a negation.
const NEGATION_SCALAR: f64 = -0.74;

/// Valence boost applied by an intensifier.
const INTENSIFIER_SCALAR: f64 = 1.29;

/// Normalization constant for the compound score.
const NORM_ALPHA: f64 = 15.0;

/// Lexicon-based sentiment scorer. Deterministic and infallible.
///
/// Construct once and share; the scorer is an immutable handle after
/// construction, safe to use from parallel workers.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
}

impl LexiconScorer {
    /// Scorer backed by the built-in valence table.
    pub fn new() -> Self {
        Self {
            words: DEFAULT_VALENCES
                .iter()
                .map(|(word, valence)| ((*word).to_string(), *valence))
                .collect(),
        }
    }

    /// Scorer with no vocabulary. Every text scores 0.0 until words
    /// are added with [`set_valence`](Self::set_valence).
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add or override a word valence, graded on [-4, 4].
    pub fn set_valence(&mut self, word: &str, valence: f64) {
        self.words
            .insert(word.to_lowercase(), valence.clamp(-4.0, 4.0));
    }

    pub fn lexicon_size(&self) -> usize {
        self.words.len()
    }

    /// Compound score for a text, in [-1, 1].
    pub fn compound(&self, text: &str) -> f64 {
        let tokens: Vec<String> = tokenize(text);
        let mut sum = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.words.get(token.as_str()) else {
                continue;
            };
            let mut valence = valence;

            // Intensifier immediately before the word.
            if i > 0 && INTENSIFIERS.contains(&tokens[i - 1].as_str()) {
                valence = (valence * INTENSIFIER_SCALAR).clamp(-4.0, 4.0);
            }

            // Negator within the preceding window.
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()))
            {
                valence *= NEGATION_SCALAR;
            }

            sum += valence;
        }

        if sum == 0.0 {
            return 0.0;
        }
        sum / (sum * sum + NORM_ALPHA).sqrt()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self.compound(text))
    }
}

/// Split on whitespace and punctuation, lowercase, drop empty tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || ",.;:!?()[]{}\"/\\".contains(c))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = LexiconScorer::new();
        let compound = scorer.compound("Excellent benefits and a great supportive team");
        assert!(compound > 0.05, "compound = {compound}");
    }

    #[test]
    fn test_negative_text() {
        let scorer = LexiconScorer::new();
        let compound = scorer.compound("Toxic management, constant stress and burnout");
        assert!(compound < -0.05, "compound = {compound}");
    }

    #[test]
    fn test_unscored_text_is_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.compound("the office is on the third floor"), 0.0);
        assert_eq!(scorer.compound(""), 0.0);
    }

    #[test]
    fn test_negation_flips() {
        let scorer = LexiconScorer::new();
        let plain = scorer.compound("good management");
        let negated = scorer.compound("not good management");
        assert!(plain > 0.0);
        assert!(negated < 0.0, "negated = {negated}");
    }

    #[test]
    fn test_intensifier_amplifies() {
        let scorer = LexiconScorer::new();
        let plain = scorer.compound("good pay");
        let boosted = scorer.compound("very good pay");
        assert!(boosted > plain);
    }

    #[test]
    fn test_compound_stays_in_range() {
        let scorer = LexiconScorer::new();
        let text = "excellent amazing outstanding fantastic wonderful best perfect";
        let compound = scorer.compound(text);
        assert!(compound > 0.9 && compound <= 1.0);
    }

    #[test]
    fn test_custom_valence() {
        let mut scorer = LexiconScorer::empty();
        assert_eq!(scorer.compound("crunchtime again"), 0.0);
        scorer.set_valence("crunchtime", -2.5);
        assert!(scorer.compound("crunchtime again") < 0.0);
    }
}
