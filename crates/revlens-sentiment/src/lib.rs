//! Sentiment scoring boundary.
//!
//! The engine treats the scorer as an external collaborator behind the
//! [`SentimentScorer`] trait: text in, compound score in [-1, 1] out.
//! [`LexiconScorer`] is the built-in implementation so the engine works
//! without any external service and tests stay hermetic.

pub mod lexicon;
pub mod scorer;

pub use lexicon::LexiconScorer;
pub use scorer::{classify_compound, SentimentScorer};
