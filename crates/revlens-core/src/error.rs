//! Error types for Revlens.
//!
//! Most of the engine degrades locally instead of failing: malformed
//! fields contribute no signal, an empty corpus yields an empty summary.
//! Errors exist only at the scorer boundary and for invalid configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Scorer error: {0}")]
    Scorer(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
