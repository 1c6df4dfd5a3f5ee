//! Per-review classification: keyword catalogs, threshold classifiers,
//! and the analyzer that composes them into one per-review verdict.

pub mod analyzer;
pub mod catalog;
pub mod rating;
pub mod salary;
pub mod text;

pub use analyzer::ReviewAnalyzer;
pub use catalog::{KeywordSet, ThemeCatalog};
pub use text::FieldRole;
