//! Spell-correction engine for the normalization pipeline.
//!
//! This module provides frequency and bigram dictionaries plus an
//! edit-distance based compound corrector. The corrector is the one
//! expensive resource in the pipeline: it is built at most once per
//! [`Normalizer`](crate::analysis::Normalizer) and shared read-only across
//! all lookups afterwards.

pub mod corrector;
pub mod dictionary;
pub mod edit_distance;

// Re-export commonly used types
pub use corrector::CompoundCorrector;
pub use dictionary::{BigramDictionary, BuiltinDictionary, SpellingDictionary};
pub use edit_distance::{levenshtein, within_distance};
