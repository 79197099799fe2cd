//! Document classification against a trained model pair.
//!
//! Inference is a single scoring step: per class, the log-prior plus the
//! sum of per-token log-probabilities, with the out-of-vocabulary entry
//! standing in for any token the model has no entry for. The label is the
//! arg-max; a tie resolves to the negative class.

use serde::{Deserialize, Serialize};

use crate::model::ClassLabel;

pub mod classifier;
pub mod report;

// Re-export commonly used types
pub use classifier::{classify_batch, classify_document, classify_tokens};
pub use report::{write_details, write_summary};

/// Number of grapheme clusters kept in the result excerpt.
pub const EXCERPT_LENGTH: usize = 10;

/// The outcome of classifying one document.
///
/// Invariant: `label` is the class with the strictly greater score; equal
/// scores resolve to [`ClassLabel::Negative`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Leading fragment of the original document text.
    pub excerpt: String,
    /// Log-likelihood score under the positive model.
    pub positive_score: f64,
    /// Log-likelihood score under the negative model.
    pub negative_score: f64,
    /// The predicted class.
    pub label: ClassLabel,
}

impl ClassificationResult {
    /// The winning score.
    pub fn best_score(&self) -> f64 {
        match self.label {
            ClassLabel::Positive => self.positive_score,
            ClassLabel::Negative => self.negative_score,
        }
    }
}
