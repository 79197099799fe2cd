//! Trained per-class model types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};
use crate::model::ClassLabel;

/// Frequency and smoothed log-probability of one vocabulary word in one
/// class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    /// Raw occurrence count in the class's normalized training stream.
    pub frequency: u64,
    /// Laplace-smoothed natural-log probability.
    pub log_prob: f64,
}

/// The trained language model of one sentiment class.
///
/// Invariant: every vocabulary token has a finite, strictly negative
/// log-probability entry, and the out-of-vocabulary entry is always
/// present; [`ClassModel::validate`] enforces this after training and
/// after loading from disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassModel {
    /// Natural log of the class's share of training documents.
    pub log_prior: f64,
    /// Per-token statistics for every vocabulary entry.
    pub words: HashMap<String, WordStat>,
    /// Statistics of the out-of-vocabulary bucket.
    pub oov: WordStat,
    /// Number of training documents in this class.
    pub document_count: usize,
    /// Number of persisted word entries (vocabulary tokens plus the
    /// out-of-vocabulary marker).
    pub distinct_word_count: usize,
}

impl ClassModel {
    /// Smoothed log-probability of a token, falling back to the
    /// out-of-vocabulary entry for any token absent from the map.
    pub fn log_prob(&self, token: &str) -> f64 {
        self.words
            .get(token)
            .map(|stat| stat.log_prob)
            .unwrap_or(self.oov.log_prob)
    }

    /// Check if a token has its own entry.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains_key(token)
    }

    /// Verify the model invariants.
    pub fn validate(&self) -> Result<()> {
        if self.document_count == 0 {
            return Err(PolarityError::training(
                "class model has zero training documents",
            ));
        }
        if !self.log_prior.is_finite() || self.log_prior > 0.0 {
            return Err(PolarityError::training(format!(
                "invalid log prior: {}",
                self.log_prior
            )));
        }
        for (token, stat) in &self.words {
            if !stat.log_prob.is_finite() || stat.log_prob >= 0.0 {
                return Err(PolarityError::training(format!(
                    "invalid log probability {} for token {token:?}",
                    stat.log_prob
                )));
            }
        }
        if !self.oov.log_prob.is_finite() || self.oov.log_prob >= 0.0 {
            return Err(PolarityError::training(format!(
                "invalid out-of-vocabulary log probability: {}",
                self.oov.log_prob
            )));
        }
        Ok(())
    }
}

/// The trained models of both classes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelPair {
    /// Model of the positive class.
    pub positive: ClassModel,
    /// Model of the negative class.
    pub negative: ClassModel,
}

impl ModelPair {
    /// Get the model for a label.
    pub fn model(&self, label: ClassLabel) -> &ClassModel {
        match label {
            ClassLabel::Positive => &self.positive,
            ClassLabel::Negative => &self.negative,
        }
    }

    /// Verify both models.
    pub fn validate(&self) -> Result<()> {
        self.positive.validate()?;
        self.negative.validate()
    }
}
