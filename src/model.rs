//! Per-class language models: training and persistence.
//!
//! A [`ClassModel`] holds the Laplace-smoothed log-probabilities of one
//! sentiment class; a [`ModelPair`] holds both classes and is the only
//! state that crosses the training/inference boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolarityError;

pub mod class_model;
pub mod persist;
pub mod trainer;

// Re-export commonly used types
pub use class_model::{ClassModel, ModelPair, WordStat};
pub use persist::{load_model_pair, read_model, write_model};
pub use trainer::{ClassCorpus, train};

/// The two sentiment classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassLabel {
    /// Positive sentiment.
    Positive,
    /// Negative sentiment.
    Negative,
}

impl ClassLabel {
    /// Both labels, positive first.
    pub const ALL: [ClassLabel; 2] = [ClassLabel::Positive, ClassLabel::Negative];

    /// The opposite label.
    pub fn opposite(&self) -> ClassLabel {
        match self {
            ClassLabel::Positive => ClassLabel::Negative,
            ClassLabel::Negative => ClassLabel::Positive,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::Positive => write!(f, "positive"),
            ClassLabel::Negative => write!(f, "negative"),
        }
    }
}

impl FromStr for ClassLabel {
    type Err = PolarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(ClassLabel::Positive),
            "negative" => Ok(ClassLabel::Negative),
            other => Err(PolarityError::corpus(format!(
                "unknown class label: {other:?}"
            ))),
        }
    }
}
