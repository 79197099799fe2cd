//! Accuracy scoring against gold labels.
//!
//! Compares a summary file (one predicted label per line, in document
//! order) against the gold labels of the same corpus.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};
use crate::model::ClassLabel;

/// Accuracy of a batch of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accuracy {
    /// Number of predictions matching the gold label.
    pub correct: usize,
    /// Total number of documents compared.
    pub total: usize,
}

impl Accuracy {
    /// Accuracy as a percentage in `[0, 100]`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

/// Compare predictions against gold labels position by position.
///
/// A length mismatch is an error: the comparison would silently drift.
pub fn evaluate(gold: &[ClassLabel], predicted: &[ClassLabel]) -> Result<Accuracy> {
    if gold.len() != predicted.len() {
        return Err(PolarityError::evaluation(format!(
            "{} gold labels but {} predictions",
            gold.len(),
            predicted.len()
        )));
    }

    let correct = gold
        .iter()
        .zip(predicted)
        .filter(|(g, p)| g == p)
        .count();

    Ok(Accuracy {
        correct,
        total: gold.len(),
    })
}

/// Read a summary file: one label per non-empty line.
pub fn read_summary_file<P: AsRef<Path>>(path: P) -> Result<Vec<ClassLabel>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| PolarityError::not_found(format!("summary file {}: {e}", path.display())))?;

    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ClassLabel::from_str)
        .collect()
}
