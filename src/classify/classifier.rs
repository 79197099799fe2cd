//! Naive Bayes scoring.

use rayon::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::Normalizer;
use crate::classify::{ClassificationResult, EXCERPT_LENGTH};
use crate::error::Result;
use crate::model::{ClassLabel, ClassModel, ModelPair};

/// Score a normalized document under one class model.
fn score(tokens: &[String], model: &ClassModel) -> f64 {
    tokens
        .iter()
        .fold(model.log_prior, |acc, token| acc + model.log_prob(token))
}

/// Classify an already-normalized token sequence.
///
/// An empty sequence is valid: the scores degenerate to the bare priors.
/// The tie-break to negative is deliberate and fixed, not a floating-point
/// accident.
pub fn classify_tokens(tokens: &[String], models: &ModelPair) -> (f64, f64, ClassLabel) {
    let positive_score = score(tokens, &models.positive);
    let negative_score = score(tokens, &models.negative);

    let label = if positive_score > negative_score {
        ClassLabel::Positive
    } else {
        ClassLabel::Negative
    };

    (positive_score, negative_score, label)
}

/// Normalize and classify one raw document.
pub fn classify_document(
    text: &str,
    normalizer: &Normalizer,
    models: &ModelPair,
) -> Result<ClassificationResult> {
    let tokens = normalizer.normalize(text)?;
    let (positive_score, negative_score, label) = classify_tokens(&tokens, models);

    Ok(ClassificationResult {
        excerpt: excerpt(text),
        positive_score,
        negative_score,
        label,
    })
}

/// Classify a batch of documents in parallel.
///
/// Documents are scored independently; the normalizer and models are
/// shared read-only across workers.
pub fn classify_batch(
    texts: &[String],
    normalizer: &Normalizer,
    models: &ModelPair,
) -> Result<Vec<ClassificationResult>> {
    texts
        .par_iter()
        .map(|text| classify_document(text, normalizer, models))
        .collect()
}

/// Leading grapheme clusters of the document, for the detail report.
fn excerpt(text: &str) -> String {
    text.graphemes(true).take(EXCERPT_LENGTH).collect()
}
