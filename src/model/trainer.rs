//! Language model training.
//!
//! Computes one [`ClassModel`] per class from normalized token streams:
//! add-one (Laplace) smoothed word probabilities over the shared
//! vocabulary, plus a log-prior from the class's share of training
//! documents. The denominator `total_tokens(class) + |vocabulary|` is
//! identical for every token within a class, so every word, including
//! never-seen words sharing the out-of-vocabulary bucket, gets a finite
//! nonzero probability.
//!
//! Token counting folds per-chunk partial counts after a parallel map;
//! counters are never updated concurrently in place.

use std::collections::HashMap;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::error::{PolarityError, Result};
use crate::model::class_model::{ClassModel, ModelPair, WordStat};
use crate::vocabulary::Vocabulary;

/// Chunk size for parallel token counting.
const COUNT_CHUNK: usize = 4096;

/// The normalized training material of one class.
#[derive(Debug, Clone, Default)]
pub struct ClassCorpus {
    /// Concatenated normalized tokens of every document in the class.
    pub tokens: Vec<String>,
    /// Number of documents the tokens came from.
    pub document_count: usize,
}

impl ClassCorpus {
    /// Create a class corpus from its tokens and document count.
    pub fn new(tokens: Vec<String>, document_count: usize) -> Self {
        ClassCorpus {
            tokens,
            document_count,
        }
    }
}

/// Train both class models against a shared vocabulary.
///
/// A class with zero documents would make its prior `ln(0)`; that is
/// rejected here, before smoothing, rather than letting `-inf` leak into
/// every downstream score.
pub fn train(
    vocabulary: &Vocabulary,
    positive: &ClassCorpus,
    negative: &ClassCorpus,
) -> Result<ModelPair> {
    if positive.document_count == 0 {
        return Err(PolarityError::training(
            "positive class has zero documents; cannot form a prior",
        ));
    }
    if negative.document_count == 0 {
        return Err(PolarityError::training(
            "negative class has zero documents; cannot form a prior",
        ));
    }

    let total_documents = (positive.document_count + negative.document_count) as f64;
    let positive_prior = (positive.document_count as f64 / total_documents).ln();
    let negative_prior = (negative.document_count as f64 / total_documents).ln();

    let pair = ModelPair {
        positive: train_class(vocabulary, positive, positive_prior),
        negative: train_class(vocabulary, negative, negative_prior),
    };
    pair.validate()?;
    Ok(pair)
}

/// Build one class model.
fn train_class(vocabulary: &Vocabulary, corpus: &ClassCorpus, log_prior: f64) -> ClassModel {
    let counts = count_tokens(&corpus.tokens);

    let total_tokens = corpus.tokens.len() as f64;
    let denominator = total_tokens + vocabulary.len() as f64;

    let mut words = HashMap::with_capacity(vocabulary.len());
    let mut oov_count = 0u64;

    // Tokens outside the vocabulary fold into the bucket, as does a
    // surface token spelled like the marker itself.
    for (token, count) in &counts {
        if !vocabulary.contains(token) || token == crate::vocabulary::UNK_TOKEN {
            oov_count += count;
        }
    }

    for token in vocabulary.tokens() {
        let frequency = counts.get(token).copied().unwrap_or(0);
        let log_prob = ((frequency as f64 + 1.0) / denominator).ln();
        words.insert(
            token.to_string(),
            WordStat {
                frequency,
                log_prob,
            },
        );
    }

    let oov = WordStat {
        frequency: oov_count,
        log_prob: ((oov_count as f64 + 1.0) / denominator).ln(),
    };

    ClassModel {
        log_prior,
        distinct_word_count: words.len() + 1,
        words,
        oov,
        document_count: corpus.document_count,
    }
}

/// Count token occurrences, merging per-chunk partial counts.
fn count_tokens(tokens: &[String]) -> AHashMap<String, u64> {
    tokens
        .par_chunks(COUNT_CHUNK)
        .map(|chunk| {
            let mut local: AHashMap<String, u64> = AHashMap::new();
            for token in chunk {
                *local.entry(token.clone()).or_insert(0) += 1;
            }
            local
        })
        .reduce(AHashMap::new, |mut a, b| {
            for (token, count) in b {
                *a.entry(token).or_insert(0) += count;
            }
            a
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::UNK_TOKEN;

    fn toy_vocabulary() -> Vocabulary {
        // Both words seen twice so both survive the rare-token cutoff.
        Vocabulary::build(vec!["good", "good", "bad", "bad"])
    }

    fn toy_corpora() -> (ClassCorpus, ClassCorpus) {
        let positive = ClassCorpus::new(
            vec!["good".to_string(), "good".to_string()],
            2,
        );
        let negative = ClassCorpus::new(vec!["bad".to_string()], 1);
        (positive, negative)
    }

    #[test]
    fn test_priors_from_document_share() {
        let (positive, negative) = toy_corpora();
        let pair = train(&toy_vocabulary(), &positive, &negative).unwrap();

        assert!((pair.positive.log_prior - (2.0f64 / 3.0).ln()).abs() < 1e-12);
        assert!((pair.negative.log_prior - (1.0f64 / 3.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_laplace_smoothing() {
        let (positive, negative) = toy_corpora();
        let vocabulary = toy_vocabulary();
        let pair = train(&vocabulary, &positive, &negative).unwrap();

        // Positive class: 2 tokens, |V| = 3 (good, bad, <UNK>).
        let denom = 2.0f64 + 3.0;
        assert!((pair.positive.words["good"].log_prob - (3.0 / denom).ln()).abs() < 1e-12);
        assert!((pair.positive.words["bad"].log_prob - (1.0 / denom).ln()).abs() < 1e-12);
        assert!((pair.positive.oov.log_prob - (1.0 / denom).ln()).abs() < 1e-12);

        // A word seen in class A scores higher there than in class B.
        assert!(pair.positive.words["good"].log_prob > pair.negative.words["good"].log_prob);
    }

    #[test]
    fn test_unseen_tokens_fold_into_oov() {
        let vocabulary = toy_vocabulary();
        let positive = ClassCorpus::new(
            vec!["good".to_string(), "mystery".to_string(), "mystery".to_string()],
            1,
        );
        let negative = ClassCorpus::new(vec!["bad".to_string()], 1);
        let pair = train(&vocabulary, &positive, &negative).unwrap();

        assert_eq!(pair.positive.oov.frequency, 2);
        assert!(!pair.positive.contains("mystery"));
        assert!(!pair.positive.contains(UNK_TOKEN));
    }

    #[test]
    fn test_zero_document_class_rejected() {
        let vocabulary = toy_vocabulary();
        let positive = ClassCorpus::new(vec!["good".to_string()], 1);
        let empty = ClassCorpus::new(Vec::new(), 0);

        assert!(train(&vocabulary, &positive, &empty).is_err());
        assert!(train(&vocabulary, &empty, &positive).is_err());
    }

    #[test]
    fn test_probabilities_strictly_between_zero_and_one() {
        let (positive, negative) = toy_corpora();
        let pair = train(&toy_vocabulary(), &positive, &negative).unwrap();

        for model in [&pair.positive, &pair.negative] {
            for stat in model.words.values() {
                let p = stat.log_prob.exp();
                assert!(p > 0.0 && p < 1.0);
            }
            let p = model.oov.log_prob.exp();
            assert!(p > 0.0 && p < 1.0);
        }
    }
}
