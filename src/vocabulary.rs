//! Vocabulary construction and persistence.
//!
//! The vocabulary bounds the language models: it is the set of normalized
//! tokens the models carry explicit probabilities for. Tokens observed
//! fewer than [`MIN_TOKEN_COUNT`] times in the reference corpus are not
//! kept as entries; their occurrences are redirected into the reserved
//! out-of-vocabulary marker [`UNK_TOKEN`], which is always present and is
//! never itself filtered.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{PolarityError, Result};

/// The reserved out-of-vocabulary marker.
pub const UNK_TOKEN: &str = "<UNK>";

/// File name used for persisted vocabularies.
pub const VOCABULARY_FILE_NAME: &str = "vocabulary.txt";

/// Minimum number of observations for a token to earn its own entry.
pub const MIN_TOKEN_COUNT: u64 = 2;

/// A bounded token set built from a normalized reference corpus.
///
/// An empty reference corpus yields a vocabulary containing only the
/// marker: degenerate but valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Accepted tokens and their reference-corpus counts, sorted for
    /// deterministic persistence.
    tokens: BTreeMap<String, u64>,
    /// Occurrences folded into the marker.
    unk_count: u64,
    /// Total occurrences seen, accepted or folded.
    total_count: u64,
}

impl Vocabulary {
    /// Build a vocabulary from a normalized reference token stream.
    pub fn build<I, S>(reference_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        let mut total_count = 0u64;

        for token in reference_tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
            total_count += 1;
        }

        let mut tokens = BTreeMap::new();
        let mut unk_count = 0u64;
        for (token, count) in counts {
            if count >= MIN_TOKEN_COUNT && token != UNK_TOKEN {
                tokens.insert(token, count);
            } else {
                unk_count += count;
            }
        }

        Vocabulary {
            tokens,
            unk_count,
            total_count,
        }
    }

    /// Check if a token has its own entry.
    ///
    /// The marker itself always answers `true`.
    pub fn contains(&self, token: &str) -> bool {
        token == UNK_TOKEN || self.tokens.contains_key(token)
    }

    /// Number of entries including the marker.
    pub fn len(&self) -> usize {
        self.tokens.len() + 1
    }

    /// A vocabulary is never empty: the marker is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over accepted tokens in sorted order (marker excluded).
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(|s| s.as_str())
    }

    /// Reference-corpus count of an accepted token (0 if absent).
    pub fn count(&self, token: &str) -> u64 {
        self.tokens.get(token).copied().unwrap_or(0)
    }

    /// Occurrences folded into the marker.
    pub fn unk_count(&self) -> u64 {
        self.unk_count
    }

    /// Total occurrences observed in the reference corpus.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Write the vocabulary as a text file: a `Number_of_words:` header
    /// followed by one token per line in sorted order.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "Number_of_words: {}", self.len())?;
        writeln!(writer, "{UNK_TOKEN}")?;
        for token in self.tokens.keys() {
            writeln!(writer, "{token}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a vocabulary written by [`Vocabulary::save_to_file`].
    ///
    /// Counts are not persisted, so loaded entries carry the minimum
    /// accepted count; the marker line is tolerated anywhere.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PolarityError::not_found(format!("vocabulary file {}: {e}", path.display()))
        })?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| PolarityError::corpus("empty vocabulary file"))??;
        let declared: usize = header
            .strip_prefix("Number_of_words:")
            .map(str::trim)
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| {
                PolarityError::corpus(format!("bad vocabulary header: {header:?}"))
            })?;

        let mut tokens = BTreeMap::new();
        let mut saw_unk = false;
        for line in lines {
            let line = line?;
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            if token == UNK_TOKEN {
                saw_unk = true;
            } else {
                tokens.insert(token.to_string(), MIN_TOKEN_COUNT);
            }
        }

        let loaded = tokens.len() + usize::from(saw_unk);
        if loaded != declared {
            return Err(PolarityError::corpus(format!(
                "vocabulary declares {declared} words but contains {loaded}"
            )));
        }

        let total_count = tokens.values().sum();
        Ok(Vocabulary {
            tokens,
            unk_count: 0,
            total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rare_tokens_fold_into_unk() {
        let vocabulary =
            Vocabulary::build(vec!["good", "good", "bad", "bad", "bad", "rare"]);

        assert!(vocabulary.contains("good"));
        assert!(vocabulary.contains("bad"));
        assert!(!vocabulary.contains("rare"));
        assert!(vocabulary.contains(UNK_TOKEN));

        assert_eq!(vocabulary.count("good"), 2);
        assert_eq!(vocabulary.count("bad"), 3);
        assert_eq!(vocabulary.unk_count(), 1);
        assert_eq!(vocabulary.total_count(), 6);
        assert_eq!(vocabulary.len(), 3); // good, bad, <UNK>
    }

    #[test]
    fn test_empty_corpus_is_degenerate_but_valid() {
        let vocabulary = Vocabulary::build(Vec::<String>::new());

        assert_eq!(vocabulary.len(), 1);
        assert!(vocabulary.contains(UNK_TOKEN));
        assert!(!vocabulary.is_empty());
        assert_eq!(vocabulary.unk_count(), 0);
    }

    #[test]
    fn test_literal_unk_in_corpus_is_folded() {
        // A surface token spelled like the marker never becomes an entry.
        let vocabulary = Vocabulary::build(vec![UNK_TOKEN, UNK_TOKEN, "good", "good"]);
        assert_eq!(vocabulary.tokens().count(), 1);
        assert_eq!(vocabulary.unk_count(), 2);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");

        let vocabulary = Vocabulary::build(vec!["b", "b", "a", "a", "a", "once"]);
        vocabulary.save_to_file(&path).unwrap();

        let loaded = Vocabulary::load_from_file(&path).unwrap();
        assert_eq!(
            loaded.tokens().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn test_load_rejects_bad_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");
        std::fs::write(&path, "not a header\ngood\n").unwrap();

        assert!(Vocabulary::load_from_file(&path).is_err());
    }

    #[test]
    fn test_load_rejects_count_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");
        std::fs::write(&path, "Number_of_words: 5\n<UNK>\ngood\n").unwrap();

        assert!(Vocabulary::load_from_file(&path).is_err());
    }
}
