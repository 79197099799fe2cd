//! Compound spelling corrector.
//!
//! Given a token, finds the best correction within edit distance 1 against a
//! general-English frequency dictionary, considering both single-word
//! replacements and two-word splits ranked by a bigram dictionary. The
//! corrector holds its dictionaries immutably after construction and is
//! safe to share across worker threads.

use std::collections::HashSet;

use crate::spelling::dictionary::{BigramDictionary, BuiltinDictionary, SpellingDictionary};
use crate::spelling::edit_distance::within_distance;

/// Default maximum edit distance for corrections.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 1;

/// A correction produced by [`CompoundCorrector::lookup_compound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// The token was replaced by (or already was) a single dictionary word.
    Single(String),
    /// The token split into two dictionary words.
    Split(String, String),
}

impl Correction {
    /// The corrected words in order.
    pub fn words(&self) -> Vec<&str> {
        match self {
            Correction::Single(word) => vec![word],
            Correction::Split(first, second) => vec![first, second],
        }
    }
}

/// Best-effort compound corrector over frequency + bigram dictionaries.
pub struct CompoundCorrector {
    dictionary: SpellingDictionary,
    bigrams: BigramDictionary,
    max_edit_distance: usize,
}

impl CompoundCorrector {
    /// Create a corrector with the built-in English dictionaries.
    pub fn new() -> Self {
        CompoundCorrector {
            dictionary: BuiltinDictionary::english(),
            bigrams: BuiltinDictionary::english_bigrams(),
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }

    /// Create a corrector with custom dictionaries.
    pub fn with_dictionaries(dictionary: SpellingDictionary, bigrams: BigramDictionary) -> Self {
        CompoundCorrector {
            dictionary,
            bigrams,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }

    /// Check if a word is correctly spelled.
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Find the best compound correction for a token.
    ///
    /// Returns `None` when no dictionary word is reachable within the edit
    /// distance; callers drop the token in that case.
    pub fn lookup_compound(&self, token: &str) -> Option<Correction> {
        if token.is_empty() {
            return None;
        }
        if self.is_known(token) {
            return Some(Correction::Single(token.to_string()));
        }

        let single = self.best_single(token);
        let split = self.best_split(token);

        match (single, split) {
            (Some((word, single_score)), Some((first, second, split_score))) => {
                if split_score > single_score {
                    Some(Correction::Split(first, second))
                } else {
                    Some(Correction::Single(word))
                }
            }
            (Some((word, _)), None) => Some(Correction::Single(word)),
            (None, Some((first, second, _))) => Some(Correction::Split(first, second)),
            (None, None) => None,
        }
    }

    /// Best single-word correction within the edit distance, scored by
    /// dictionary frequency.
    fn best_single(&self, token: &str) -> Option<(String, u64)> {
        let mut best: Option<(String, u64)> = None;

        for candidate in self.generate_edits(token) {
            if !self.dictionary.contains(&candidate) {
                continue;
            }
            if within_distance(token, &candidate, self.max_edit_distance).is_none() {
                continue;
            }
            let frequency = self.dictionary.frequency(&candidate);
            let replace = match &best {
                None => true,
                // Deterministic tie-break on the word itself.
                Some((word, freq)) => frequency > *freq || (frequency == *freq && candidate < *word),
            };
            if replace {
                best = Some((candidate, frequency));
            }
        }

        best
    }

    /// Best two-word split where both halves are exact dictionary words.
    ///
    /// Splitting inserts one space, so the split as a whole sits within edit
    /// distance 1 of the input. Pairs backed by the bigram dictionary
    /// outrank pairs that merely exist as independent words.
    fn best_split(&self, token: &str) -> Option<(String, String, u64)> {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 2 {
            return None;
        }

        let mut best: Option<(String, String, u64)> = None;

        for i in 1..chars.len() {
            let first: String = chars[..i].iter().collect();
            let second: String = chars[i..].iter().collect();

            if !self.dictionary.contains(&first) || !self.dictionary.contains(&second) {
                continue;
            }

            let bigram = self.bigrams.frequency(&first, &second);
            let score = if bigram > 0 {
                bigram
            } else {
                self.dictionary
                    .frequency(&first)
                    .min(self.dictionary.frequency(&second))
            };

            if best.as_ref().is_none_or(|(_, _, s)| score > *s) {
                best = Some((first, second, score));
            }
        }

        best
    }

    /// Generate all candidate strings within one edit of a word.
    fn generate_edits(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        // Deletions
        for i in 0..len {
            let mut candidate = chars.clone();
            candidate.remove(i);
            edits.insert(candidate.into_iter().collect());
        }

        // Transpositions of adjacent characters
        for i in 0..len.saturating_sub(1) {
            let mut candidate = chars.clone();
            candidate.swap(i, i + 1);
            edits.insert(candidate.into_iter().collect());
        }

        // Replacements
        for i in 0..len {
            for ch in 'a'..='z' {
                if ch != chars[i] {
                    let mut candidate = chars.clone();
                    candidate[i] = ch;
                    edits.insert(candidate.into_iter().collect());
                }
            }
        }

        // Insertions
        for i in 0..=len {
            for ch in 'a'..='z' {
                let mut candidate = chars.clone();
                candidate.insert(i, ch);
                edits.insert(candidate.into_iter().collect());
            }
        }

        edits
    }
}

impl Default for CompoundCorrector {
    fn default() -> Self {
        Self::new()
    }
}
