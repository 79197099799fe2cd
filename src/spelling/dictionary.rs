//! Dictionary management for spelling correction.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PolarityError, Result};

/// A dictionary that stores words and their frequencies for spelling
/// correction.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    /// Words and their frequencies
    words: HashMap<String, u64>,
    /// Total frequency mass for probability-style comparisons
    total_count: u64,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary {
            words: HashMap::new(),
            total_count: 0,
        }
    }

    /// Add a word to the dictionary with the given frequency.
    ///
    /// Re-adding a word replaces its frequency.
    pub fn add_word<S: Into<String>>(&mut self, word: S, frequency: u64) {
        let normalized = word.into().to_lowercase();
        let old = self.words.insert(normalized, frequency).unwrap_or(0);
        self.total_count = self.total_count - old + frequency;
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Get the frequency of a word (0 if absent).
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total frequency count.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Load a dictionary from a frequency file with `word frequency` lines.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = SpellingDictionary::new();
        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            let mut parts = line.split_whitespace();
            let (Some(word), Some(count)) = (parts.next(), parts.next()) else {
                continue;
            };
            let frequency: u64 = count.parse().map_err(|_| {
                PolarityError::corpus(format!(
                    "bad frequency on line {} of spell dictionary: {line:?}",
                    line_number + 1
                ))
            })?;
            dictionary.add_word(word, frequency);
        }

        Ok(dictionary)
    }
}

/// A dictionary of adjacent word pairs and their frequencies, used to rank
/// compound (two-word) corrections.
#[derive(Debug, Clone, Default)]
pub struct BigramDictionary {
    pairs: HashMap<(String, String), u64>,
}

impl BigramDictionary {
    /// Create a new empty bigram dictionary.
    pub fn new() -> Self {
        BigramDictionary {
            pairs: HashMap::new(),
        }
    }

    /// Add a word pair with the given frequency.
    pub fn add_pair<S: Into<String>>(&mut self, first: S, second: S, frequency: u64) {
        self.pairs.insert(
            (first.into().to_lowercase(), second.into().to_lowercase()),
            frequency,
        );
    }

    /// Get the frequency of a word pair (0 if absent).
    pub fn frequency(&self, first: &str, second: &str) -> u64 {
        self.pairs
            .get(&(first.to_string(), second.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Get the number of stored pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Load a bigram dictionary from a file with `word1 word2 frequency`
    /// lines.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = BigramDictionary::new();
        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            let mut parts = line.split_whitespace();
            let (Some(first), Some(second), Some(count)) =
                (parts.next(), parts.next(), parts.next())
            else {
                continue;
            };
            let frequency: u64 = count.parse().map_err(|_| {
                PolarityError::corpus(format!(
                    "bad frequency on line {} of bigram dictionary: {line:?}",
                    line_number + 1
                ))
            })?;
            dictionary.add_pair(first, second, frequency);
        }

        Ok(dictionary)
    }
}

/// Built-in general-English dictionaries.
///
/// Frequencies are rough relative magnitudes, enough to rank candidate
/// corrections; the list skews toward the function words and sentiment
/// vocabulary of short social-media posts.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Create a dictionary of common English words with estimated
    /// frequencies.
    pub fn english() -> SpellingDictionary {
        let mut dict = SpellingDictionary::new();

        let common_words: &[(&str, u64)] = &[
            ("the", 1000000),
            ("be", 500000),
            ("to", 450000),
            ("of", 400000),
            ("and", 380000),
            ("a", 350000),
            ("in", 300000),
            ("that", 250000),
            ("have", 200000),
            ("i", 180000),
            ("it", 170000),
            ("for", 160000),
            ("not", 150000),
            ("on", 140000),
            ("with", 130000),
            ("he", 120000),
            ("as", 110000),
            ("you", 100000),
            ("do", 95000),
            ("at", 90000),
            ("this", 85000),
            ("but", 80000),
            ("his", 75000),
            ("by", 70000),
            ("from", 65000),
            ("they", 60000),
            ("we", 55000),
            ("say", 50000),
            ("her", 48000),
            ("she", 46000),
            ("or", 44000),
            ("an", 42000),
            ("will", 40000),
            ("my", 38000),
            ("one", 36000),
            ("all", 34000),
            ("would", 32000),
            ("there", 30000),
            ("their", 28000),
            ("what", 26000),
            ("so", 24000),
            ("up", 22000),
            ("out", 20000),
            ("if", 19000),
            ("about", 18000),
            ("who", 17000),
            ("get", 16000),
            ("which", 15000),
            ("go", 14000),
            ("me", 13000),
            ("when", 12000),
            ("make", 11000),
            ("can", 10000),
            ("like", 9500),
            ("time", 9000),
            ("no", 8500),
            ("just", 8000),
            ("is", 8200),
            ("him", 7500),
            ("know", 7000),
            ("hello", 7200),
            ("world", 6800),
            ("take", 6500),
            ("people", 6000),
            ("into", 5500),
            ("year", 5000),
            ("your", 4800),
            ("good", 4600),
            ("some", 4400),
            ("could", 4200),
            ("them", 4000),
            ("see", 3800),
            ("other", 3600),
            ("than", 3400),
            ("then", 3200),
            ("now", 3000),
            ("look", 2800),
            ("only", 2600),
            ("come", 2400),
            ("its", 2200),
            ("over", 2000),
            ("think", 1900),
            ("also", 1800),
            ("back", 1700),
            ("after", 1600),
            ("use", 1500),
            ("two", 1400),
            ("how", 1300),
            ("our", 1200),
            ("work", 1100),
            ("first", 1000),
            ("well", 950),
            ("way", 900),
            ("even", 850),
            ("new", 800),
            ("want", 750),
            ("because", 700),
            ("any", 650),
            ("these", 600),
            ("give", 550),
            ("day", 500),
            ("morning", 480),
            ("night", 460),
            ("was", 420),
            ("are", 400),
            ("been", 380),
            ("has", 360),
            ("had", 340),
            ("were", 320),
            ("said", 300),
            ("very", 290),
            ("really", 280),
            ("today", 270),
            ("still", 260),
            ("never", 250),
            ("home", 240),
            ("stay", 230),
            ("safe", 220),
            ("help", 210),
            ("life", 200),
            ("love", 195),
            ("hate", 120),
            ("happy", 180),
            ("sad", 110),
            ("great", 175),
            ("terrible", 60),
            ("awful", 55),
            ("amazing", 150),
            ("best", 145),
            ("worst", 70),
            ("nice", 140),
            ("bad", 135),
            ("better", 130),
            ("worse", 65),
            ("thanks", 125),
            ("thank", 124),
            ("please", 115),
            ("feel", 105),
            ("sick", 100),
            ("virus", 98),
            ("mask", 96),
            ("vaccine", 94),
            ("health", 92),
            ("news", 90),
            ("case", 88),
            ("cases", 86),
            ("test", 84),
            ("positive", 82),
            ("negative", 80),
            ("hope", 78),
            ("fear", 76),
            ("dead", 74),
            ("death", 72),
            ("live", 68),
            ("right", 66),
            ("wrong", 64),
            ("true", 62),
            ("real", 58),
            ("fake", 56),
            ("word", 54),
            ("where", 52),
            ("here", 50),
            ("should", 48),
            ("those", 44),
            ("came", 42),
            ("may", 40),
            ("part", 38),
            ("against", 36),
            ("such", 34),
            ("turn", 32),
            ("every", 30),
            ("point", 26),
            ("small", 24),
            ("end", 22),
            ("why", 20),
        ];

        for &(word, freq) in common_words {
            dict.add_word(word, freq);
        }

        dict
    }

    /// Create a bigram dictionary of common English word pairs.
    pub fn english_bigrams() -> BigramDictionary {
        let mut dict = BigramDictionary::new();

        let common_pairs: &[(&str, &str, u64)] = &[
            ("of", "the", 500000),
            ("in", "the", 450000),
            ("to", "the", 400000),
            ("on", "the", 300000),
            ("to", "be", 250000),
            ("and", "the", 200000),
            ("it", "is", 180000),
            ("i", "am", 160000),
            ("it", "was", 140000),
            ("is", "a", 130000),
            ("with", "the", 120000),
            ("good", "morning", 90000),
            ("good", "night", 80000),
            ("good", "day", 60000),
            ("thank", "you", 110000),
            ("stay", "safe", 50000),
            ("stay", "home", 48000),
            ("a", "lot", 46000),
            ("so", "much", 44000),
            ("very", "good", 42000),
            ("very", "bad", 30000),
            ("feel", "better", 28000),
            ("get", "well", 26000),
            ("new", "cases", 24000),
            ("the", "virus", 22000),
            ("my", "life", 20000),
            ("no", "one", 18000),
            ("every", "day", 16000),
            ("right", "now", 15000),
            ("at", "home", 14000),
        ];

        for &(first, second, freq) in common_pairs {
            dict.add_pair(first, second, freq);
        }

        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = SpellingDictionary::new();

        assert!(!dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 0);
        assert_eq!(dict.word_count(), 0);

        dict.add_word("hello", 5);
        assert!(dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 5);
        assert_eq!(dict.word_count(), 1);
        assert_eq!(dict.total_frequency(), 5);

        dict.add_word("world", 3);
        assert_eq!(dict.word_count(), 2);
        assert_eq!(dict.total_frequency(), 8);

        // Re-adding replaces, total stays consistent.
        dict.add_word("hello", 7);
        assert_eq!(dict.frequency("hello"), 7);
        assert_eq!(dict.total_frequency(), 10);
    }

    #[test]
    fn test_dictionary_lowercases_entries() {
        let mut dict = SpellingDictionary::new();
        dict.add_word("Hello", 5);
        assert!(dict.contains("hello"));
        assert!(!dict.contains("Hello"));
    }

    #[test]
    fn test_load_from_frequency_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello 5").unwrap();
        writeln!(temp_file, "world 3").unwrap();
        temp_file.flush().unwrap();

        let dict = SpellingDictionary::load_from_frequency_file(temp_file.path()).unwrap();
        assert_eq!(dict.frequency("hello"), 5);
        assert_eq!(dict.frequency("world"), 3);
    }

    #[test]
    fn test_load_rejects_bad_frequency() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello five").unwrap();
        temp_file.flush().unwrap();

        assert!(SpellingDictionary::load_from_frequency_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_bigram_dictionary() {
        let mut dict = BigramDictionary::new();
        dict.add_pair("good", "morning", 100);

        assert_eq!(dict.frequency("good", "morning"), 100);
        assert_eq!(dict.frequency("morning", "good"), 0);
        assert_eq!(dict.pair_count(), 1);
    }

    #[test]
    fn test_builtin_dictionaries() {
        let english = BuiltinDictionary::english();
        assert!(english.contains("the"));
        assert!(english.contains("good"));
        assert!(english.word_count() > 100);

        let bigrams = BuiltinDictionary::english_bigrams();
        assert!(bigrams.frequency("good", "morning") > 0);
    }
}
