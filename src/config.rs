//! Normalization configuration and its JSON persistence.
//!
//! A [`NormalizationConfig`] is captured once per run by an external
//! collaborator (CLI flags or a stored `parameters.json`) and passed into the
//! core by value; the core never prompts for it. The file written at
//! training time is read back at classification time so inference uses the
//! exact training-time pipeline.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};

/// File name used for persisted normalization parameters.
pub const PARAMETERS_FILE_NAME: &str = "parameters.json";

/// How the emoji stage treats emoji glyphs and emoticons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiMode {
    /// Leave emoji untouched.
    Keep,
    /// Remove emoji glyphs entirely.
    Strip,
    /// Replace each emoji with its textual name.
    #[default]
    Textualize,
}

/// Toggles for the normalization pipeline stages.
///
/// The stage *order* is fixed by the pipeline; these flags only control
/// whether each stage runs. The config is immutable once a run starts.
///
/// Invariant: stemming and lemmatization are mutually exclusive. When both
/// flags are set, stemming wins and lemmatization is forced off by
/// [`NormalizationConfig::validated`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Drop tokens containing any digit.
    pub drop_numeric_tokens: bool,
    /// Drop tokens of 20 characters or more.
    pub drop_long_tokens: bool,
    /// Lowercase every token.
    pub lowercase: bool,
    /// Strip the fixed punctuation-mark set from each token.
    pub strip_punctuation: bool,
    /// Remove tokens present in the fixed stop-word set.
    pub drop_stopwords: bool,
    /// Emoji handling mode.
    pub emoji_mode: EmojiMode,
    /// Strip URL-, HTML-tag-, hashtag-, and mention-looking substrings.
    pub strip_urls_tags_mentions: bool,
    /// Run compound spell correction against the frequency dictionaries.
    pub spell_correct: bool,
    /// Apply Porter stemming.
    pub stem: bool,
    /// Apply verb-sense lemmatization (ignored when `stem` is set).
    pub lemmatize: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        NormalizationConfig {
            drop_numeric_tokens: true,
            drop_long_tokens: true,
            lowercase: true,
            strip_punctuation: true,
            drop_stopwords: true,
            emoji_mode: EmojiMode::Textualize,
            strip_urls_tags_mentions: true,
            spell_correct: false,
            stem: false,
            lemmatize: true,
        }
    }
}

impl NormalizationConfig {
    /// Return this config with the stem/lemmatize invariant enforced.
    pub fn validated(mut self) -> Self {
        if self.stem {
            self.lemmatize = false;
        }
        self
    }

    /// Whether lemmatization is effectively enabled.
    pub fn effective_lemmatize(&self) -> bool {
        self.lemmatize && !self.stem
    }

    /// Write this config as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a config from a JSON file, enforcing invariants.
    ///
    /// A missing file is fatal for classification runs; callers surface the
    /// I/O error immediately rather than substituting defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PolarityError::config(format!(
                "cannot read parameters file {}: {e}",
                path.display()
            ))
        })?;
        let config: NormalizationConfig = serde_json::from_reader(BufReader::new(file))?;
        Ok(config.validated())
    }
}
