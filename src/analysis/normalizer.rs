//! The normalization pipeline.
//!
//! [`Normalizer`] turns raw document text into a canonical token sequence by
//! running a fixed, order-sensitive chain of filter stages. The order is a
//! contract: punctuation stripping before stop-word removal changes which
//! tokens match the stop-word set, so callers must never reorder stages.
//!
//! The stage chain, each part individually toggled by
//! [`NormalizationConfig`]:
//!
//! 1. drop tokens containing digits
//! 2. drop tokens of 20+ characters
//! 3. lowercase
//! 4. strip punctuation marks
//! 5. remove stop words
//! 6. strip or textualize emoji
//! 7. strip URLs, HTML tags, hashtags, mentions
//! 8. compound spell correction
//! 9. Porter stemming or verb lemmatization (mutually exclusive)
//! 10. alphabetical sort of the result
//!
//! A `Normalizer` is a pure function of its input and config; no state
//! survives between documents. The spell dictionaries are the one expensive
//! resource: they are built once at construction and shared read-only, so a
//! single `Normalizer` can be used from many worker threads.
//!
//! # Examples
//!
//! ```
//! use polarity::analysis::Normalizer;
//! use polarity::config::NormalizationConfig;
//!
//! let normalizer = Normalizer::new(NormalizationConfig::default());
//! let tokens = normalizer.normalize("GOOD news!").unwrap();
//! assert_eq!(tokens, vec!["good", "news"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{
    EmojiFilter, Filter, LemmaFilter, LengthFilter, LowercaseFilter, MarkupFilter, NumericFilter,
    PunctuationFilter, SpellCorrectFilter, StemFilter, StopFilter,
};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::config::{EmojiMode, NormalizationConfig};
use crate::error::Result;
use crate::spelling::CompoundCorrector;

/// A configurable, fixed-order normalization pipeline.
pub struct Normalizer {
    config: NormalizationConfig,
    tokenizer: WhitespaceTokenizer,
    filters: Vec<Arc<dyn Filter>>,
}

impl Normalizer {
    /// Create a normalizer for the given config, building the spell
    /// dictionaries once if spell correction is enabled.
    pub fn new(config: NormalizationConfig) -> Self {
        Self::with_corrector(config, None)
    }

    /// Create a normalizer that shares a pre-built spell corrector.
    ///
    /// When `corrector` is `None` and the config enables spell correction,
    /// the built-in dictionaries are loaded here, once.
    pub fn with_corrector(
        config: NormalizationConfig,
        corrector: Option<Arc<CompoundCorrector>>,
    ) -> Self {
        let config = config.validated();
        let mut filters: Vec<Arc<dyn Filter>> = Vec::new();

        if config.drop_numeric_tokens {
            filters.push(Arc::new(NumericFilter::new()));
        }
        if config.drop_long_tokens {
            filters.push(Arc::new(LengthFilter::new()));
        }
        if config.lowercase {
            filters.push(Arc::new(LowercaseFilter::new()));
        }
        if config.strip_punctuation {
            // Emoticons survive punctuation stripping only when a later
            // textualize stage will turn them into words.
            let preserve = config.emoji_mode == EmojiMode::Textualize;
            filters.push(Arc::new(PunctuationFilter::new().preserve_emoticons(preserve)));
        }
        if config.drop_stopwords {
            filters.push(Arc::new(StopFilter::new()));
        }
        if config.emoji_mode != EmojiMode::Keep {
            filters.push(Arc::new(EmojiFilter::new(config.emoji_mode)));
        }
        if config.strip_urls_tags_mentions {
            filters.push(Arc::new(MarkupFilter::new()));
        }
        if config.spell_correct {
            let corrector = corrector.unwrap_or_else(|| Arc::new(CompoundCorrector::new()));
            filters.push(Arc::new(SpellCorrectFilter::with_corrector(corrector)));
        }
        if config.stem {
            filters.push(Arc::new(StemFilter::new()));
        } else if config.effective_lemmatize() {
            filters.push(Arc::new(LemmaFilter::new()));
        }

        Normalizer {
            config,
            tokenizer: WhitespaceTokenizer::new(),
            filters,
        }
    }

    /// Get the config this normalizer was built from.
    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    /// Names of the active stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Normalize raw document text into a sorted token sequence.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        self.run_filters(tokens)
    }

    /// Normalize an already-tokenized sequence.
    pub fn normalize_tokens<I, S>(&self, tokens: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .map(|s| s.into())
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(position, text)| Token::new(text, position))
            .collect();
        self.run_filters(Box::new(tokens.into_iter()))
    }

    fn run_filters(&self, mut tokens: TokenStream) -> Result<Vec<String>> {
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        let mut out: Vec<String> = tokens
            .map(|token| token.text)
            .filter(|text| !text.is_empty())
            .collect();
        out.sort_unstable();
        Ok(out)
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("tokenizer", &self.tokenizer.name())
            .field("stages", &self.stage_names())
            .finish()
    }
}
