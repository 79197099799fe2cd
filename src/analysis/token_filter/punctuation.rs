//! Punctuation filter implementation.
//!
//! This module provides a filter that strips a fixed set of punctuation
//! marks from each token. The mark set is process-wide read-only data; the
//! toggle only controls whether the stage runs at all.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::emoji;
use crate::error::Result;

/// Fixed punctuation-mark set stripped by this stage.
///
/// Covers ASCII sentence punctuation plus the inverted Spanish marks that
/// show up in the corpus this pipeline was built for.
const PUNCTUATION_MARKS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '¡', '¿', '"', '\'', '`', '´', '(', ')', '[', ']', '{', '}', '*',
    '&', '%', '$', '+', '-', '—', '|', '~', '^', '·', '…', '“', '”', '‘', '’',
];

static PUNCTUATION_SET: LazyLock<HashSet<char>> =
    LazyLock::new(|| PUNCTUATION_MARKS.iter().copied().collect());

/// A filter that strips punctuation marks from tokens.
///
/// Tokens reduced to the empty string are dropped. When
/// `preserve_emoticons` is set, tokens that are recognized ASCII emoticons
/// (`:)`, `:D`, ...) pass through untouched so a later textualize stage can
/// rewrite them; without it they would be destroyed here first.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter {
    preserve_emoticons: bool,
}

impl PunctuationFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationFilter {
            preserve_emoticons: false,
        }
    }

    /// Set whether recognized emoticon tokens are exempt from stripping.
    pub fn preserve_emoticons(mut self, preserve: bool) -> Self {
        self.preserve_emoticons = preserve;
        self
    }

    /// Check if a character is in the fixed punctuation set.
    pub fn is_punctuation(c: char) -> bool {
        PUNCTUATION_SET.contains(&c)
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let preserve = self.preserve_emoticons;
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if preserve && emoji::emoticon_name(&token.text).is_some() {
                    return Some(token);
                }
                let stripped: String = token
                    .text
                    .chars()
                    .filter(|c| !Self::is_punctuation(*c))
                    .collect();
                if stripped.is_empty() {
                    None
                } else {
                    Some(token.with_text(stripped))
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
