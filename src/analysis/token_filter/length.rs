//! Length filter implementation.

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Default maximum token length in characters (exclusive).
pub const DEFAULT_MAX_CHARS: usize = 20;

/// A filter that removes overly long tokens.
///
/// Tokens of `max_chars` characters or more are dropped entirely. Mashed
/// hashtag chains and keyboard smashes tend to exceed this bound while no
/// real English word does.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    max_chars: usize,
}

impl LengthFilter {
    /// Create a new length filter with the default bound.
    pub fn new() -> Self {
        LengthFilter {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    /// Create a length filter with a custom bound (exclusive).
    pub fn with_max_chars(max_chars: usize) -> Self {
        LengthFilter { max_chars }
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let max_chars = self.max_chars;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.text.chars().count() < max_chars)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
