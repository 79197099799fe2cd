//! Numeric filter implementation.

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that removes tokens containing any digit.
///
/// Social-media corpora are full of timestamps, counts, and phone-number
/// fragments that carry no sentiment signal; this stage drops the whole
/// token rather than stripping the digits out of it.
#[derive(Clone, Debug, Default)]
pub struct NumericFilter;

impl NumericFilter {
    /// Create a new numeric filter.
    pub fn new() -> Self {
        NumericFilter
    }
}

impl Filter for NumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !token.text.chars().any(|c| c.is_numeric()))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "numeric"
    }
}
