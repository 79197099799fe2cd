//! Spell-correction filter implementation.
//!
//! The single expensive stage of the pipeline. The underlying
//! [`CompoundCorrector`] and its dictionaries are built once per pipeline
//! instance and shared read-only across every lookup (and across worker
//! threads during parallel batch runs).

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::spelling::CompoundCorrector;
use crate::spelling::corrector::Correction;

/// A filter that replaces each token with its best compound correction.
///
/// A correction that splits into two words emits both as separate tokens; a
/// token with no reachable correction is dropped.
#[derive(Clone)]
pub struct SpellCorrectFilter {
    corrector: Arc<CompoundCorrector>,
}

impl SpellCorrectFilter {
    /// Create a new spell-correction filter with the built-in dictionaries.
    pub fn new() -> Self {
        SpellCorrectFilter {
            corrector: Arc::new(CompoundCorrector::new()),
        }
    }

    /// Create a spell-correction filter sharing an existing corrector.
    pub fn with_corrector(corrector: Arc<CompoundCorrector>) -> Self {
        SpellCorrectFilter { corrector }
    }
}

impl Default for SpellCorrectFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpellCorrectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellCorrectFilter").finish()
    }
}

impl Filter for SpellCorrectFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let corrector = Arc::clone(&self.corrector);
        let filtered_tokens: Vec<Token> = tokens
            .flat_map(|token| match corrector.lookup_compound(&token.text) {
                Some(Correction::Single(word)) => vec![token.with_text(word)],
                Some(Correction::Split(first, second)) => {
                    vec![token.with_text(first), token.with_text(second)]
                }
                None => Vec::new(),
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "spell"
    }
}
