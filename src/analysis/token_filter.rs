//! Token filter implementations for the normalization stages.
//!
//! Each stage of the normalization pipeline is a [`Filter`]: a pure
//! transformation from token stream to token stream. Any token that becomes
//! empty inside a stage is dropped by that stage, never passed along.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod emoji;
pub mod lemma;
pub mod length;
pub mod lowercase;
pub mod markup;
pub mod numeric;
pub mod punctuation;
pub mod spell;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use emoji::EmojiFilter;
pub use lemma::LemmaFilter;
pub use length::LengthFilter;
pub use lowercase::LowercaseFilter;
pub use markup::MarkupFilter;
pub use numeric::NumericFilter;
pub use punctuation::PunctuationFilter;
pub use spell::SpellCorrectFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
