//! Text analysis module for Polarity.
//!
//! This module provides the normalization pipeline: tokenization, the
//! individually-toggleable filter stages, and the [`Normalizer`] that wires
//! them together in their fixed contractual order.
//!
//! [`Normalizer`]: normalizer::Normalizer

pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use normalizer::Normalizer;
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
