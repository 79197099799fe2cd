//! Markup filter implementation.
//!
//! Strips URL-looking, HTML-tag-looking, hashtag-looking, and
//! mention-looking substrings from tokens. The patterns are process-wide
//! read-only data compiled once.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Matches URLs, HTML tags, hashtags, and @-mentions inside a token.
static MARKUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?\S*|www\.\S*|<[^>]*>|#\S*|@\S*").expect("markup pattern is valid")
});

/// A filter that removes web markup from tokens.
///
/// Tokens reduced to the empty string (a bare URL or mention) are dropped.
#[derive(Clone, Debug, Default)]
pub struct MarkupFilter;

impl MarkupFilter {
    /// Create a new markup filter.
    pub fn new() -> Self {
        MarkupFilter
    }
}

impl Filter for MarkupFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                let stripped = MARKUP_PATTERN.replace_all(&token.text, "");
                if stripped.is_empty() {
                    None
                } else if stripped == token.text {
                    Some(token)
                } else {
                    Some(token.with_text(stripped.into_owned()))
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "markup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(texts: &[&str]) -> Vec<String> {
        let filter = MarkupFilter::new();
        let tokens: Vec<Token> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Token::new(*t, i))
            .collect();
        filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_urls_dropped() {
        assert_eq!(
            run(&["see", "https://example.com/x", "http://t.co/abc"]),
            vec!["see"]
        );
    }

    #[test]
    fn test_hashtags_and_mentions_dropped() {
        assert_eq!(run(&["#covid", "@someone", "fine"]), vec!["fine"]);
    }

    #[test]
    fn test_html_tags_stripped_inside_token() {
        assert_eq!(run(&["<br>text", "<a href=x>"]), vec!["text"]);
    }

    #[test]
    fn test_plain_tokens_untouched() {
        assert_eq!(run(&["hello", "world"]), vec!["hello", "world"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MarkupFilter::new().name(), "markup");
    }
}
