//! Verb-sense lemmatization filter.
//!
//! Maps inflected verb forms back to their base form: an irregular-verb
//! table first, then ordered suffix-detachment rules whose candidates are
//! accepted only if they land on a known verb. Words that resolve to no
//! known verb pass through unchanged, so the stage never loses tokens.
//!
//! Both tables are process-wide read-only data.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Irregular verb forms and their base forms.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("did", "do"),
    ("done", "do"),
    ("said", "say"),
    ("went", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("made", "make"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("saw", "see"),
    ("seen", "see"),
    ("came", "come"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("told", "tell"),
    ("felt", "feel"),
    ("found", "find"),
    ("left", "leave"),
    ("kept", "keep"),
    ("began", "begin"),
    ("begun", "begin"),
    ("held", "hold"),
    ("brought", "bring"),
    ("wrote", "write"),
    ("written", "write"),
    ("sat", "sit"),
    ("stood", "stand"),
    ("lost", "lose"),
    ("paid", "pay"),
    ("met", "meet"),
    ("led", "lead"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("read", "read"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("won", "win"),
    ("bought", "buy"),
    ("died", "die"),
    ("dying", "die"),
    ("sent", "send"),
    ("built", "build"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("cut", "cut"),
    ("put", "put"),
    ("ran", "run"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("broke", "break"),
    ("broken", "break"),
    ("heard", "hear"),
    ("spent", "spend"),
    ("sold", "sell"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("hurt", "hurt"),
    ("meant", "mean"),
    ("lay", "lie"),
];

/// Base forms the suffix rules are allowed to land on.
const KNOWN_VERBS: &[&str] = &[
    "be", "have", "do", "say", "go", "get", "make", "know", "think", "see", "come", "take",
    "give", "tell", "feel", "find", "leave", "keep", "begin", "hold", "bring", "write", "sit",
    "stand", "lose", "pay", "meet", "lead", "speak", "read", "grow", "win", "buy", "die", "send",
    "build", "fall", "cut", "put", "run", "eat", "break", "hear", "spend", "sell", "catch",
    "teach", "hurt", "mean", "lie", "want", "use", "work", "call", "try", "ask", "need", "seem",
    "help", "talk", "turn", "start", "show", "play", "move", "like", "live", "believe", "happen",
    "include", "continue", "set", "learn", "change", "understand", "watch", "follow", "stop",
    "create", "allow", "add", "open", "walk", "offer", "remember", "love", "consider", "wait",
    "serve", "expect", "stay", "reach", "kill", "remain", "suggest", "raise", "pass", "require",
    "report", "decide", "pull", "hope", "smile", "vote", "dance", "close", "miss", "care",
    "wish", "worry", "thank", "visit", "plan", "share", "agree", "hate", "enjoy", "laugh",
    "cry", "fear", "scare", "bless", "pray", "test", "cough", "wear", "mask", "carry", "study",
    "look", "end", "save", "protect", "spread", "wash", "cancel", "travel", "recover",
];

static IRREGULAR_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_VERBS.iter().copied().collect());

static KNOWN_VERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KNOWN_VERBS.iter().copied().collect());

/// Suffix-detachment rules tried in order; the first candidate that lands
/// on a known verb wins.
const DETACHMENT_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ied", "y"),
    ("ing", "e"),
    ("ing", ""),
    ("ed", "e"),
    ("ed", ""),
    ("es", "e"),
    ("es", ""),
    ("s", ""),
];

/// Lemmatize a single word as a verb.
///
/// Returns the word unchanged when it resolves to no known base form.
pub fn lemmatize_verb(word: &str) -> String {
    if let Some(base) = IRREGULAR_MAP.get(word) {
        return (*base).to_string();
    }
    if KNOWN_VERB_SET.contains(word) {
        return word.to_string();
    }

    for (suffix, replacement) in DETACHMENT_RULES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        let candidate = format!("{stem}{replacement}");
        if KNOWN_VERB_SET.contains(candidate.as_str()) {
            return candidate;
        }
        // Undo consonant doubling: running -> runn -> run.
        if replacement.is_empty() {
            let bytes = candidate.as_bytes();
            if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
                let undoubled = &candidate[..candidate.len() - 1];
                if KNOWN_VERB_SET.contains(undoubled) {
                    return undoubled.to_string();
                }
            }
        }
    }

    word.to_string()
}

/// Filter that applies verb-sense lemmatization to tokens.
#[derive(Clone, Debug, Default)]
pub struct LemmaFilter;

impl LemmaFilter {
    /// Create a new lemmatization filter.
    pub fn new() -> Self {
        LemmaFilter
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lemma = lemmatize_verb(&token.text);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_irregular_verbs() {
        assert_eq!(lemmatize_verb("went"), "go");
        assert_eq!(lemmatize_verb("was"), "be");
        assert_eq!(lemmatize_verb("thought"), "think");
    }

    #[test]
    fn test_regular_suffixes() {
        assert_eq!(lemmatize_verb("loved"), "love");
        assert_eq!(lemmatize_verb("watches"), "watch");
        assert_eq!(lemmatize_verb("carried"), "carry");
        assert_eq!(lemmatize_verb("talks"), "talk");
        assert_eq!(lemmatize_verb("going"), "go");
    }

    #[test]
    fn test_consonant_doubling_undone() {
        assert_eq!(lemmatize_verb("running"), "run");
        assert_eq!(lemmatize_verb("stopped"), "stop");
    }

    #[test]
    fn test_unknown_words_unchanged() {
        assert_eq!(lemmatize_verb("covid"), "covid");
        assert_eq!(lemmatize_verb("virus"), "virus");
    }

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new();
        let tokens = vec![Token::new("went", 0), Token::new("loved", 1)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "go");
        assert_eq!(result[1].text, "love");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LemmaFilter::new().name(), "lemma");
    }
}
