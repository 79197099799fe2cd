//! Emoji filter implementation.
//!
//! Emoji carry a lot of the sentiment signal in social-media text, so this
//! stage supports three behaviors selected by [`EmojiMode`]: leave glyphs
//! alone, strip them, or rewrite each one to its textual name so it becomes
//! an ordinary vocabulary word. ASCII emoticons such as `:)` are covered by
//! the same name table.
//!
//! The glyph and emoticon tables are process-wide read-only data.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::config::EmojiMode;
use crate::error::Result;

/// Textual names for common emoji glyphs.
const EMOJI_NAMES: &[(&str, &str)] = &[
    ("😀", "grinning_face"),
    ("😃", "grinning_face_with_big_eyes"),
    ("😄", "grinning_face_with_smiling_eyes"),
    ("😁", "beaming_face_with_smiling_eyes"),
    ("😆", "grinning_squinting_face"),
    ("😅", "grinning_face_with_sweat"),
    ("🤣", "rolling_on_the_floor_laughing"),
    ("😂", "face_with_tears_of_joy"),
    ("🙂", "slightly_smiling_face"),
    ("😉", "winking_face"),
    ("😊", "smiling_face_with_smiling_eyes"),
    ("😍", "smiling_face_with_heart_eyes"),
    ("😘", "face_blowing_a_kiss"),
    ("😋", "face_savoring_food"),
    ("😛", "face_with_tongue"),
    ("😜", "winking_face_with_tongue"),
    ("🤔", "thinking_face"),
    ("😐", "neutral_face"),
    ("😑", "expressionless_face"),
    ("😏", "smirking_face"),
    ("😒", "unamused_face"),
    ("🙄", "face_with_rolling_eyes"),
    ("😔", "pensive_face"),
    ("😪", "sleepy_face"),
    ("😴", "sleeping_face"),
    ("😷", "face_with_medical_mask"),
    ("🤒", "face_with_thermometer"),
    ("🤕", "face_with_head_bandage"),
    ("🤢", "nauseated_face"),
    ("🤮", "face_vomiting"),
    ("🥵", "hot_face"),
    ("🥶", "cold_face"),
    ("😵", "face_with_crossed_out_eyes"),
    ("😎", "smiling_face_with_sunglasses"),
    ("😕", "confused_face"),
    ("😟", "worried_face"),
    ("🙁", "slightly_frowning_face"),
    ("☹", "frowning_face"),
    ("😮", "face_with_open_mouth"),
    ("😲", "astonished_face"),
    ("😳", "flushed_face"),
    ("🥺", "pleading_face"),
    ("😢", "crying_face"),
    ("😭", "loudly_crying_face"),
    ("😱", "face_screaming_in_fear"),
    ("😖", "confounded_face"),
    ("😞", "disappointed_face"),
    ("😓", "downcast_face_with_sweat"),
    ("😩", "weary_face"),
    ("😫", "tired_face"),
    ("🥱", "yawning_face"),
    ("😤", "face_with_steam_from_nose"),
    ("😡", "pouting_face"),
    ("😠", "angry_face"),
    ("🤬", "face_with_symbols_on_mouth"),
    ("💀", "skull"),
    ("💩", "pile_of_poo"),
    ("❤", "red_heart"),
    ("❤️", "red_heart"),
    ("💔", "broken_heart"),
    ("💕", "two_hearts"),
    ("💖", "sparkling_heart"),
    ("👍", "thumbs_up"),
    ("👎", "thumbs_down"),
    ("👏", "clapping_hands"),
    ("🙏", "folded_hands"),
    ("💪", "flexed_biceps"),
    ("🔥", "fire"),
    ("✨", "sparkles"),
    ("🎉", "party_popper"),
    ("⭐", "star"),
    ("☀", "sun"),
    ("🌧", "cloud_with_rain"),
    ("🦠", "microbe"),
    ("💉", "syringe"),
    ("😇", "smiling_face_with_halo"),
    ("🥰", "smiling_face_with_hearts"),
];

/// Textual names for ASCII emoticons.
const EMOTICON_NAMES: &[(&str, &str)] = &[
    (":)", "slightly_smiling_face"),
    (":-)", "slightly_smiling_face"),
    ("=)", "slightly_smiling_face"),
    (":(", "frowning_face"),
    (":-(", "frowning_face"),
    ("=(", "frowning_face"),
    (":D", "grinning_face"),
    (":-D", "grinning_face"),
    (";)", "winking_face"),
    (";-)", "winking_face"),
    (":P", "face_with_tongue"),
    (":p", "face_with_tongue"),
    (":-P", "face_with_tongue"),
    (":/", "confused_face"),
    (":-/", "confused_face"),
    (":|", "neutral_face"),
    (":o", "face_with_open_mouth"),
    (":O", "face_with_open_mouth"),
    (":'(", "crying_face"),
    (":*", "face_blowing_a_kiss"),
    ("xD", "grinning_squinting_face"),
    ("XD", "grinning_squinting_face"),
    ("<3", "red_heart"),
    ("</3", "broken_heart"),
];

static EMOJI_NAME_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EMOJI_NAMES.iter().copied().collect());

static EMOTICON_NAME_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EMOTICON_NAMES.iter().copied().collect());

/// Look up the textual name of an exact ASCII emoticon token.
pub fn emoticon_name(token: &str) -> Option<&'static str> {
    EMOTICON_NAME_MAP.get(token).copied()
}

/// Look up the textual name of a single emoji glyph.
pub fn glyph_name(glyph: &str) -> Option<&'static str> {
    EMOJI_NAME_MAP.get(glyph).copied()
}

/// Check if a character belongs to the emoji blocks this stage recognizes.
pub fn is_emoji_char(c: char) -> bool {
    matches!(u32::from(c),
        0x1F300..=0x1F5FF // symbols and pictographs
        | 0x1F600..=0x1F64F // emoticons
        | 0x1F680..=0x1F6FF // transport and map symbols
        | 0x1F900..=0x1F9FF // supplemental symbols
        | 0x1FA70..=0x1FAFF // extended pictographs
        | 0x2600..=0x26FF // miscellaneous symbols
        | 0x2700..=0x27BF // dingbats
        | 0x2B00..=0x2BFF // arrows and stars
        | 0x1F1E6..=0x1F1FF // regional indicators
        | 0xFE0F // variation selector-16
        | 0x200D // zero width joiner
        | 0x20E3 // combining enclosing keycap
    )
}

/// A filter that strips emoji or rewrites them to their textual names.
///
/// In `Textualize` mode a token containing both text and emoji is split:
/// the text runs and the glyph names are emitted as separate tokens.
/// Glyphs with no entry in the name table are kept as-is, mirroring how
/// demojization leaves unknown codepoints alone.
#[derive(Clone, Debug)]
pub struct EmojiFilter {
    mode: EmojiMode,
}

impl EmojiFilter {
    /// Create a new emoji filter with the given mode.
    pub fn new(mode: EmojiMode) -> Self {
        EmojiFilter { mode }
    }

    /// Remove all recognized emoji characters from a token's text.
    fn strip_glyphs(text: &str) -> String {
        text.chars().filter(|c| !is_emoji_char(*c)).collect()
    }

    /// Split a token into text runs and glyph names.
    fn textualize(text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut run = String::new();

        for c in text.chars() {
            if is_emoji_char(c) {
                // Invisible joiners and selectors carry no name of their
                // own and must not leak into the token stream.
                if matches!(u32::from(c), 0xFE0F | 0x200D | 0x20E3) {
                    continue;
                }
                let glyph = c.to_string();
                match glyph_name(&glyph) {
                    Some(name) => {
                        if !run.is_empty() {
                            out.push(std::mem::take(&mut run));
                        }
                        out.push(name.to_string());
                    }
                    // Unknown glyph: keep it in the current run.
                    None => run.push(c),
                }
            } else {
                run.push(c);
            }
        }
        if !run.is_empty() {
            out.push(run);
        }
        out
    }
}

impl Filter for EmojiFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = match self.mode {
            EmojiMode::Keep => tokens.collect(),
            EmojiMode::Strip => tokens
                .filter_map(|token| {
                    let stripped = Self::strip_glyphs(&token.text);
                    if stripped.is_empty() {
                        None
                    } else {
                        Some(token.with_text(stripped))
                    }
                })
                .collect(),
            EmojiMode::Textualize => tokens
                .flat_map(|token| {
                    if let Some(name) = emoticon_name(&token.text) {
                        return vec![token.with_text(name)];
                    }
                    Self::textualize(&token.text)
                        .into_iter()
                        .filter(|text| !text.is_empty())
                        .map(|text| token.with_text(text))
                        .collect()
                })
                .collect(),
        };

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "emoji"
    }
}
