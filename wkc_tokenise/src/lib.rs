use serde::{Deserialize, Serialize};

/// POS string for spans the lexicon does not cover.
pub const POS_UNKNOWN: &str = "unk";
/// POS string for sentence separators emitted by the facade.
pub const POS_PUNCT: &str = "punc";
/// POS string for synthesized number-plus-counter tokens.
pub const POS_COUNTER: &str = "ctr";

/// One token of analyzed text. Owns its strings, so it outlives every
/// internal structure it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    /// Hiragana-normalized kana reading; the surface itself when no
    /// reading is known.
    pub reading: String,
    pub pos: String,
    pub base_form: String,
    /// Sequence id of the dictionary form; 0 for unknown spans and
    /// synthesized tokens.
    pub base_form_id: u32,
    /// Half-open byte range into the NFC-normalized input.
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn is_unknown(&self) -> bool {
        self.pos == POS_UNKNOWN
    }

    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }
}

pub trait Tokeniser {
    type Error: std::error::Error;

    fn tokenise(&self, input: &str) -> Result<Vec<Token>, Self::Error>;
}
