//! Token construction against the lexicon: the one place readings, POS
//! strings, and base forms are resolved.

use tracing::warn;
use wkc_ja_utils::kata_to_hira_str;
use wkc_lexicon::{Lexicon, WordEntry};
use wkc_tokenise::{Token, POS_UNKNOWN};

/// The entry that represents a surface when several share it: lowest
/// cost, then lowest seq.
pub fn best_entry(lexicon: &Lexicon, surface: &str) -> Option<WordEntry> {
    lexicon
        .lookup(surface)
        .into_iter()
        .min_by_key(|e| (e.cost, e.seq))
}

/// Build a token from a chosen lexicon entry.
pub fn token_from_entry(lexicon: &Lexicon, entry: &WordEntry, start: usize, end: usize) -> Token {
    let surface = entry.surface.clone();
    let reading = lexicon
        .kana_reading(entry.seq)
        .map(kata_to_hira_str)
        .unwrap_or_else(|| kata_to_hira_str(&surface));
    let base_id = entry.base_form_id();
    match lexicon.dict_form_text(base_id) {
        Some(base_form) => Token {
            reading,
            pos: entry.pos().name().to_owned(),
            base_form: base_form.to_owned(),
            base_form_id: base_id,
            surface,
            start,
            end,
        },
        None => {
            // recoverable: the artifact references a sequence absent
            // from the base-form table
            warn!(seq = entry.seq, base_id, "base form missing for sequence");
            Token {
                reading,
                pos: POS_UNKNOWN.to_owned(),
                base_form: surface.clone(),
                base_form_id: 0,
                surface,
                start,
                end,
            }
        }
    }
}

/// Build a token for a surface by lookup, falling back to an unknown-span
/// token when the lexicon has nothing.
pub fn token_from_lexicon(lexicon: &Lexicon, surface: &str, start: usize, end: usize) -> Token {
    match best_entry(lexicon, surface) {
        Some(entry) => token_from_entry(lexicon, &entry, start, end),
        None => unknown_token(surface, start, end),
    }
}

/// A token over a span the lexicon does not cover.
pub fn unknown_token(surface: &str, start: usize, end: usize) -> Token {
    Token {
        surface: surface.to_owned(),
        reading: kata_to_hira_str(surface),
        pos: POS_UNKNOWN.to_owned(),
        base_form: surface.to_owned(),
        base_form_id: 0,
        start,
        end,
    }
}
