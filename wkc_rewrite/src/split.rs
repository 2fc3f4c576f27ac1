//! Pass C: suffix-based splits, applied top-down per token, then the
//! substitution bank.

use wkc_ja_utils::is_kanji;
use wkc_lexicon::Lexicon;
use wkc_rules::split::{
    COMPOUND_VERB_SPLITS, COPULA_SPLIT_ENDINGS, EXPLANATORY_N_BASE_ENDINGS,
    INTERNAL_PARTICLE_SPLIT_ENABLED, PREFIX_PARTICLE_SPLITS, SPLITTABLE_PARTICLES,
};
use wkc_rules::subst::SUBSTITUTIONS_BY_LENGTH;
use wkc_tokenise::Token;

use crate::build::token_from_lexicon;

/// Split one token into pieces at the given surface boundaries, resolving
/// each piece against the lexicon.
fn split_token(lexicon: &Lexicon, token: &Token, pieces: &[&str]) -> Vec<Token> {
    debug_assert_eq!(pieces.concat(), token.surface);
    let mut out = Vec::with_capacity(pieces.len());
    let mut start = token.start;
    for &piece in pieces {
        let end = start + piece.len();
        out.push(token_from_lexicon(lexicon, piece, start, end));
        start = end;
    }
    out
}

/// Surface boundaries for a token, or `None` when no split rule fires.
fn split_decision<'a>(lexicon: &Lexicon, token: &'a Token) -> Option<Vec<&'a str>> {
    let surface = token.surface.as_str();
    let char_len = token.char_len();

    // 1. explicit compound-verb splits
    if let Some(parts) = COMPOUND_VERB_SPLITS.get(surface) {
        return Some(parts.to_vec());
    }

    // 2. prefix-particle patterns; the remainder must be a key
    for (pattern, head, rest) in PREFIX_PARTICLE_SPLITS {
        if surface == *pattern && lexicon.contains_key(rest) {
            return Some(vec![*head, *rest]);
        }
    }

    // 3. internal-particle scan, currently parked
    if INTERNAL_PARTICLE_SPLIT_ENABLED {
        if let Some(pieces) = internal_particle_split(lexicon, surface) {
            return Some(pieces);
        }
    }

    let no_split = wkc_rules::split::is_no_split(surface);

    // 4. rightmost splittable particle, when the base survives as a key
    if !no_split && char_len > 1 {
        let last = surface.chars().last()?;
        if SPLITTABLE_PARTICLES.contains(&last) {
            let cut = surface.len() - last.len_utf8();
            let base = &surface[..cut];
            let base_chars = char_len - 1;
            let base_ok = base_chars >= 2
                || (base_chars == 1 && base.chars().next().map(is_kanji).unwrap_or(false));
            if base_ok && lexicon.contains_key(base) {
                return Some(vec![base, &surface[cut..]]);
            }
        }
    }

    // 5. copula peel from ようだ/はずだ/からだ endings
    if char_len >= 3 {
        for (ending, copula) in COPULA_SPLIT_ENDINGS {
            if surface.ends_with(ending) {
                let cut = surface.len() - copula.len();
                return Some(vec![&surface[..cut], &surface[cut..]]);
            }
        }
    }

    // 6. conditional ば splitting stays off

    // 7. explanatory ん when the base is a key with a verbal ending
    if !no_split && char_len > 1 && surface.ends_with('ん') {
        let cut = surface.len() - 'ん'.len_utf8();
        let base = &surface[..cut];
        let base_ends_well = base
            .chars()
            .last()
            .map(|c| EXPLANATORY_N_BASE_ENDINGS.contains(&c))
            .unwrap_or(false);
        if base_ends_well && lexicon.contains_key(base) {
            return Some(vec![base, &surface[cut..]]);
        }
    }

    None
}

/// Hook for splitting a particle out of the middle of a compound. The
/// scan exists so the pass ordering stays visible, but the gate above it
/// is off.
fn internal_particle_split<'a>(lexicon: &Lexicon, surface: &'a str) -> Option<Vec<&'a str>> {
    for (idx, c) in surface.char_indices().skip(1) {
        if !SPLITTABLE_PARTICLES.contains(&c) {
            continue;
        }
        let cut = idx + c.len_utf8();
        if cut >= surface.len() {
            continue;
        }
        let (head, tail) = (&surface[..idx], &surface[cut..]);
        if lexicon.contains_key(head) && lexicon.contains_key(tail) {
            return Some(vec![head, &surface[idx..cut], tail]);
        }
    }
    None
}

/// Pass C proper: apply split decisions to every token.
pub fn split_pass(lexicon: &Lexicon, tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        match split_decision(lexicon, &token) {
            Some(pieces) => out.extend(split_token(lexicon, &token, &pieces)),
            None => out.push(token),
        }
    }
    out
}

/// The substitution bank: literal runs of surfaces rewritten in place,
/// longest pattern first, greedy left-to-right.
pub fn substitutions(lexicon: &Lexicon, tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let mut applied = None;
        for (pattern, replacement) in SUBSTITUTIONS_BY_LENGTH.iter() {
            if i + pattern.len() <= tokens.len()
                && pattern
                    .iter()
                    .zip(&tokens[i..])
                    .all(|(part, token)| token.surface == *part)
            {
                applied = Some((pattern.len(), *replacement));
                break;
            }
        }
        match applied {
            Some((len, replacement)) => {
                let start = tokens[i].start;
                let mut cursor = start;
                for &piece in replacement {
                    let end = cursor + piece.len();
                    out.push(token_from_lexicon(lexicon, piece, cursor, end));
                    cursor = end;
                }
                debug_assert_eq!(cursor, tokens[i + len - 1].end);
                i += len;
            }
            None => {
                out.push(tokens[i].clone());
                i += 1;
            }
        }
    }
    out
}
