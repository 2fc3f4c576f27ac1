//! Merge passes: grammatical compound merges (pass A) and the literal
//! merge bank (pass B).

use wkc_lexicon::{Lexicon, PosTag};
use wkc_rules::merge::{
    LITERAL_MERGES_BY_LENGTH, PASSIVE_STEM_ENDINGS, SURU_FORMS, SURU_NOUNS, TE_AUXILIARIES,
    TE_CONTINUATIONS,
};
use wkc_tokenise::Token;

use crate::build::best_entry;

fn is_verbal(pos: &str) -> bool {
    PosTag::from_name(pos)
        .map(|tag| tag.is_verb() || matches!(tag, PosTag::Aux | PosTag::AuxV | PosTag::Exp))
        .unwrap_or(false)
}

/// Merge a run of tokens into one. POS and base form come from the
/// surviving left token; the reading is re-looked-up, falling back to the
/// concatenation of the parts.
fn merge_run(lexicon: &Lexicon, run: &[Token]) -> Token {
    let surface: String = run.iter().map(|t| t.surface.as_str()).collect();
    let left = &run[0];
    let (reading, base_form, base_form_id) = match best_entry(lexicon, &surface) {
        Some(entry) => {
            let reading = lexicon
                .kana_reading(entry.seq)
                .map(wkc_ja_utils::kata_to_hira_str)
                .unwrap_or_else(|| run.iter().map(|t| t.reading.as_str()).collect());
            let base_form = lexicon
                .dict_form_text(entry.base_form_id())
                .map(str::to_owned)
                .unwrap_or_else(|| surface.clone());
            (reading, base_form, entry.base_form_id())
        }
        None => (
            run.iter().map(|t| t.reading.as_str()).collect(),
            left.base_form.clone(),
            left.base_form_id,
        ),
    };
    Token {
        surface,
        reading,
        pos: left.pos.clone(),
        base_form,
        base_form_id,
        start: left.start,
        end: run[run.len() - 1].end,
    }
}

fn te_form_merge(left: &Token, right: &Token) -> bool {
    (left.surface.ends_with('て') || left.surface.ends_with('で'))
        && left.char_len() >= 2
        && is_verbal(&left.pos)
        && TE_AUXILIARIES.contains(right.surface.as_str())
}

fn passive_stem_merge(left: &Token, right: &Token) -> bool {
    PASSIVE_STEM_ENDINGS
        .iter()
        .any(|ending| left.surface.ends_with(ending))
        && is_verbal(&left.pos)
        && TE_CONTINUATIONS.contains(right.surface.as_str())
}

fn suru_noun_merge(left: &Token, right: &Token) -> bool {
    SURU_NOUNS.contains(left.surface.as_str()) && SURU_FORMS.contains(right.surface.as_str())
}

/// Pass A: walk pairs and merge grammatical compounds until none fire.
pub fn merge_compounds(lexicon: &Lexicon, tokens: Vec<Token>) -> Vec<Token> {
    let mut tokens = tokens;
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    loop {
        let mut changed = false;
        let mut iter = tokens.into_iter().peekable();
        while let Some(token) = iter.next() {
            let mergeable = iter.peek().map_or(false, |next| {
                te_form_merge(&token, next)
                    || passive_stem_merge(&token, next)
                    || suru_noun_merge(&token, next)
            });
            if mergeable {
                let next = iter.next().unwrap();
                out.push(merge_run(lexicon, &[token, next]));
                changed = true;
            } else {
                out.push(token);
            }
        }
        tokens = std::mem::take(&mut out);
        if !changed {
            return tokens;
        }
    }
}

/// Pass B: the ordered literal merge bank, longest-first, greedy
/// left-to-right.
pub fn literal_merges(lexicon: &Lexicon, tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let mut matched = None;
        for (parts, _) in LITERAL_MERGES_BY_LENGTH.iter() {
            if i + parts.len() <= tokens.len()
                && parts
                    .iter()
                    .zip(&tokens[i..])
                    .all(|(part, token)| token.surface == *part)
            {
                matched = Some(parts.len());
                break;
            }
        }
        match matched {
            Some(len) => {
                out.push(merge_run(lexicon, &tokens[i..i + len]));
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
