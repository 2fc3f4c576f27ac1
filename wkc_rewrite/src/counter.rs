//! Counter recognition over the raw token stream: a run of tokens that
//! spells number-plus-counter collapses into one synthesized token with a
//! computed reading.

use wkc_rules::counters::{is_numeric_char, recognize_counter};
use wkc_tokenise::{Token, POS_COUNTER};

/// Replace token runs covering a counter expression. `text` is the full
/// sentence run the token offsets index into.
pub fn counter_pass(text: &str, tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let starts_numeric = token.surface.chars().next().map(is_numeric_char).unwrap_or(false);
        if !starts_numeric {
            out.push(token.clone());
            i += 1;
            continue;
        }
        let tail = &text[token.start..];
        let candidate = recognize_counter(tail).and_then(|m| {
            let end = token.start + m.len;
            // the expression must land exactly on a token boundary
            let mut j = i;
            while j < tokens.len() && tokens[j].end < end {
                j += 1;
            }
            (j < tokens.len() && tokens[j].end == end).then_some((m, j))
        });
        match candidate {
            Some((m, j)) => {
                let start = token.start;
                let end = start + m.len;
                out.push(Token {
                    surface: text[start..end].to_owned(),
                    reading: m.reading,
                    pos: POS_COUNTER.to_owned(),
                    base_form: text[start..end].to_owned(),
                    base_form_id: 0,
                    start,
                    end,
                });
                i = j + 1;
            }
            None => {
                out.push(token.clone());
                i += 1;
            }
        }
    }
    out
}
