//! The post-processing rewriter: reshapes a raw lattice cover into the
//! target segmentation convention. Three passes — compound merges,
//! literal merges, suffix splits plus substitutions — run to a fixed
//! point; counter recognition runs once up front so the substitution
//! bank only sees what the counter pass left behind.

mod build;
mod counter;
mod merge;
mod split;

use tracing::{instrument, warn};
use wkc_lexicon::Lexicon;
use wkc_tokenise::Token;

pub use crate::build::{best_entry, token_from_entry, token_from_lexicon, unknown_token};

const MAX_ROUNDS: usize = 8;

fn signature(tokens: &[Token]) -> Vec<(usize, usize, String)> {
    tokens
        .iter()
        .map(|t| (t.start, t.end, t.surface.clone()))
        .collect()
}

/// Rewrite a token sequence. `text` is the sentence run the offsets index
/// into; output offsets stay within the same run.
#[instrument(skip_all, level = "trace", fields(tokens = tokens.len()))]
pub fn rewrite(lexicon: &Lexicon, text: &str, tokens: Vec<Token>) -> Vec<Token> {
    let mut tokens = counter::counter_pass(text, tokens);
    for _ in 0..MAX_ROUNDS {
        let before = signature(&tokens);
        tokens = merge::merge_compounds(lexicon, tokens);
        tokens = merge::literal_merges(lexicon, tokens);
        tokens = split::split_pass(lexicon, tokens);
        tokens = split::substitutions(lexicon, tokens);
        if signature(&tokens) == before {
            return tokens;
        }
    }
    warn!("rewriter did not converge; emitting the last state");
    tokens
}
