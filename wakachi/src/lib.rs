//! wakachi: a lightweight Japanese morphological analyzer.
//!
//! A sentence goes through four stages: NFC normalization and splitting
//! on sentence punctuation; span enumeration over the memory-mapped
//! lexicon; k-best path selection under the rule-table cost model; and a
//! mechanical rewrite into the target segmentation convention. The
//! lexicon is process-wide shared state loaded on first use; everything
//! else lives on the call stack.
//!
//! ```no_run
//! let tokens = wakachi::tokenize("今日は天気がいいです")?;
//! for token in &tokens {
//!     println!("{} -> {} ({})", token.surface, token.base_form, token.pos);
//! }
//! # Ok::<(), wakachi::Error>(())
//! ```

use std::{sync::Arc, time::{Duration, Instant}};

use serde::Serialize;
use snafu::{ResultExt, Snafu};
use tracing::instrument;
use unicode_normalization::UnicodeNormalization;

use wkc_ja_utils::is_punct_separator;
use wkc_lexicon::{global, Lexicon};
use wkc_morph::{best_paths, Lattice, ScoredPath};
use wkc_rewrite::{rewrite, token_from_entry, unknown_token};
use wkc_rules::conj;
use wkc_tokenise::{Token, Tokeniser, POS_PUNCT};

pub use wkc_lexicon::{PosTag, WordEntry};
pub use wkc_tokenise::Token as OutputToken;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Error)))]
pub enum Error {
    #[snafu(display("invalid input: {reason}"))]
    InvalidInputError { reason: String },
    #[snafu(display("lexicon unavailable"))]
    LexiconError { source: wkc_lexicon::Error },
}

/// One ranked analysis of an input.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub score: f64,
}

/// Timings and counts from a lexicon warm-up.
#[derive(Clone, Debug, Serialize)]
pub struct WarmUpReport {
    pub load_time: Duration,
    pub already_loaded: bool,
    pub record_count: usize,
    pub base_form_count: usize,
    pub reading_count: usize,
}

/// A lexicon entry dressed with its reading and base form, for
/// dictionary-style consumers.
#[derive(Clone, Debug, Serialize)]
pub struct WordInfo {
    pub surface: String,
    pub reading: String,
    pub pos: String,
    pub base_form: String,
    pub base_form_id: u32,
    pub cost: i16,
    pub conjugation: Option<&'static str>,
}

/// The analysis pipeline over one lexicon handle. The module-level
/// functions route through the shared global handle; construct an
/// `Analyser` directly to pin a specific lexicon (tests, custom
/// artifacts).
pub struct Analyser {
    lexicon: Arc<Lexicon>,
}

enum Piece<'a> {
    Run { start: usize, text: &'a str },
    Separator { start: usize, c: char },
}

fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return InvalidInputError {
            reason: "text is empty or whitespace-only",
        }
        .fail();
    }
    Ok(())
}

fn split_pieces(normalized: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut run_start = None;
    for (i, c) in normalized.char_indices() {
        if is_punct_separator(c) {
            if let Some(start) = run_start.take() {
                pieces.push(Piece::Run {
                    start,
                    text: &normalized[start..i],
                });
            }
            pieces.push(Piece::Separator { start: i, c });
        } else if run_start.is_none() {
            run_start = Some(i);
        }
    }
    if let Some(start) = run_start {
        pieces.push(Piece::Run {
            start,
            text: &normalized[start..],
        });
    }
    pieces
}

fn punct_token(start: usize, c: char) -> Token {
    let surface = c.to_string();
    Token {
        reading: surface.clone(),
        pos: POS_PUNCT.to_owned(),
        base_form: surface.clone(),
        base_form_id: 0,
        start,
        end: start + c.len_utf8(),
        surface,
    }
}

impl Analyser {
    /// Pipeline over the shared lexicon, loading it on first use.
    pub fn new() -> Result<Analyser> {
        let lexicon = global::acquire().context(LexiconError)?;
        Ok(Analyser { lexicon })
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Analyser {
        Analyser { lexicon }
    }

    /// Tokenize a sentence into the target segmentation convention.
    #[instrument(skip_all, level = "debug", fields(len = text.len()))]
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        validate_text(text)?;
        let normalized: String = text.nfc().collect();
        let mut out = Vec::new();
        for piece in split_pieces(&normalized) {
            match piece {
                Piece::Separator { start, c } => out.push(punct_token(start, c)),
                Piece::Run { start, text: run } => {
                    let tokens = self.tokenize_run(run);
                    out.extend(tokens.into_iter().map(|t| shift(t, start)));
                }
            }
        }
        Ok(out)
    }

    /// The `limit` best analyses, scores non-increasing. The first
    /// element's tokens always equal `tokenize`.
    #[instrument(skip_all, level = "debug", fields(len = text.len(), limit))]
    pub fn analyze(&self, text: &str, limit: usize) -> Result<Vec<Analysis>> {
        validate_text(text)?;
        if limit < 1 {
            return InvalidInputError {
                reason: "limit must be at least 1",
            }
            .fail();
        }
        let normalized: String = text.nfc().collect();
        let pieces = split_pieces(&normalized);

        // per-run ranked paths; the i-th overall analysis combines each
        // run's i-th best (clamped), so scores stay non-increasing
        let mut depth = 1;
        let mut ranked: Vec<Vec<(Vec<Token>, f64)>> = Vec::new();
        for piece in &pieces {
            if let Piece::Run { text: run, .. } = piece {
                let paths = self.run_paths(run, limit);
                depth = depth.max(paths.len());
                ranked.push(paths);
            }
        }

        let mut analyses = Vec::with_capacity(depth);
        for i in 0..depth {
            let mut tokens = Vec::new();
            let mut score = 0.0;
            let mut run_index = 0;
            for piece in &pieces {
                match piece {
                    Piece::Separator { start, c } => tokens.push(punct_token(*start, *c)),
                    Piece::Run { start, .. } => {
                        let paths = &ranked[run_index];
                        run_index += 1;
                        let (path_tokens, path_score) = &paths[i.min(paths.len() - 1)];
                        score += path_score;
                        tokens.extend(path_tokens.iter().cloned().map(|t| shift(t, *start)));
                    }
                }
            }
            analyses.push(Analysis { tokens, score });
        }
        Ok(analyses)
    }

    /// Direct lexicon lookup with readings and base forms attached.
    pub fn lookup_word(&self, surface: &str) -> Vec<WordInfo> {
        self.lexicon
            .lookup(surface)
            .into_iter()
            .map(|entry| {
                let token = token_from_entry(&self.lexicon, &entry, 0, surface.len());
                WordInfo {
                    surface: token.surface,
                    reading: token.reading,
                    pos: token.pos,
                    base_form: token.base_form,
                    base_form_id: token.base_form_id,
                    cost: entry.cost,
                    conjugation: if entry.conj_type == conj::DICTIONARY_FORM {
                        None
                    } else {
                        conj::name(entry.conj_type)
                    },
                }
            })
            .collect()
    }

    fn tokenize_run(&self, run: &str) -> Vec<Token> {
        let lattice = Lattice::build(&self.lexicon, run);
        let paths = best_paths(&lattice, run, 1);
        match paths.into_iter().next() {
            Some(path) => rewrite(&self.lexicon, run, self.path_tokens(run, &path)),
            None => vec![unknown_token(run, 0, run.len())],
        }
    }

    fn run_paths(&self, run: &str, k: usize) -> Vec<(Vec<Token>, f64)> {
        let lattice = Lattice::build(&self.lexicon, run);
        let paths = best_paths(&lattice, run, k);
        if paths.is_empty() {
            return vec![(
                vec![unknown_token(run, 0, run.len())],
                wkc_rules::scoring::UNKNOWN_CHAR_PENALTY * run.chars().count() as f64,
            )];
        }
        paths
            .into_iter()
            .map(|path| {
                let tokens = rewrite(&self.lexicon, run, self.path_tokens(run, &path));
                (tokens, path.score)
            })
            .collect()
    }

    fn path_tokens(&self, run: &str, path: &ScoredPath) -> Vec<Token> {
        path.steps
            .iter()
            .map(|step| match &step.segment {
                Some(segment) => {
                    token_from_entry(&self.lexicon, &segment.entry, step.start, step.end)
                }
                None => unknown_token(&run[step.start..step.end], step.start, step.end),
            })
            .collect()
    }
}

impl Tokeniser for Analyser {
    type Error = Error;

    fn tokenise(&self, input: &str) -> Result<Vec<Token>, Self::Error> {
        self.tokenize(input)
    }
}

fn shift(mut token: Token, offset: usize) -> Token {
    token.start += offset;
    token.end += offset;
    token
}

/// Tokenize against the shared lexicon.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    Analyser::new()?.tokenize(text)
}

/// K-best analyses against the shared lexicon.
pub fn analyze(text: &str, limit: usize) -> Result<Vec<Analysis>> {
    Analyser::new()?.analyze(text, limit)
}

/// Dictionary-style lookup against the shared lexicon.
pub fn lookup_word(surface: &str) -> Result<Vec<WordInfo>> {
    Ok(Analyser::new()?.lookup_word(surface))
}

/// Load the shared lexicon now and report how long it took.
pub fn warm_up() -> Result<WarmUpReport> {
    let already_loaded = global::is_loaded();
    let started = Instant::now();
    let lexicon = global::acquire().context(LexiconError)?;
    Ok(WarmUpReport {
        load_time: started.elapsed(),
        already_loaded,
        record_count: lexicon.record_count(),
        base_form_count: lexicon.base_form_count(),
        reading_count: lexicon.reading_count(),
    })
}

/// Release the shared lexicon. Not safe against in-flight analysis
/// calls; quiesce them first.
pub fn unload() {
    global::unload()
}
