//! Lattice construction, scoring, and k-best path selection over a
//! normalized sentence run. Everything here is per-call state computed
//! against the shared read-only lexicon.

mod lattice;
mod pathing;
mod score;

pub use crate::{
    lattice::{Lattice, Segment, MAX_WORD_LENGTH},
    pathing::{best_paths, PathStep, ScoredPath},
    score::score_entry,
};
