//! Rule tables: the data half of the analyzer. Everything in this crate
//! is literal pattern content — conjugation-class names, scoring tables,
//! adjacent-pair synergies, merge/split/substitution banks, counter
//! phonetics — wrapped in just enough code to index it.

pub mod conj;
pub mod counters;
pub mod merge;
pub mod scoring;
pub mod split;
pub mod subst;
pub mod synergy;
