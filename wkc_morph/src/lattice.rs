//! Span enumeration: every dictionary-matching span over the input
//! becomes a set of scored candidate nodes. Nothing is pruned here; the
//! path selector chooses among alternatives.

use std::collections::BTreeMap;

use tracing::trace;
use wkc_ja_utils::{is_long_vowel, is_small_kana, is_sokuon};
use wkc_lexicon::{Lexicon, WordEntry};

use crate::score::score_entry;

/// Longest span the builder will try, in code points.
pub const MAX_WORD_LENGTH: usize = 30;

/// One lattice node: a lexicon entry over a byte span of the input.
#[derive(Clone, Debug)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub entry: WordEntry,
    pub score: f64,
}

impl Segment {
    pub fn surface(&self) -> &str {
        &self.entry.surface
    }
}

/// All candidate nodes, keyed by span. Span lists are sorted best-first
/// (score desc, cost asc, insertion order) and are never empty.
pub struct Lattice {
    spans: BTreeMap<usize, BTreeMap<usize, Vec<Segment>>>,
}

impl Lattice {
    /// Enumerate candidates over an NFC-normalized run.
    pub fn build(lexicon: &Lexicon, text: &str) -> Lattice {
        let boundaries: Vec<(usize, char)> = text.char_indices().collect();
        let n = text.len();

        // positions where a word may not start, and byte positions where
        // one may not end
        let start_forbidden = |c: char| is_small_kana(c) || is_long_vowel(c);
        let end_forbidden: Vec<usize> = boundaries
            .iter()
            .filter(|(_, c)| is_sokuon(*c))
            .map(|(i, c)| i + c.len_utf8())
            .filter(|&e| e < n)
            .collect();

        let mut spans: BTreeMap<usize, BTreeMap<usize, Vec<Segment>>> = BTreeMap::new();
        for (bi, &(start, c)) in boundaries.iter().enumerate() {
            if start_forbidden(c) {
                continue;
            }
            for step in 1..=MAX_WORD_LENGTH {
                let end = match boundaries.get(bi + step) {
                    Some(&(e, _)) => e,
                    None if bi + step == boundaries.len() => n,
                    None => break,
                };
                let slice = &text[start..end];
                if !lexicon.has_prefix(slice) {
                    break;
                }
                // a word may not end right after a mid-string sokuon, but
                // longer words through it are fine
                if end_forbidden.contains(&end) {
                    continue;
                }
                for entry in lexicon.lookup(slice) {
                    let score = score_entry(lexicon, &entry);
                    spans
                        .entry(start)
                        .or_default()
                        .entry(end)
                        .or_default()
                        .push(Segment {
                            start,
                            end,
                            entry,
                            score,
                        });
                }
            }
        }

        for ends in spans.values_mut() {
            for segments in ends.values_mut() {
                segments.sort_by(|a, b| {
                    b.score
                        .partial_cmp(&a.score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(a.entry.cost.cmp(&b.entry.cost))
                });
            }
        }

        let node_count: usize = spans
            .values()
            .flat_map(|ends| ends.values())
            .map(|segs| segs.len())
            .sum();
        trace!(bytes = n, nodes = node_count, "built lattice");

        Lattice { spans }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans starting at `start`, in end order.
    pub fn spans_from(&self, start: usize) -> impl Iterator<Item = (usize, &[Segment])> {
        self.spans
            .get(&start)
            .into_iter()
            .flat_map(|ends| ends.iter().map(|(end, segs)| (*end, segs.as_slice())))
    }

    pub fn segments(&self, start: usize, end: usize) -> Option<&[Segment]> {
        self.spans
            .get(&start)
            .and_then(|ends| ends.get(&end))
            .map(|segs| segs.as_slice())
    }

    pub fn has_spans_from(&self, start: usize) -> bool {
        self.spans.contains_key(&start)
    }
}
