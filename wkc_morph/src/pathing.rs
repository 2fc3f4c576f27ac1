//! Forward dynamic program over the lattice: highest-score cover of the
//! input, k-best, with a single unified back-fill rule for spans the
//! lexicon does not reach.

use tracing::trace;
use wkc_rules::{scoring::UNKNOWN_CHAR_PENALTY, synergy};

use crate::lattice::{Lattice, Segment};

/// One step of a chosen cover. `segment` is `None` over a gap; the facade
/// turns gaps into unknown-span tokens.
#[derive(Clone, Debug)]
pub struct PathStep {
    pub start: usize,
    pub end: usize,
    pub segment: Option<Segment>,
}

#[derive(Clone, Debug)]
pub struct ScoredPath {
    pub steps: Vec<PathStep>,
    pub score: f64,
}

#[derive(Clone)]
struct Arrival {
    score: f64,
    prev_pos: usize,
    prev_index: usize,
    segment: Option<Segment>,
}

const SOURCE: usize = usize::MAX;

fn synergy_edge(prev: Option<&Segment>, next: &Segment) -> f64 {
    match prev {
        Some(prev) => synergy::pair_adjustment(
            synergy::PairSide {
                surface: prev.surface(),
                pos: prev.entry.pos(),
                conj_type: prev.entry.conj_type,
            },
            synergy::PairSide {
                surface: next.surface(),
                pos: next.entry.pos(),
                conj_type: next.entry.conj_type,
            },
        ),
        None => 0.0,
    }
}

fn sort_arrivals(arrivals: &mut Vec<Arrival>, keep: usize) {
    // stable: equal scores keep insertion order, which favors the entry
    // discovered from the later start
    arrivals.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    arrivals.truncate(keep);
}

/// Select up to `k` best covers of `text`. The lattice may be empty; the
/// result is then a single all-gap path.
pub fn best_paths(lattice: &Lattice, text: &str, k: usize) -> Vec<ScoredPath> {
    let n = text.len();
    debug_assert!(n > 0 && k > 0);
    let keep = 2 * k;

    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(n))
        .collect();

    let mut arrivals: Vec<Vec<Arrival>> = vec![Vec::new(); n + 1];
    arrivals[0].push(Arrival {
        score: 0.0,
        prev_pos: 0,
        prev_index: SOURCE,
        segment: None,
    });

    for (bi, &p) in boundaries.iter().enumerate() {
        // unified gap rule: a needed but unreachable position gets one
        // back-fill from the nearest reachable ancestor
        if arrivals[p].is_empty() && p > 0 && (lattice.has_spans_from(p) || p == n) {
            if let Some(&q) = boundaries[..bi].iter().rev().find(|&&q| !arrivals[q].is_empty())
            {
                let gap_chars = text[q..p].chars().count();
                let base = arrivals[q][0].score;
                arrivals[p].push(Arrival {
                    score: base + UNKNOWN_CHAR_PENALTY * gap_chars as f64,
                    prev_pos: q,
                    prev_index: 0,
                    segment: None,
                });
                trace!(from = q, to = p, chars = gap_chars, "back-filled gap");
            }
        }
        if arrivals[p].is_empty() {
            continue;
        }
        sort_arrivals(&mut arrivals[p], keep);

        let mut new: Vec<(usize, Arrival)> = Vec::new();
        for (end, segments) in lattice.spans_from(p) {
            // the span's best-first head represents the span
            let segment = &segments[0];
            for (index, arrival) in arrivals[p].iter().enumerate() {
                let edge = synergy_edge(arrival.segment.as_ref(), segment);
                new.push((
                    end,
                    Arrival {
                        score: arrival.score + segment.score + edge,
                        prev_pos: p,
                        prev_index: index,
                        segment: Some(segment.clone()),
                    },
                ));
            }
        }
        for (end, arrival) in new {
            arrivals[end].push(arrival);
        }
    }

    sort_arrivals(&mut arrivals[n], k);
    let final_count = arrivals[n].len();
    trace!(candidates = final_count, "reconstructing paths");

    (0..final_count)
        .map(|i| reconstruct(&arrivals, n, i))
        .collect()
}

fn reconstruct(arrivals: &[Vec<Arrival>], n: usize, index: usize) -> ScoredPath {
    let score = arrivals[n][index].score;
    let mut steps = Vec::new();
    let mut pos = n;
    let mut idx = index;
    loop {
        let arrival = &arrivals[pos][idx];
        if arrival.prev_index == SOURCE {
            break;
        }
        steps.push(PathStep {
            start: arrival.prev_pos,
            end: pos,
            segment: arrival.segment.clone(),
        });
        let next = (arrival.prev_pos, arrival.prev_index);
        pos = next.0;
        idx = next.1;
    }
    steps.reverse();
    ScoredPath { steps, score }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wkc_lexicon::{writer, Blob, Lexicon, PosTag, Record};

    use super::*;
    use crate::lattice::Lattice;

    fn rec(seq: u32, cost: i16, pos: PosTag, conj: u8) -> Record {
        Record {
            seq,
            cost,
            pos_id: pos as u8,
            conj_type: conj,
            base_seq: seq,
        }
    }

    fn lexicon(entries: &[(&str, Record)]) -> Lexicon {
        let rows: Vec<(String, Vec<Record>)> = entries
            .iter()
            .map(|(k, r)| (k.to_string(), vec![*r]))
            .collect();
        Lexicon::load(
            Blob::from_bytes(writer::write_trie(&rows)),
            Blob::from_bytes(writer::write_seq_table(&[])),
            Blob::from_bytes(writer::write_seq_table(&[])),
        )
        .unwrap()
    }

    fn surfaces(path: &ScoredPath, text: &str) -> Vec<String> {
        path.steps
            .iter()
            .map(|s| text[s.start..s.end].to_string())
            .collect()
    }

    #[test]
    fn picks_the_obvious_cover() {
        let lex = lexicon(&[
            ("猫", rec(1, 5, PosTag::N, 0)),
            ("が", rec(2, 1, PosTag::Prt, 0)),
            ("好き", rec(3, 8, PosTag::AdjNa, 0)),
        ]);
        let text = "猫が好き";
        let lattice = Lattice::build(&lex, text);
        let paths = best_paths(&lattice, text, 1);
        assert_eq!(paths.len(), 1);
        assert_eq!(surfaces(&paths[0], text), vec!["猫", "が", "好き"]);
    }

    #[test]
    fn longer_words_beat_fragment_chains() {
        let lex = lexicon(&[
            ("食べました", rec(1, 10, PosTag::V1, 2)),
            ("食べ", rec(2, 10, PosTag::V1, 13)),
            ("まし", rec(3, 50, PosTag::N, 0)),
            ("た", rec(4, 5, PosTag::N, 0)),
        ]);
        let text = "食べました";
        let lattice = Lattice::build(&lex, text);
        let paths = best_paths(&lattice, text, 1);
        assert_eq!(surfaces(&paths[0], text), vec!["食べました"]);
    }

    #[test]
    fn fully_unknown_input_is_one_gap() {
        let lex = lexicon(&[("猫", rec(1, 5, PosTag::N, 0))]);
        let text = "xyzw";
        let lattice = Lattice::build(&lex, text);
        let paths = best_paths(&lattice, text, 1);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].steps.len(), 1);
        assert!(paths[0].steps[0].segment.is_none());
        assert_eq!((paths[0].steps[0].start, paths[0].steps[0].end), (0, 4));
        assert!((paths[0].score - UNKNOWN_CHAR_PENALTY * 4.0).abs() < 1e-9);
    }

    #[test]
    fn gaps_bridge_into_known_words() {
        let lex = lexicon(&[
            ("猫", rec(1, 5, PosTag::N, 0)),
            ("です", rec(2, 2, PosTag::Cop, 0)),
        ]);
        let text = "Qです";
        let lattice = Lattice::build(&lex, text);
        let paths = best_paths(&lattice, text, 1);
        let surf = surfaces(&paths[0], text);
        assert_eq!(surf, vec!["Q", "です"]);
        assert!(paths[0].steps[0].segment.is_none());
        assert!(paths[0].steps[1].segment.is_some());

        // trailing gap
        let text = "ですQ";
        let lattice = Lattice::build(&lex, text);
        let paths = best_paths(&lattice, text, 1);
        let surf = surfaces(&paths[0], text);
        assert_eq!(surf, vec!["です", "Q"]);
        assert!(paths[0].steps[1].segment.is_none());
    }

    #[test]
    fn k_best_is_ordered_and_deterministic() {
        let lex = lexicon(&[
            ("猫舌", rec(1, 30, PosTag::N, 0)),
            ("猫", rec(2, 5, PosTag::N, 0)),
            ("舌", rec(3, 20, PosTag::N, 0)),
        ]);
        let text = "猫舌";
        let lattice = Lattice::build(&lex, text);
        let paths = best_paths(&lattice, text, 3);
        assert!(paths.len() >= 2);
        for pair in paths.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let again = best_paths(&lattice, text, 3);
        assert_eq!(
            paths.iter().map(|p| surfaces(p, text)).collect::<Vec<_>>(),
            again.iter().map(|p| surfaces(p, text)).collect::<Vec<_>>()
        );
    }
}
