//! The node cost model. Longer, kanji-bearing, common, conjugated-in-
//! context words outscore short hiragana fragments; particles take a
//! micro-formula of their own.

use wkc_ja_utils::{has_kanji, is_hiragana, is_katakana, mora_length};
use wkc_lexicon::{Lexicon, WordEntry};
use wkc_rules::{conj, scoring};

const BASE_FLOOR: f64 = 5.0;
const KANJI_BONUS: f64 = 5.0;
const PRONOUN_BONUS: f64 = 5.0;
const CONJUGATION_BONUS: f64 = 15.0;
const CONDITIONAL_BA_BONUS: f64 = 40.0;
const SINGLE_CHAR_PENALTY: f64 = -30.0;
const DEGENERATE_ENDING_PENALTY: f64 = -30.0;
const PARTICLE_FLOOR: f64 = 15.0;

fn commonness_bonus(cost: i16) -> f64 {
    if cost <= 10 {
        15.0
    } else if cost <= 30 {
        10.0
    } else if cost <= 50 {
        5.0
    } else {
        2.0
    }
}

fn primary_reading_bonus(cost: i16) -> f64 {
    if cost < 20 {
        8.0
    } else if cost < 40 {
        4.0
    } else {
        0.0
    }
}

/// Score a lexicon entry over its surface.
pub fn score_entry(lexicon: &Lexicon, entry: &WordEntry) -> f64 {
    let surface = entry.surface.as_str();
    let pos = entry.pos();
    let char_len = surface.chars().count();

    // particles never take the general path
    if pos.is_particle() {
        let mut score = PARTICLE_FLOOR - entry.cost as f64 * 0.1;
        if char_len > 1 {
            score += 5.0 * (char_len * char_len) as f64;
        }
        return score;
    }

    let mut base = BASE_FLOOR;
    let kanji = has_kanji(surface);
    if kanji {
        base += KANJI_BONUS;
    }
    base += commonness_bonus(entry.cost);
    base += primary_reading_bonus(entry.cost);
    if pos.is_pronoun_like() {
        base += PRONOUN_BONUS;
    }

    let table = if kanji || is_katakana(surface) {
        scoring::STRONG_COEFF
    } else if is_hiragana(surface) && entry.conj_type != conj::DICTIONARY_FORM {
        scoring::TAIL_COEFF
    } else {
        scoring::WEAK_COEFF
    };
    let coeff = scoring::length_coefficient(table, mora_length(surface));
    let mut score = base * (1.0 + coeff * 0.1);

    if entry.conj_type != conj::DICTIONARY_FORM {
        score += CONJUGATION_BONUS;
        if surface.ends_with('ば') && conj::is_conditional(entry.conj_type) {
            score += CONDITIONAL_BA_BONUS;
        }
    }
    if let Some(bonus) = scoring::compound_bonus(surface) {
        score += bonus;
    }
    if let Some(adjustment) = scoring::split_preference(surface) {
        score += adjustment;
    }
    if char_len == 1 {
        score += SINGLE_CHAR_PENALTY;
    }
    if char_len > 2 && !scoring::COMPOUND_WORDS.contains(surface) {
        if let Some(last) = surface.chars().last() {
            if scoring::SINGLE_CHAR_PARTICLES.contains(&last) {
                let stem = &surface[..surface.len() - last.len_utf8()];
                if lexicon.contains_key(stem) {
                    score += DEGENERATE_ENDING_PENALTY;
                }
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use wkc_lexicon::{writer, Blob, PosTag, Record};

    use super::*;

    fn entry(surface: &str, cost: i16, pos: PosTag, conj_type: u8) -> WordEntry {
        WordEntry {
            surface: surface.to_owned(),
            seq: 1,
            cost,
            pos_id: pos as u8,
            conj_type,
            base_seq: 1,
        }
    }

    fn lexicon_with(keys: &[&str]) -> Lexicon {
        let entries: Vec<(String, Vec<Record>)> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| {
                (
                    k.to_string(),
                    vec![Record {
                        seq: i as u32 + 1,
                        cost: 10,
                        pos_id: PosTag::N as u8,
                        conj_type: 0,
                        base_seq: i as u32 + 1,
                    }],
                )
            })
            .collect();
        Lexicon::load(
            Blob::from_bytes(writer::write_trie(&entries)),
            Blob::from_bytes(writer::write_seq_table(&[])),
            Blob::from_bytes(writer::write_seq_table(&[])),
        )
        .unwrap()
    }

    #[test]
    fn particles_take_the_micro_formula() {
        let lex = lexicon_with(&[]);
        let ha = entry("は", 1, PosTag::Prt, 0);
        assert!((score_entry(&lex, &ha) - 14.9).abs() < 1e-9);

        // multi-character particles gain the quadratic term
        let kara = entry("から", 5, PosTag::Prt, 0);
        assert!((score_entry(&lex, &kara) - (15.0 - 0.5 + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn kanji_words_outscore_hiragana_fragments() {
        let lex = lexicon_with(&[]);
        let tenki = entry("天気", 8, PosTag::N, 0);
        let te = entry("て", 60, PosTag::N, 0);
        assert!(score_entry(&lex, &tenki) > score_entry(&lex, &te) * 5.0);
    }

    #[test]
    fn single_char_non_particles_are_penalized() {
        let lex = lexicon_with(&[]);
        let scored = score_entry(&lex, &entry("手", 20, PosTag::N, 0));
        // base 5+5+10+4 = 24, one mora, strong table: 24 * 1.1 - 30
        assert!((scored - (24.0 * 1.1 - 30.0)).abs() < 1e-9);
    }

    #[test]
    fn conditional_ba_is_rewarded() {
        let lex = lexicon_with(&[]);
        // base 5+15+8 = 28 for both, tail table; あれば (3 moras,
        // coeff 16) = 28·2.6 + 15 + 40, あります (4 moras, coeff 24) =
        // 28·3.4 + 15
        let areba = entry("あれば", 10, PosTag::V5rI, conj::PROVISIONAL);
        let aremasu = entry("あります", 10, PosTag::V5rI, conj::NON_PAST);
        assert!((score_entry(&lex, &areba) - 127.8).abs() < 1e-9);
        assert!((score_entry(&lex, &aremasu) - 110.2).abs() < 1e-9);
    }

    #[test]
    fn degenerate_endings_lose_to_their_decomposition() {
        let lex = lexicon_with(&["今日"]);
        let with = score_entry(&lex, &entry("今日は", 25, PosTag::Exp, 0));
        let without = score_entry(&lex, &entry("学校は", 25, PosTag::Exp, 0));
        // 学校 is not a key in this fixture, so only 今日は gets the
        // ending penalty (今日は is also prefer-split)
        assert!(without - with >= 30.0);
    }

    #[test]
    fn lexicalized_compounds_get_the_flat_bonus() {
        let lex = lexicon_with(&[]);
        let greeting = entry("こんにちは", 20, PosTag::Int, 0);
        let plain = entry("こんにちほ", 20, PosTag::Int, 0);
        let d = score_entry(&lex, &greeting) - score_entry(&lex, &plain);
        // identical shape except for the compound bonus; both are
        // five-mora weak-table hiragana
        assert!((d - 40.0).abs() < 1e-9);
    }
}
