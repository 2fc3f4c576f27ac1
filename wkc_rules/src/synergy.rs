//! Adjacent-pair synergies and penalties, applied by the path selector on
//! every relaxation edge. Bonuses reward pairs that commonly appear
//! together (noun + case particle, nominal + topic marker); penalties and
//! blocks push the selector away from ungrammatical covers.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use wkc_lexicon::PosTag;

/// One side of an adjacent pair, as the selector sees it.
#[derive(Clone, Copy, Debug)]
pub struct PairSide<'a> {
    pub surface: &'a str,
    pub pos: PosTag,
    pub conj_type: u8,
}

/// Case particles that attach to nominals.
pub static CASE_PARTICLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["が", "を", "に", "で", "へ", "と", "から", "まで", "より"]
        .into_iter()
        .collect()
});

/// Topic/focus particles.
pub static TOPIC_PARTICLES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["は", "も"].into_iter().collect());

/// Literal pair penalties: the decomposition loses to a lexicalized
/// compound covering the same span.
pub const PAIR_PENALTIES: &[(&str, &str, f64)] = &[
    ("と", "は", -10.0),
    ("に", "は", -6.0),
    ("で", "は", -6.0),
    ("に", "つれ", -8.0),
    ("お", "すすめ", -10.0),
];

const NOMINAL_CASE_BONUS: f64 = 5.0;
const NOMINAL_TOPIC_BONUS: f64 = 5.0;
const NA_ADJECTIVE_NA_BONUS: f64 = 5.0;
const NOMINAL_COPULA_BONUS: f64 = 3.0;
const FRAGMENT_CHAIN_PENALTY: f64 = -10.0;
const AUX_WITHOUT_CONTINUATIVE_PENALTY: f64 = -20.0;

/// Blocks are large enough to lose to any in-lexicon alternative while
/// still beating nothing at all.
const BLOCK: f64 = -1000.0;

fn is_nominal(pos: PosTag) -> bool {
    pos.is_noun() || pos.is_pronoun_like() || pos == PosTag::Num
}

/// Score adjustment for `left` followed directly by `right`.
pub fn pair_adjustment(left: PairSide<'_>, right: PairSide<'_>) -> f64 {
    let mut total = 0.0;

    // blocks first: combinations the grammar rules out
    if right.surface == "ん" && left.pos.is_particle() {
        return BLOCK;
    }
    if matches!(right.pos, PosTag::Aux | PosTag::AuxV) && left.pos.is_particle() {
        return BLOCK;
    }
    // auxiliaries want a continuative or te-form on their left
    if matches!(right.pos, PosTag::AuxV)
        && left.pos.is_verb()
        && !matches!(
            left.conj_type,
            crate::conj::CONJUNCTIVE | crate::conj::CONTINUATIVE
        )
        && left.conj_type != crate::conj::DICTIONARY_FORM
    {
        total += AUX_WITHOUT_CONTINUATIVE_PENALTY;
    }

    if is_nominal(left.pos) && right.pos.is_particle() {
        if CASE_PARTICLES.contains(right.surface) {
            total += NOMINAL_CASE_BONUS;
        } else if TOPIC_PARTICLES.contains(right.surface) {
            total += NOMINAL_TOPIC_BONUS;
        }
    }

    if left.pos == PosTag::AdjNa && right.surface == "な" {
        total += NA_ADJECTIVE_NA_BONUS;
    }

    if is_nominal(left.pos) && right.pos == PosTag::Cop {
        total += NOMINAL_COPULA_BONUS;
    }

    for (l, r, penalty) in PAIR_PENALTIES {
        if left.surface == *l && right.surface == *r {
            total += penalty;
        }
    }

    // two adjacent single-character fragments that are neither particles
    // nor kanji words read as segmentation debris
    if left.surface.chars().count() == 1
        && right.surface.chars().count() == 1
        && !left.pos.is_particle()
        && !right.pos.is_particle()
        && !wkc_ja_utils::has_kanji(left.surface)
        && !wkc_ja_utils::has_kanji(right.surface)
    {
        total += FRAGMENT_CHAIN_PENALTY;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(surface: &str, pos: PosTag) -> PairSide<'_> {
        PairSide {
            surface,
            pos,
            conj_type: 0,
        }
    }

    #[test]
    fn noun_particle_pairs_get_a_bonus() {
        assert_eq!(
            pair_adjustment(side("猫", PosTag::N), side("が", PosTag::Prt)),
            5.0
        );
        assert_eq!(
            pair_adjustment(side("猫", PosTag::N), side("は", PosTag::Prt)),
            5.0
        );
    }

    #[test]
    fn explanatory_n_cannot_follow_a_particle() {
        assert_eq!(
            pair_adjustment(side("を", PosTag::Prt), side("ん", PosTag::N)),
            -1000.0
        );
    }

    #[test]
    fn compound_beats_its_decomposition() {
        assert!(pair_adjustment(side("と", PosTag::Prt), side("は", PosTag::Prt)) < 0.0);
    }

    #[test]
    fn fragment_chains_are_discouraged() {
        assert_eq!(
            pair_adjustment(side("あ", PosTag::Unk), side("い", PosTag::Unk)),
            -10.0
        );
    }
}
