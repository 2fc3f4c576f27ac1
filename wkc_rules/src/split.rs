//! Split tables: the closed sets behind the suffix-splitting pass.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::scoring::COMPOUND_WORDS;

/// Explicit compound-verb splits, applied before any pattern matching.
pub static COMPOUND_VERB_SPLITS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let rules: &[(&str, &[&str])] = &[
            ("お願い申し上げます", &["お願い", "申し上げます"]),
            ("お願い致します", &["お願い", "致します"]),
            ("お願いいたします", &["お願い", "いたします"]),
            ("申し訳ありません", &["申し訳", "ありません"]),
            ("申し訳ございません", &["申し訳", "ございません"]),
        ];
        rules.iter().copied().collect()
    });

/// Prefix-particle patterns: the token starts with a particle (or the
/// explanatory ん/の) and the remainder must itself be a lexicon key for
/// the split to fire.
pub const PREFIX_PARTICLE_SPLITS: &[(&str, &str, &str)] = &[
    ("につきまして", "に", "つきまして"),
    ("にわたりまして", "に", "わたりまして"),
    ("んです", "ん", "です"),
    ("んだ", "ん", "だ"),
    ("のです", "の", "です"),
    ("のだ", "の", "だ"),
    ("とします", "と", "します"),
    ("とすれば", "と", "すれば"),
];

/// Particles peeled from the right edge of a token when the base survives
/// as a lexicon key.
pub const SPLITTABLE_PARTICLES: &[char] = &['を', 'に', 'へ'];

/// Words that end in a particle character but are themselves the target
/// segmentation; the peeling and ん-splitting passes skip these. The
/// lexicalized compound set is implied on top of this list.
pub static NO_SPLIT_EXTRA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "本当に",
        "特に",
        "既に",
        "更に",
        "共に",
        "遂に",
        "一緒に",
        "すぐに",
        "たまに",
        "別に",
        "確かに",
        "急に",
        "非常に",
        "自然に",
        "ように",
        "ために",
        "それに",
        "さらに",
        "すでに",
        "まさに",
        "つねに",
        "ことに",
        "じつに",
        "たしかに",
        "まれに",
        "のか",
        "には",
        "とは",
        "では",
        "については",
        "として",
        "において",
        "かばん",
        "ごはん",
        "たくさん",
        "ぜんぜん",
        "もちろん",
    ]
    .into_iter()
    .collect()
});

/// True when no split pass may touch this surface.
pub fn is_no_split(surface: &str) -> bool {
    COMPOUND_WORDS.contains(surface) || NO_SPLIT_EXTRA.contains(surface)
}

/// Endings that shed their copula: the だ/です tail splits off when the
/// token ends in one of these.
pub const COPULA_SPLIT_ENDINGS: &[(&str, &str)] = &[
    ("ようだ", "だ"),
    ("はずだ", "だ"),
    ("からだ", "だ"),
    ("ようです", "です"),
    ("はずです", "です"),
];

/// A base must end in one of these for the explanatory ん to peel.
pub const EXPLANATORY_N_BASE_ENDINGS: &[char] = &['い', 'る', 'た', 'て', 'だ'];

/// Internal-particle splitting is parked: it regressed interrogative
/// compounds when it last ran, and the pattern bank for it has not been
/// re-audited since.
pub const INTERNAL_PARTICLE_SPLIT_ENABLED: bool = false;
