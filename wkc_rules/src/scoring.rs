//! Scoring tables: length-coefficient sequences, the lexicalized compound
//! set, the prefer-split map, and the single-character particle set.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Length coefficients for surfaces containing kanji, and for purely
/// katakana surfaces.
pub const STRONG_COEFF: &[f64] = &[0.0, 1.0, 8.0, 24.0, 40.0, 60.0, 84.0, 112.0, 144.0, 180.0];

/// Length coefficients for hiragana surfaces that are particles or carry a
/// conjugation layer.
pub const TAIL_COEFF: &[f64] = &[0.0, 4.0, 9.0, 16.0, 24.0, 34.0, 46.0, 60.0];

/// Length coefficients for all other hiragana surfaces.
pub const WEAK_COEFF: &[f64] = &[0.0, 1.0, 4.0, 9.0, 16.0, 25.0, 36.0, 49.0, 64.0, 81.0];

/// Coefficient for a mora count, extrapolating quadratically past the end
/// of the table.
pub fn length_coefficient(table: &[f64], moras: usize) -> f64 {
    table
        .get(moras)
        .copied()
        .unwrap_or(3.0 * (moras * moras) as f64)
}

/// Lexicalized compounds: greetings, demonstratives, fixed adverbs. These
/// get a flat scoring bonus and are never split by the rewriter.
pub static COMPOUND_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // greetings and set phrases
        "こんにちは",
        "こんばんは",
        "おはよう",
        "おはようございます",
        "ありがとう",
        "ありがとうございます",
        "ありがとうございました",
        "すみません",
        "すみませんでした",
        "ごめんなさい",
        "さようなら",
        "いただきます",
        "ごちそうさま",
        "ごちそうさまでした",
        "おやすみ",
        "おやすみなさい",
        "おめでとう",
        "おめでとうございます",
        "いらっしゃい",
        "いらっしゃいませ",
        "お疲れ様",
        "お疲れ様でした",
        "お願いします",
        "はじめまして",
        "お久しぶりです",
        "お大事に",
        "お帰りなさい",
        "ただいま",
        "ようこそ",
        // demonstratives
        "これ",
        "それ",
        "あれ",
        "どれ",
        "ここ",
        "そこ",
        "あそこ",
        "どこ",
        "こちら",
        "そちら",
        "あちら",
        "どちら",
        "こっち",
        "そっち",
        "あっち",
        "どっち",
        "この",
        "その",
        "あの",
        "どの",
        "こんな",
        "そんな",
        "あんな",
        "どんな",
        "こう",
        "そう",
        "ああ",
        "どう",
        // fixed adverbs
        "たくさん",
        "とても",
        "やはり",
        "やっぱり",
        "もちろん",
        "たぶん",
        "なるほど",
        "しばらく",
        "ちょっと",
        "ゆっくり",
        "だんだん",
        "どんどん",
        "いろいろ",
        "まだまだ",
        "そろそろ",
        "わざわざ",
        "いつも",
        "すべて",
        "ほとんど",
        "なかなか",
        "もうすぐ",
        "まあまあ",
        "はっきり",
        "びっくり",
        "ぜひ",
    ]
    .into_iter()
    .collect()
});

/// Fixed adjustment applied to prefer-split compound entries so the path
/// selector picks their decomposition when the parts are in the lexicon.
pub const SPLIT_PREFERRED_ADJUSTMENT: f64 = -25.0;

/// Compound entries whose decomposition is the target convention. The
/// entry stays in the lexicon (other consumers want it); scoring just
/// nudges the selector away from it.
pub static SPLIT_PREFERRED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "今日は",
        "一人で",
        "二人で",
        "みんなで",
        "自分で",
        "んです",
        "のです",
        "んだ",
        "のだ",
    ]
    .into_iter()
    .collect()
});

/// Single-character particles, as surfaces. Used by the degenerate-ending
/// penalty and by the rewriter's particle peeling.
pub static SINGLE_CHAR_PARTICLES: Lazy<HashSet<char>> = Lazy::new(|| {
    [
        'は', 'が', 'を', 'に', 'の', 'で', 'と', 'も', 'へ', 'や', 'か', 'ね', 'よ', 'わ', 'ぞ',
        'ぜ', 'な', 'さ',
    ]
    .into_iter()
    .collect()
});

/// Flat bonus for a lexicalized compound.
pub const COMPOUND_BONUS: f64 = 40.0;

/// Per-character penalty for spans the lexicon does not cover.
pub const UNKNOWN_CHAR_PENALTY: f64 = -50.0;

/// Prefer-split adjustment for a surface, if it is flagged.
pub fn split_preference(surface: &str) -> Option<f64> {
    SPLIT_PREFERRED
        .contains(surface)
        .then_some(SPLIT_PREFERRED_ADJUSTMENT)
}

/// Compound bonus for a surface, if it is lexicalized.
pub fn compound_bonus(surface: &str) -> Option<f64> {
    COMPOUND_WORDS.contains(surface).then_some(COMPOUND_BONUS)
}
