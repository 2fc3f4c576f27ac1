//! The token substitution bank: literal runs of consecutive surfaces
//! rewritten into replacement runs. Fixes known mis-segmentations and
//! forces segmentation conventions the cost model cannot express. Every
//! rule preserves the concatenated text.

use once_cell::sync::Lazy;

pub const TOKEN_SUBSTITUTIONS: &[(&[&str], &[&str])] = &[
    // topic-marked temporal nouns split; the greeting reading stays a
    // single lexicalized token and never reaches this bank
    (&["今日は"], &["今日", "は"]),
    (&["今晩は"], &["今晩", "は"]),
    // compound particles the convention keeps whole
    (&["よう", "に"], &["ように"]),
    (&["ため", "に"], &["ために"]),
    (&["の", "か"], &["のか"]),
    (&["に", "は"], &["には"]),
    (&["と", "は"], &["とは"]),
    (&["で", "は"], &["では"]),
    // mis-segmentations around 分 left over after the counter pass
    (&["自", "分"], &["自分"]),
    (&["多", "分"], &["多分"]),
    (&["気", "分"], &["気分"]),
    // honorific prefixes that belong on the noun
    (&["お", "茶"], &["お茶"]),
    (&["お", "金"], &["お金"]),
    (&["この", "間"], &["この間"]),
];

/// The bank ordered longest-pattern-first so greedy matching picks the
/// most specific rule.
pub static SUBSTITUTIONS_BY_LENGTH: Lazy<
    Vec<&'static (&'static [&'static str], &'static [&'static str])>,
> = Lazy::new(|| {
    let mut sorted: Vec<_> = TOKEN_SUBSTITUTIONS.iter().collect();
    sorted.sort_by_key(|(pattern, _)| std::cmp::Reverse(pattern.len()));
    sorted
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutions_preserve_text() {
        for (pattern, replacement) in TOKEN_SUBSTITUTIONS {
            assert_eq!(pattern.concat(), replacement.concat());
        }
    }

    #[test]
    fn longest_patterns_first() {
        let lens: Vec<usize> = SUBSTITUTIONS_BY_LENGTH
            .iter()
            .map(|(p, _)| p.len())
            .collect();
        let mut sorted = lens.clone();
        sorted.sort_by_key(|l| std::cmp::Reverse(*l));
        assert_eq!(lens, sorted);
    }
}
