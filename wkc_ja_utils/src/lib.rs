use regex::Regex;

lazy_static::lazy_static! {
    pub static ref KANJI_REGEX: Regex = Regex::new(r"\p{Unified_Ideograph}").expect("failed to build kanji regex");
}

pub const HIRA_START: char = '\u{3041}';
pub const HIRA_END: char = '\u{309F}';
pub const KATA_START: char = '\u{30A1}';
pub const KATA_END: char = '\u{30FF}';
pub const KATA_SHIFTABLE_START: char = '\u{30A1}';
pub const KATA_SHIFTABLE_END: char = '\u{30F6}';

/// Small kana modifiers. These attach to the preceding mora and can never
/// begin a word.
pub const SMALL_KANA: &[char] = &[
    'ゃ', 'ゅ', 'ょ', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゎ', 'ャ', 'ュ', 'ョ', 'ァ', 'ィ', 'ゥ',
    'ェ', 'ォ', 'ヮ',
];

/// Sentence-level separators. The facade emits each of these as its own
/// token and never tokenizes across one.
pub const PUNCT_SEPARATORS: &[char] = &['、', '。', '！', '？', '，', '．', '…', '・'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Hiragana,
    Katakana,
    Kanji,
    Digit,
    Latin,
    SmallKana,
    Sokuon,
    LongVowel,
    PunctSeparator,
    Other,
}

pub fn classify(c: char) -> CharClass {
    if SMALL_KANA.contains(&c) {
        return CharClass::SmallKana;
    }
    match c {
        'っ' | 'ッ' => CharClass::Sokuon,
        'ー' => CharClass::LongVowel,
        _ if PUNCT_SEPARATORS.contains(&c) => CharClass::PunctSeparator,
        _ if HIRA_START <= c && c <= HIRA_END => CharClass::Hiragana,
        _ if KATA_START <= c && c <= KATA_END => CharClass::Katakana,
        _ if is_kanji(c) => CharClass::Kanji,
        '0'..='9' | '０'..='９' => CharClass::Digit,
        'a'..='z' | 'A'..='Z' | 'ａ'..='ｚ' | 'Ａ'..='Ｚ' => CharClass::Latin,
        _ => CharClass::Other,
    }
}

#[inline]
pub fn is_kanji(c: char) -> bool {
    // most kanji are 3 bytes long, but not all
    // e.g. U+27614 (𧘔)
    let mut buf = [0; 4];
    let s = c.encode_utf8(&mut buf);
    KANJI_REGEX.is_match(s)
}

#[inline]
pub fn is_hiragana_char(c: char) -> bool {
    HIRA_START <= c && c <= HIRA_END
}

#[inline]
pub fn is_katakana_char(c: char) -> bool {
    (KATA_START <= c && c <= KATA_END) || c == 'ー'
}

#[inline]
pub fn is_kana_char(c: char) -> bool {
    (HIRA_START <= c && c <= HIRA_END) || is_katakana_char(c)
}

#[inline]
pub fn is_small_kana(c: char) -> bool {
    SMALL_KANA.contains(&c)
}

#[inline]
pub fn is_sokuon(c: char) -> bool {
    c == 'っ' || c == 'ッ'
}

#[inline]
pub fn is_long_vowel(c: char) -> bool {
    c == 'ー'
}

#[inline]
pub fn is_punct_separator(c: char) -> bool {
    PUNCT_SEPARATORS.contains(&c)
}

/// Half-width or full-width arabic digit.
#[inline]
pub fn is_digit_char(c: char) -> bool {
    matches!(c, '0'..='9' | '０'..='９')
}

pub fn is_kana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_kana_char)
}

pub fn is_hiragana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hiragana_char)
}

pub fn is_katakana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_katakana_char)
}

pub fn has_kanji(s: &str) -> bool {
    KANJI_REGEX.is_match(s)
}

/// Count moras. Small kana and the long-vowel sign attach to the preceding
/// mora; everything else (sokuon included) counts one. Non-empty input
/// always counts at least one.
pub fn mora_length(s: &str) -> usize {
    let n = s
        .chars()
        .filter(|&c| !is_small_kana(c) && !is_long_vowel(c))
        .count();
    if n == 0 && !s.is_empty() {
        1
    } else {
        n
    }
}

pub fn kata_to_hira(c: char) -> char {
    if KATA_SHIFTABLE_START <= c && c <= KATA_SHIFTABLE_END {
        let z = c as u32 + HIRA_START as u32 - KATA_START as u32;
        char::from_u32(z).unwrap_or(c)
    } else {
        c
    }
}

pub fn kata_to_hira_str(s: &str) -> String {
    s.chars().map(kata_to_hira).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classifies_the_usual_suspects() {
        assert_eq!(classify('あ'), CharClass::Hiragana);
        assert_eq!(classify('ア'), CharClass::Katakana);
        assert_eq!(classify('犬'), CharClass::Kanji);
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify('７'), CharClass::Digit);
        assert_eq!(classify('x'), CharClass::Latin);
        assert_eq!(classify('ゃ'), CharClass::SmallKana);
        assert_eq!(classify('ァ'), CharClass::SmallKana);
        assert_eq!(classify('っ'), CharClass::Sokuon);
        assert_eq!(classify('ー'), CharClass::LongVowel);
        assert_eq!(classify('。'), CharClass::PunctSeparator);
        assert_eq!(classify(' '), CharClass::Other);
    }

    #[test]
    fn string_predicates() {
        assert!(is_kana("たべる"));
        assert!(is_kana("タベル"));
        assert!(!is_kana("食べる"));
        assert!(is_hiragana("きょう"));
        assert!(!is_hiragana("キョウ"));
        assert!(is_katakana("コーヒー"));
        assert!(has_kanji("食べました"));
        assert!(!has_kanji("たべました"));
    }

    #[test]
    fn mora_counting() {
        assert_eq!(mora_length("きょう"), 2); // きょ + う
        assert_eq!(mora_length("コーヒー"), 2); // コー + ヒー
        assert_eq!(mora_length("がっこう"), 4); // が + っ + こ + う
        assert_eq!(mora_length("ちょっと"), 3);
        assert_eq!(mora_length("ー"), 1); // degenerate, clamps to one
    }

    #[test]
    fn kata_to_hira_roundtrip() {
        assert_eq!(kata_to_hira_str("テンキ"), "てんき");
        assert_eq!(kata_to_hira_str("ねこ"), "ねこ");
        // ー has no hiragana counterpart and passes through
        assert_eq!(kata_to_hira_str("コーヒー"), "こーひー");
    }
}
