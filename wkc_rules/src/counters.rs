//! Counter expressions: a numeral plus a counter suffix forms one token
//! whose reading folds the numeral's phonology into the counter's first
//! consonant (三匹 さんびき, 一杯 いっぱい, 八千 はっせん).
//!
//! Number parsing accepts kanji numerals (positional and unit-based),
//! half-width and full-width digits. Readings are produced in hiragana.

use once_cell::sync::Lazy;

use wkc_ja_utils::is_digit_char;

/// How a trigger digit reshapes number + counter.
#[derive(Clone, Copy, Debug)]
pub enum DigitRule {
    /// Phonological flags: geminate the numeral's final mora, voice the
    /// counter's initial consonant, or half-voice it.
    Flags {
        gemination: bool,
        rendaku: bool,
        handakuten: bool,
    },
    /// Replace the trigger digit's reading outright (四月 → し + がつ).
    Override(&'static str),
}

const G: DigitRule = DigitRule::Flags {
    gemination: true,
    rendaku: false,
    handakuten: false,
};
const GH: DigitRule = DigitRule::Flags {
    gemination: true,
    rendaku: false,
    handakuten: true,
};
const R: DigitRule = DigitRule::Flags {
    gemination: false,
    rendaku: true,
    handakuten: false,
};
const H: DigitRule = DigitRule::Flags {
    gemination: false,
    rendaku: false,
    handakuten: true,
};

pub struct CounterDef {
    pub suffix: &'static str,
    /// Base hiragana reading of the suffix.
    pub reading: &'static str,
    /// Trigger digit (1–9, or 10 for a trailing round unit) → rule.
    pub digit_rules: &'static [(u64, DigitRule)],
    /// Whole-value readings that replace number and counter together
    /// (一人 ひとり, 二十日 はつか).
    pub value_overrides: &'static [(u64, &'static str)],
}

/// The closed counter set, longest suffix first at match time.
pub const COUNTERS: &[CounterDef] = &[
    CounterDef {
        suffix: "匹",
        reading: "ひき",
        digit_rules: &[(1, GH), (3, R), (6, GH), (8, GH), (10, GH)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "冊",
        reading: "さつ",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "杯",
        reading: "はい",
        digit_rules: &[(1, GH), (3, R), (6, GH), (8, GH), (10, GH)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "本",
        reading: "ほん",
        digit_rules: &[(1, GH), (3, R), (6, GH), (8, GH), (10, GH)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "階",
        reading: "かい",
        digit_rules: &[(1, G), (3, R), (6, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "軒",
        reading: "けん",
        digit_rules: &[(1, G), (3, R), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "回",
        reading: "かい",
        digit_rules: &[(1, G), (6, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "年",
        reading: "ねん",
        digit_rules: &[(4, DigitRule::Override("よ"))],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "月",
        reading: "がつ",
        digit_rules: &[
            (4, DigitRule::Override("し")),
            (7, DigitRule::Override("しち")),
            (9, DigitRule::Override("く")),
        ],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "日",
        reading: "にち",
        digit_rules: &[],
        value_overrides: &[
            (1, "ついたち"),
            (2, "ふつか"),
            (3, "みっか"),
            (4, "よっか"),
            (5, "いつか"),
            (6, "むいか"),
            (7, "なのか"),
            (8, "ようか"),
            (9, "ここのか"),
            (10, "とおか"),
            (14, "じゅうよっか"),
            (20, "はつか"),
            (24, "にじゅうよっか"),
        ],
    },
    CounterDef {
        suffix: "人",
        reading: "にん",
        digit_rules: &[(4, DigitRule::Override("よ"))],
        value_overrides: &[(1, "ひとり"), (2, "ふたり")],
    },
    CounterDef {
        suffix: "度",
        reading: "ど",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "台",
        reading: "だい",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "位",
        reading: "い",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "枚",
        reading: "まい",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "個",
        reading: "こ",
        digit_rules: &[(1, G), (6, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "つ",
        reading: "つ",
        digit_rules: &[],
        value_overrides: &[
            (1, "ひとつ"),
            (2, "ふたつ"),
            (3, "みっつ"),
            (4, "よっつ"),
            (5, "いつつ"),
            (6, "むっつ"),
            (7, "ななつ"),
            (8, "やっつ"),
            (9, "ここのつ"),
            (10, "とお"),
        ],
    },
    CounterDef {
        suffix: "号",
        reading: "ごう",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "週間",
        reading: "しゅうかん",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "週",
        reading: "しゅう",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "秒",
        reading: "びょう",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "分",
        reading: "ふん",
        digit_rules: &[(1, GH), (3, H), (4, H), (6, GH), (8, GH), (10, GH)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "時間",
        reading: "じかん",
        digit_rules: &[
            (4, DigitRule::Override("よ")),
            (7, DigitRule::Override("しち")),
            (9, DigitRule::Override("く")),
        ],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "時",
        reading: "じ",
        digit_rules: &[
            (4, DigitRule::Override("よ")),
            (7, DigitRule::Override("しち")),
            (9, DigitRule::Override("く")),
        ],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "円",
        reading: "えん",
        digit_rules: &[(4, DigitRule::Override("よ"))],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "歳",
        reading: "さい",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[(20, "はたち")],
    },
    CounterDef {
        suffix: "才",
        reading: "さい",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[(20, "はたち")],
    },
    CounterDef {
        suffix: "頭",
        reading: "とう",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "羽",
        reading: "わ",
        digit_rules: &[(3, R)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "足",
        reading: "そく",
        digit_rules: &[(1, G), (3, R), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "曲",
        reading: "きょく",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "課",
        reading: "か",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "番",
        reading: "ばん",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "巻",
        reading: "かん",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "通",
        reading: "つう",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "件",
        reading: "けん",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "着",
        reading: "ちゃく",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "泊",
        reading: "はく",
        digit_rules: &[(1, GH), (3, H), (4, H), (6, GH), (8, GH), (10, GH)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "票",
        reading: "ひょう",
        digit_rules: &[(1, GH), (3, R), (6, GH), (8, GH), (10, GH)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "名",
        reading: "めい",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "倍",
        reading: "ばい",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "点",
        reading: "てん",
        digit_rules: &[(1, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "ページ",
        reading: "ぺーじ",
        digit_rules: &[(1, G), (6, G), (8, G), (10, G)],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "キロ",
        reading: "きろ",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "メートル",
        reading: "めーとる",
        digit_rules: &[],
        value_overrides: &[],
    },
    CounterDef {
        suffix: "グラム",
        reading: "ぐらむ",
        digit_rules: &[],
        value_overrides: &[],
    },
];

static COUNTERS_BY_LENGTH: Lazy<Vec<&'static CounterDef>> = Lazy::new(|| {
    let mut sorted: Vec<_> = COUNTERS.iter().collect();
    sorted.sort_by_key(|def| std::cmp::Reverse(def.suffix.len()));
    sorted
});

const KANJI_DIGITS: &[(char, u64)] = &[
    ('零', 0),
    ('〇', 0),
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
];

const KANJI_UNITS: &[(char, u64)] = &[('十', 10), ('百', 100), ('千', 1000)];
const KANJI_MYRIADS: &[(char, u64)] = &[('万', 10_000), ('億', 100_000_000)];

fn digit_value(c: char) -> Option<u64> {
    if let Some(d) = c.to_digit(10) {
        return Some(d as u64);
    }
    if ('０'..='９').contains(&c) {
        return Some(c as u64 - '０' as u64);
    }
    KANJI_DIGITS
        .iter()
        .find(|(k, _)| *k == c)
        .map(|(_, v)| *v)
}

fn unit_value(c: char) -> Option<u64> {
    KANJI_UNITS.iter().find(|(k, _)| *k == c).map(|(_, v)| *v)
}

fn myriad_value(c: char) -> Option<u64> {
    KANJI_MYRIADS.iter().find(|(k, _)| *k == c).map(|(_, v)| *v)
}

/// True for any character that can appear in a numeral.
pub fn is_numeric_char(c: char) -> bool {
    is_digit_char(c) || digit_value(c).is_some() || unit_value(c).is_some() || myriad_value(c).is_some()
}

/// Parse a numeral written with kanji (positional or unit-based), or
/// half-/full-width digits. Returns `None` for malformed input such as a
/// dangling myriad or an empty string.
pub fn parse_number(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    let mut total: u64 = 0;
    let mut section: u64 = 0;
    let mut current: u64 = 0;
    let mut seen_any = false;
    for c in s.chars() {
        if let Some(d) = digit_value(c) {
            current = current.checked_mul(10)?.checked_add(d)?;
            seen_any = true;
        } else if let Some(unit) = unit_value(c) {
            let n = if current == 0 { 1 } else { current };
            section = section.checked_add(n.checked_mul(unit)?)?;
            current = 0;
            seen_any = true;
        } else if let Some(myriad) = myriad_value(c) {
            let n = section.checked_add(current)?;
            let n = if n == 0 { 1 } else { n };
            total = total.checked_add(n.checked_mul(myriad)?)?;
            section = 0;
            current = 0;
            seen_any = true;
        } else {
            return None;
        }
    }
    if !seen_any {
        return None;
    }
    total.checked_add(section)?.checked_add(current)
}

/// Render a value with kanji numerals (unit-based). Inverse of
/// `parse_number` over `[0, 99_999_999]`.
pub fn number_to_kanji(n: u64) -> String {
    if n == 0 {
        return "零".to_string();
    }
    const DIGITS: &[&str] = &["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
    let mut out = String::new();
    let man = n / 10_000;
    let rest = n % 10_000;
    if man > 0 {
        // the myriad keeps its 一 (一万), lower units drop it
        if man >= 10 {
            out.push_str(&number_to_kanji(man));
        } else {
            out.push_str(DIGITS[man as usize]);
        }
        out.push('万');
    }
    let units: &[(u64, char)] = &[(1000, '千'), (100, '百'), (10, '十')];
    let mut rem = rest;
    for &(unit, label) in units {
        let d = rem / unit;
        rem %= unit;
        if d > 0 {
            if d > 1 {
                out.push_str(DIGITS[d as usize]);
            }
            out.push(label);
        }
    }
    if rem > 0 {
        out.push_str(DIGITS[rem as usize]);
    }
    out
}

const DIGIT_KANA: &[&str] = &[
    "れい", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
];

fn hundreds_kana(d: u64) -> String {
    match d {
        1 => "ひゃく".to_string(),
        3 => "さんびゃく".to_string(),
        6 => "ろっぴゃく".to_string(),
        8 => "はっぴゃく".to_string(),
        _ => format!("{}ひゃく", DIGIT_KANA[d as usize]),
    }
}

fn thousands_kana(d: u64) -> String {
    match d {
        1 => "せん".to_string(),
        3 => "さんぜん".to_string(),
        8 => "はっせん".to_string(),
        _ => format!("{}せん", DIGIT_KANA[d as usize]),
    }
}

/// Hiragana reading of a bare number, with the standard phonetic
/// irregularities on the powers of ten.
pub fn number_to_kana(n: u64) -> String {
    if n == 0 {
        return "れい".to_string();
    }
    let mut out = String::new();
    let man = n / 10_000;
    let rest = n % 10_000;
    if man > 0 {
        out.push_str(&number_to_kana(man));
        out.push_str("まん");
    }
    let th = rest / 1000;
    if th > 0 {
        out.push_str(&thousands_kana(th));
    }
    let hu = rest % 1000 / 100;
    if hu > 0 {
        out.push_str(&hundreds_kana(hu));
    }
    let te = rest % 100 / 10;
    if te > 0 {
        if te > 1 {
            out.push_str(DIGIT_KANA[te as usize]);
        }
        out.push_str("じゅう");
    }
    let d = rest % 10;
    if d > 0 {
        out.push_str(DIGIT_KANA[d as usize]);
    }
    out
}

fn dakuten(c: char) -> char {
    match c {
        'か' => 'が',
        'き' => 'ぎ',
        'く' => 'ぐ',
        'け' => 'げ',
        'こ' => 'ご',
        'さ' => 'ざ',
        'し' => 'じ',
        'す' => 'ず',
        'せ' => 'ぜ',
        'そ' => 'ぞ',
        'た' => 'だ',
        'ち' => 'ぢ',
        'つ' => 'づ',
        'て' => 'で',
        'と' => 'ど',
        'は' => 'ば',
        'ひ' => 'び',
        'ふ' => 'ぶ',
        'へ' => 'べ',
        'ほ' => 'ぼ',
        // counter rendaku voices 羽 to ば
        'わ' => 'ば',
        other => other,
    }
}

fn handakuten_char(c: char) -> char {
    match c {
        'は' => 'ぱ',
        'ひ' => 'ぴ',
        'ふ' => 'ぷ',
        'へ' => 'ぺ',
        'ほ' => 'ぽ',
        other => other,
    }
}

/// Final morae that contract to っ under gemination.
fn geminate_tail(kana: &mut String) {
    if let Some(last) = kana.chars().last() {
        if matches!(last, 'ち' | 'く' | 'う') {
            kana.pop();
            kana.push('っ');
        }
    }
}

/// The digit whose phonology governs the junction with the counter: the
/// last nonzero decimal digit, or 10 when the value ends in a round unit.
fn trigger_digit(value: u64) -> u64 {
    if value == 0 {
        return 0;
    }
    if value % 10 != 0 {
        value % 10
    } else {
        10
    }
}

fn rule_for(def: &CounterDef, digit: u64) -> Option<DigitRule> {
    def.digit_rules
        .iter()
        .find(|(d, _)| *d == digit)
        .map(|(_, rule)| *rule)
}

/// Reading of `value` followed by the counter, phonology applied.
pub fn counter_reading(value: u64, def: &CounterDef) -> String {
    if let Some((_, whole)) = def
        .value_overrides
        .iter()
        .find(|(v, _)| *v == value)
    {
        return (*whole).to_string();
    }

    let digit = trigger_digit(value);
    let mut suffix: String = def.reading.to_string();
    let mut number = match rule_for(def, digit) {
        Some(DigitRule::Override(reading)) => {
            let head = value - value % 10;
            let mut n = if head > 0 {
                number_to_kana(head)
            } else {
                String::new()
            };
            n.push_str(reading);
            n
        }
        Some(DigitRule::Flags {
            gemination,
            rendaku,
            handakuten,
        }) => {
            let mut n = number_to_kana(value);
            if gemination {
                geminate_tail(&mut n);
            }
            let mut chars: Vec<char> = suffix.chars().collect();
            if let Some(first) = chars.first_mut() {
                if handakuten {
                    *first = handakuten_char(*first);
                } else if rendaku {
                    *first = dakuten(*first);
                }
            }
            suffix = chars.into_iter().collect();
            n
        }
        None => number_to_kana(value),
    };
    number.push_str(&suffix);
    number
}

/// A recognized counter expression at the head of `text`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterMatch {
    /// Bytes of `text` the expression covers (number + suffix).
    pub len: usize,
    pub value: u64,
    pub reading: String,
}

/// Scan a maximal numeric prefix and a counter suffix at the head of
/// `text`.
pub fn recognize_counter(text: &str) -> Option<CounterMatch> {
    let mut num_len = 0;
    for c in text.chars() {
        if is_numeric_char(c) {
            num_len += c.len_utf8();
        } else {
            break;
        }
    }
    if num_len == 0 {
        return None;
    }
    let value = parse_number(&text[..num_len])?;
    let rest = &text[num_len..];
    let def = COUNTERS_BY_LENGTH
        .iter()
        .find(|def| rest.starts_with(def.suffix))
        .copied()?;
    Some(CounterMatch {
        len: num_len + def.suffix.len(),
        value,
        reading: counter_reading(value, def),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_kanji_and_digit_numerals() {
        assert_eq!(parse_number("三"), Some(3));
        assert_eq!(parse_number("十"), Some(10));
        assert_eq!(parse_number("二十四"), Some(24));
        assert_eq!(parse_number("三千二百"), Some(3200));
        assert_eq!(parse_number("八千"), Some(8000));
        assert_eq!(parse_number("一万"), Some(10_000));
        assert_eq!(parse_number("万"), Some(10_000));
        assert_eq!(parse_number("九千九百九十九万九千九百九十九"), Some(99_999_999));
        assert_eq!(parse_number("3000"), Some(3000));
        assert_eq!(parse_number("３０００"), Some(3000));
        assert_eq!(parse_number("二〇二五"), Some(2025));
        assert_eq!(parse_number("零"), Some(0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn renders_kanji_numerals() {
        assert_eq!(number_to_kanji(0), "零");
        assert_eq!(number_to_kanji(3), "三");
        assert_eq!(number_to_kanji(24), "二十四");
        assert_eq!(number_to_kanji(100), "百");
        assert_eq!(number_to_kanji(1234), "千二百三十四");
        assert_eq!(number_to_kanji(10_000), "一万");
        assert_eq!(number_to_kanji(99_999_999), "九千九百九十九万九千九百九十九");
    }

    #[test]
    fn kanji_rendering_roundtrips() {
        // sampled across the supported range
        for n in [
            0u64, 1, 7, 10, 11, 24, 99, 100, 101, 300, 600, 800, 999, 1000, 3000, 8000, 9999,
            10_000, 12_345, 99_999, 100_000, 654_321, 9_999_999, 10_000_000, 99_999_999,
        ] {
            assert_eq!(parse_number(&number_to_kanji(n)), Some(n), "kanji {n}");
            assert_eq!(parse_number(&n.to_string()), Some(n), "arabic {n}");
        }
    }

    #[test]
    fn power_of_ten_irregularities() {
        assert_eq!(number_to_kana(3000), "さんぜん");
        assert_eq!(number_to_kana(8000), "はっせん");
        assert_eq!(number_to_kana(300), "さんびゃく");
        assert_eq!(number_to_kana(600), "ろっぴゃく");
        assert_eq!(number_to_kana(800), "はっぴゃく");
        assert_eq!(number_to_kana(1000), "せん");
        assert_eq!(number_to_kana(10_000), "いちまん");
        assert_eq!(number_to_kana(21), "にじゅういち");
    }

    fn counter(suffix: &str) -> &'static CounterDef {
        COUNTERS.iter().find(|def| def.suffix == suffix).unwrap()
    }

    #[test]
    fn small_animal_counter_phonology() {
        let hiki = counter("匹");
        assert_eq!(counter_reading(1, hiki), "いっぴき");
        assert_eq!(counter_reading(2, hiki), "にひき");
        assert_eq!(counter_reading(3, hiki), "さんびき");
        assert_eq!(counter_reading(4, hiki), "よんひき");
        assert_eq!(counter_reading(6, hiki), "ろっぴき");
        assert_eq!(counter_reading(8, hiki), "はっぴき");
        assert_eq!(counter_reading(10, hiki), "じゅっぴき");
        assert_eq!(counter_reading(13, hiki), "じゅうさんびき");
        assert_eq!(counter_reading(100, hiki), "ひゃっぴき");
    }

    #[test]
    fn minute_counter_takes_handakuten_without_gemination() {
        let fun = counter("分");
        assert_eq!(counter_reading(3, fun), "さんぷん");
        assert_eq!(counter_reading(4, fun), "よんぷん");
        assert_eq!(counter_reading(1, fun), "いっぷん");
        assert_eq!(counter_reading(5, fun), "ごふん");
    }

    #[test]
    fn date_and_people_specials() {
        let nichi = counter("日");
        assert_eq!(counter_reading(1, nichi), "ついたち");
        assert_eq!(counter_reading(14, nichi), "じゅうよっか");
        assert_eq!(counter_reading(20, nichi), "はつか");
        assert_eq!(counter_reading(11, nichi), "じゅういちにち");

        let nin = counter("人");
        assert_eq!(counter_reading(1, nin), "ひとり");
        assert_eq!(counter_reading(2, nin), "ふたり");
        assert_eq!(counter_reading(3, nin), "さんにん");
        assert_eq!(counter_reading(4, nin), "よにん");
    }

    #[test]
    fn month_overrides() {
        let gatsu = counter("月");
        assert_eq!(counter_reading(4, gatsu), "しがつ");
        assert_eq!(counter_reading(7, gatsu), "しちがつ");
        assert_eq!(counter_reading(9, gatsu), "くがつ");
        assert_eq!(counter_reading(1, gatsu), "いちがつ");
    }

    #[test]
    fn native_counter() {
        let tsu = counter("つ");
        assert_eq!(counter_reading(3, tsu), "みっつ");
        assert_eq!(counter_reading(10, tsu), "とお");
    }

    #[test]
    fn recognizes_expressions() {
        let m = recognize_counter("三匹の猫").unwrap();
        assert_eq!(m.len, "三匹".len());
        assert_eq!(m.value, 3);
        assert_eq!(m.reading, "さんびき");

        let m = recognize_counter("３０００円です").unwrap();
        assert_eq!(m.len, "３０００円".len());
        assert_eq!(m.value, 3000);
        assert_eq!(m.reading, "さんぜんえん");

        let m = recognize_counter("五ページ").unwrap();
        assert_eq!(m.reading, "ごぺーじ");

        // longest suffix wins
        let m = recognize_counter("二時間").unwrap();
        assert_eq!(m.len, "二時間".len());
        assert_eq!(m.reading, "にじかん");

        assert_eq!(recognize_counter("猫三匹"), None);
        assert_eq!(recognize_counter("三"), None);
    }
}
