//! Merge tables: the closed sets behind the compound-verb merge pass and
//! the ordered literal merge bank.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Auxiliaries that glue onto a preceding te-form.
pub static TE_AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "いる",
        "いた",
        "います",
        "いました",
        "いない",
        "いません",
        "いませんでした",
        "いて",
        "いれば",
        "いよう",
        "しまう",
        "しまった",
        "しまいます",
        "しまいました",
        "しまって",
        "おく",
        "おいた",
        "おきます",
        "おきました",
        "おいて",
        "ください",
        "くださいます",
        "くださいました",
        "くれ",
        "みる",
        "みた",
        "みます",
        "みました",
        "みて",
        "みたい",
        "みよう",
        "くる",
        "きた",
        "きます",
        "きました",
        "こない",
        "いく",
        "いった",
        "いきます",
        "いきました",
        "いかない",
        "ある",
        "あった",
        "あります",
        "ありました",
        "ありません",
        "あげる",
        "あげた",
        "あげます",
        "あげました",
        "もらう",
        "もらった",
        "もらいます",
        "もらいました",
        "もらえる",
        "もらえない",
        "もらえません",
        "みせる",
        "みせた",
        "みせます",
        "みせました",
        "くれる",
        "くれた",
        "くれます",
        "くれました",
        "くれない",
        "くれません",
        "ほしい",
        "いただく",
        "いただきます",
        "いただきました",
        "いただいて",
        "いらっしゃる",
        "いらっしゃいます",
        "いらっしゃいました",
        "おる",
        "おります",
        "おりました",
        "おりません",
    ]
    .into_iter()
    .collect()
});

/// Endings that mark a passive/potential stem on the left token.
pub const PASSIVE_STEM_ENDINGS: &[&str] = &[
    "され", "られ", "かれ", "まれ", "たれ", "なれ", "ばれ", "がれ", "ぜれ",
];

/// Continuations that glue onto a passive/potential stem.
pub static TE_CONTINUATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ている",
        "ていた",
        "ています",
        "ていました",
        "ていない",
        "ていません",
        "ていて",
        "ていれば",
        "てる",
        "てた",
        "てます",
        "てました",
    ]
    .into_iter()
    .collect()
});

/// Nouns that take する directly. Closed set; membership makes a noun +
/// する-family pair merge into one verb token.
pub static SURU_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "勉強", "運動", "結婚", "電話", "料理", "掃除", "洗濯", "散歩", "仕事", "質問", "説明",
        "紹介", "案内", "連絡", "約束", "準備", "練習", "利用", "使用", "研究", "旅行", "買い物",
        "食事", "運転", "参加", "出発", "到着", "帰国", "入学", "卒業", "就職", "退職", "出席",
        "欠席", "予約", "注文", "計画", "相談", "報告", "確認", "返事", "招待", "訪問", "見学",
        "観光", "経験", "失敗", "成功", "努力", "協力", "反対", "賛成", "心配", "安心", "感動",
        "感謝", "緊張", "集中", "注意", "記録", "登録", "保存", "削除", "修理", "工事", "建設",
        "製造", "販売", "輸入", "輸出", "開発", "発表", "発見", "発明", "調査", "調整", "管理",
        "整理", "翻訳", "通訳", "挨拶", "結婚", "離婚", "入院", "退院", "引越し", "遅刻",
        "残業", "徹夜", "外出", "帰宅", "意識", "活動", "行動", "移動", "変更", "追加", "作成",
        "選択", "決定", "判断", "想像", "理解", "解決", "実現", "表現", "存在", "影響", "増加",
        "減少", "比較", "検討", "検索", "入力", "出力", "印刷", "接続", "操作", "設定", "提供",
        "提案", "募集", "応募", "意味",
    ]
    .into_iter()
    .collect()
});

/// する-family continuations a suru-able noun merges with.
pub static SURU_FORMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "する",
        "します",
        "した",
        "しました",
        "して",
        "している",
        "しています",
        "していた",
        "していました",
        "していない",
        "していません",
        "していて",
        "していれば",
        "しない",
        "しません",
        "しなかった",
        "しませんでした",
        "すれば",
        "しよう",
        "しましょう",
        "したい",
        "したかった",
        "させる",
        "させます",
        "させた",
        "させて",
        "させていただきます",
        "される",
        "されます",
        "された",
        "されました",
        "されている",
        "されています",
        "できる",
        "できます",
        "できた",
        "できました",
        "できない",
        "できません",
    ]
    .into_iter()
    .collect()
});

/// Ordered multi-token literal merges. Applied longest-first, greedy
/// left-to-right; the parts must appear as consecutive token surfaces.
pub const LITERAL_MERGES: &[(&[&str], &str)] = &[
    (&["なけれ", "ば", "なり", "ません"], "なければなりません"),
    (&["なけれ", "ば", "なら", "ない"], "なければならない"),
    (&["か", "も", "しれ", "ない"], "かもしれない"),
    (&["か", "も", "しれ", "ません"], "かもしれません"),
    (&["かも", "しれ", "ない"], "かもしれない"),
    (&["かも", "しれ", "ません"], "かもしれません"),
    (&["こと", "が", "できます"], "ことができます"),
    (&["こと", "が", "できる"], "ことができる"),
    (&["に", "つい", "て"], "について"),
    (&["に", "とっ", "て"], "にとって"),
    (&["に", "よっ", "て"], "によって"),
    (&["に", "よる", "と"], "によると"),
    (&["に", "対し", "て"], "に対して"),
    (&["か", "どう", "か"], "かどうか"),
    (&["かも", "しれない"], "かもしれない"),
    (&["に", "ついて"], "について"),
    (&["に", "とって"], "にとって"),
    (&["に", "よって"], "によって"),
    (&["と", "いっ", "た"], "といった"),
    (&["と", "いう"], "という"),
    (&["と", "して"], "として"),
    (&["に", "関し", "て"], "に関して"),
    (&["に", "おい", "て"], "において"),
    (&["に", "おける"], "における"),
    (&["を", "通じ", "て"], "を通じて"),
    (&["に", "ついて", "は"], "については"),
    (&["だ", "ろう"], "だろう"),
    (&["で", "しょう"], "でしょう"),
    (&["お", "願い"], "お願い"),
];

/// The literal merge bank, longest pattern first. Built once; ties keep
/// bank order.
pub static LITERAL_MERGES_BY_LENGTH: Lazy<Vec<&'static (&'static [&'static str], &'static str)>> =
    Lazy::new(|| {
        let mut sorted: Vec<_> = LITERAL_MERGES.iter().collect();
        sorted.sort_by_key(|(parts, _)| std::cmp::Reverse(parts.len()));
        sorted
    });
