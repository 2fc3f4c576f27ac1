//! Shared fixture: a small lexicon covering the sentences the suite
//! exercises, built through the artifact writer so the on-disk formats
//! are in the loop.
#![allow(dead_code)]

use std::sync::Arc;

use wakachi::{Analyser, PosTag};
use wkc_lexicon::{writer, Blob, Lexicon, Record};

struct Row {
    surface: &'static str,
    seq: u32,
    cost: i16,
    pos: PosTag,
    conj_type: u8,
    base_seq: u32,
    base_form: &'static str,
    reading: &'static str,
}

const fn row(
    surface: &'static str,
    seq: u32,
    cost: i16,
    pos: PosTag,
    conj_type: u8,
    base_seq: u32,
    base_form: &'static str,
    reading: &'static str,
) -> Row {
    Row {
        surface,
        seq,
        cost,
        pos,
        conj_type,
        base_seq,
        base_form,
        reading,
    }
}

const ROWS: &[Row] = &[
    row("今日", 1, 5, PosTag::NT, 0, 1, "今日", "きょう"),
    row("今日は", 2, 25, PosTag::Exp, 0, 2, "今日は", "こんにちは"),
    row("は", 3, 1, PosTag::Prt, 0, 3, "は", "は"),
    row("天気", 4, 8, PosTag::N, 0, 4, "天気", "てんき"),
    row("が", 5, 1, PosTag::Prt, 0, 5, "が", "が"),
    row("いい", 6, 10, PosTag::AdjIx, 0, 6, "いい", "いい"),
    row("です", 7, 2, PosTag::Cop, 0, 7, "です", "です"),
    row("食べる", 8, 12, PosTag::V1, 0, 8, "食べる", "たべる"),
    row("食べました", 9, 12, PosTag::V1, 2, 8, "食べる", "たべました"),
    row("猫", 10, 10, PosTag::N, 0, 10, "猫", "ねこ"),
    row("の", 11, 1, PosTag::Prt, 0, 11, "の", "の"),
    row("よう", 12, 15, PosTag::N, 0, 12, "よう", "よう"),
    row("ようだ", 13, 20, PosTag::Aux, 0, 13, "ようだ", "ようだ"),
    row("だ", 14, 3, PosTag::Cop, 0, 14, "だ", "だ"),
    row("勉強", 15, 10, PosTag::N, 0, 15, "勉強", "べんきょう"),
    row("する", 16, 5, PosTag::VsI, 0, 16, "する", "する"),
    row("しています", 17, 5, PosTag::VsI, 3, 16, "する", "しています"),
    row("何", 18, 5, PosTag::Pn, 0, 18, "何", "なに"),
    row("を", 19, 1, PosTag::Prt, 0, 19, "を", "を"),
    row("か", 20, 2, PosTag::Prt, 0, 20, "か", "か"),
    row("三", 21, 30, PosTag::Num, 0, 21, "三", "さん"),
    row("匹", 22, 40, PosTag::Ctr, 0, 22, "匹", "ひき"),
];

pub fn fixture_artifacts() -> (
    Vec<(String, Vec<Record>)>,
    Vec<(u32, String)>,
    Vec<(u32, String)>,
) {
    let mut entries: Vec<(String, Vec<Record>)> = Vec::new();
    let mut base_forms = Vec::new();
    let mut readings = Vec::new();
    for r in ROWS {
        entries.push((
            r.surface.to_string(),
            vec![Record {
                seq: r.seq,
                cost: r.cost,
                pos_id: r.pos as u8,
                conj_type: r.conj_type,
                base_seq: r.base_seq,
            }],
        ));
        if r.conj_type == 0 {
            base_forms.push((r.seq, r.base_form.to_string()));
        }
        readings.push((r.seq, r.reading.to_string()));
    }
    (entries, base_forms, readings)
}

pub fn fixture_lexicon() -> Arc<Lexicon> {
    let (entries, base_forms, readings) = fixture_artifacts();
    Arc::new(
        Lexicon::load(
            Blob::from_bytes(writer::write_trie(&entries)),
            Blob::from_bytes(writer::write_seq_table(&base_forms)),
            Blob::from_bytes(writer::write_seq_table(&readings)),
        )
        .expect("fixture artifacts must load"),
    )
}

pub fn analyser() -> Analyser {
    Analyser::with_lexicon(fixture_lexicon())
}

pub fn surfaces(tokens: &[wakachi::OutputToken]) -> Vec<&str> {
    tokens.iter().map(|t| t.surface.as_str()).collect()
}
