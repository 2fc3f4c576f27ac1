//! Memory-mapped lexicon: a prefix-indexed key store over surface forms
//! plus two seq-keyed side tables (dictionary-form text and kana
//! readings). One process-wide instance is shared by every analysis call;
//! per-call state never touches this crate.

mod blob;
mod entry;
mod pos;
mod tables;
mod trie;

pub mod global;
pub mod writer;

use std::path::{Path, PathBuf};

use snafu::Snafu;
use tracing::{info, instrument};

pub use crate::{
    blob::Blob,
    entry::{Record, WordEntry, RECORD_SIZE},
    pos::PosTag,
    trie::PrefixItems,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const TRIE_FILE: &str = "lexicon.trie";
pub const BASE_FORMS_FILE: &str = "base_forms.bin";
pub const READINGS_FILE: &str = "readings.bin";

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Error)))]
pub enum Error {
    /// The artifact is absent at the configured path.
    #[snafu(display("lexicon artifact missing: {}", path.display()))]
    MissingError { path: PathBuf },
    /// The artifact exists but cannot be understood.
    #[snafu(display("lexicon artifact corrupt: {detail}"))]
    CorruptError { detail: String },
    IoError { source: std::io::Error },
}

/// The shared read-only lexicon. Construction maps the three artifacts;
/// everything after that is immutable.
#[derive(Debug)]
pub struct Lexicon {
    trie: trie::Trie,
    base_forms: tables::SeqTable,
    readings: tables::SeqTable,
}

impl Lexicon {
    /// Open `lexicon.trie`, `base_forms.bin` and `readings.bin` under
    /// `dir`.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Lexicon> {
        let dir = dir.as_ref();
        let open = |name: &str| -> Result<Blob> {
            let path = dir.join(name);
            if !path.exists() {
                return MissingError { path }.fail();
            }
            Blob::open(&path)
        };
        let lexicon = Lexicon::load(
            open(TRIE_FILE)?,
            open(BASE_FORMS_FILE)?,
            open(READINGS_FILE)?,
        )?;
        info!(
            records = lexicon.record_count(),
            base_forms = lexicon.base_form_count(),
            readings = lexicon.reading_count(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Assemble a lexicon from already-opened blobs. Validation happens
    /// here; a malformed artifact never yields a usable `Lexicon`.
    pub fn load(trie: Blob, base_forms: Blob, readings: Blob) -> Result<Lexicon> {
        Ok(Lexicon {
            trie: trie::Trie::from_blob(trie)?,
            base_forms: tables::SeqTable::from_blob(base_forms)?,
            readings: tables::SeqTable::from_blob(readings)?,
        })
    }

    /// All records under an exact surface. Missing keys are an empty
    /// list, never an error.
    pub fn lookup(&self, surface: &str) -> Vec<WordEntry> {
        self.trie.lookup(surface)
    }

    /// True iff `surface` is a key (with at least one record).
    pub fn contains_key(&self, surface: &str) -> bool {
        self.trie.contains_key(surface)
    }

    /// True iff at least one key starts with `prefix`. Allocation-free;
    /// this is the lattice builder's early-termination probe.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.trie.has_prefix(prefix)
    }

    /// Enumerate every `(key, records)` under a prefix in key order.
    pub fn prefix_items(&self, prefix: &str) -> PrefixItems<'_> {
        self.trie.prefix_items(prefix)
    }

    /// Dictionary-form text for a sequence id.
    pub fn dict_form_text(&self, seq: u32) -> Option<&str> {
        self.base_forms.get(seq)
    }

    /// Kana reading for a sequence id, as stored (the facade normalizes
    /// to hiragana).
    pub fn kana_reading(&self, seq: u32) -> Option<&str> {
        self.readings.get(seq)
    }

    pub fn record_count(&self) -> usize {
        self.trie.record_count()
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    pub fn base_form_count(&self) -> usize {
        self.base_forms.len()
    }

    pub fn reading_count(&self) -> usize {
        self.readings.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rec(seq: u32, cost: i16, pos: PosTag, conj_type: u8, base_seq: u32) -> Record {
        Record {
            seq,
            cost,
            pos_id: pos as u8,
            conj_type,
            base_seq,
        }
    }

    fn small_lexicon() -> Lexicon {
        let entries = vec![
            ("猫".to_string(), vec![rec(1, 5, PosTag::N, 0, 1)]),
            ("猫舌".to_string(), vec![rec(2, 30, PosTag::N, 0, 2)]),
            ("食べる".to_string(), vec![rec(3, 10, PosTag::V1, 0, 3)]),
            (
                "食べた".to_string(),
                vec![rec(900, 10, PosTag::V1, 2, 3)],
            ),
            (
                "は".to_string(),
                vec![
                    rec(10, 1, PosTag::Prt, 0, 10),
                    rec(11, 40, PosTag::N, 0, 11),
                ],
            ),
        ];
        let base_forms = vec![
            (1, "猫".to_string()),
            (2, "猫舌".to_string()),
            (3, "食べる".to_string()),
            (10, "は".to_string()),
            (11, "歯".to_string()),
        ];
        let readings = vec![
            (1, "ねこ".to_string()),
            (2, "ねこじた".to_string()),
            (3, "たべる".to_string()),
            (10, "は".to_string()),
            (11, "は".to_string()),
        ];
        Lexicon::load(
            Blob::from_bytes(writer::write_trie(&entries)),
            Blob::from_bytes(writer::write_seq_table(&base_forms)),
            Blob::from_bytes(writer::write_seq_table(&readings)),
        )
        .unwrap()
    }

    #[test]
    fn lookup_exact() {
        let lex = small_lexicon();
        let entries = lex.lookup("猫");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].seq, 1);
        assert_eq!(entries[0].pos(), PosTag::N);

        // multiple records under one key
        let entries = lex.lookup("は");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].seq, 10);
        assert_eq!(entries[1].seq, 11);

        // missing key is empty, not an error
        assert!(lex.lookup("犬").is_empty());
        // prefixes of keys are not keys themselves
        assert!(lex.lookup("食べ").is_empty());
        assert!(!lex.contains_key("食べ"));
    }

    #[test]
    fn prefix_probes() {
        let lex = small_lexicon();
        assert!(lex.has_prefix("猫"));
        assert!(lex.has_prefix("食べ"));
        assert!(lex.has_prefix("食べた"));
        assert!(!lex.has_prefix("犬"));
        assert!(!lex.has_prefix("食べたい"));
    }

    #[test]
    fn prefix_enumeration_in_key_order() {
        let lex = small_lexicon();
        let keys: Vec<String> = lex.prefix_items("猫").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["猫".to_string(), "猫舌".to_string()]);

        let all: Vec<String> = lex.prefix_items("").map(|(k, _)| k).collect();
        assert_eq!(all.len(), 5);

        let none: Vec<String> = lex.prefix_items("犬").map(|(k, _)| k).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn side_tables() {
        let lex = small_lexicon();
        assert_eq!(lex.dict_form_text(3), Some("食べる"));
        assert_eq!(lex.kana_reading(2), Some("ねこじた"));
        assert_eq!(lex.dict_form_text(999), None);
    }

    #[test]
    fn conjugated_entry_points_at_its_root() {
        let lex = small_lexicon();
        let entries = lex.lookup("食べた");
        assert_eq!(entries.len(), 1);
        let conj = &entries[0];
        assert_eq!(conj.conj_type, 2);
        let root = lex.lookup(lex.dict_form_text(conj.base_form_id()).unwrap());
        assert_eq!(root.len(), 1);
        assert!(root[0].is_root());
    }

    #[test]
    fn corrupt_artifacts_are_rejected() {
        let err = Lexicon::load(
            Blob::from_bytes(vec![0; 3]),
            Blob::from_bytes(writer::write_seq_table(&[])),
            Blob::from_bytes(writer::write_seq_table(&[])),
        )
        .unwrap_err();
        assert!(matches!(err, Error::CorruptError { .. }));

        let mut trie = writer::write_trie(&[]);
        trie[0] ^= 0xFF;
        let err = Lexicon::load(
            Blob::from_bytes(trie),
            Blob::from_bytes(writer::write_seq_table(&[])),
            Blob::from_bytes(writer::write_seq_table(&[])),
        )
        .unwrap_err();
        assert!(matches!(err, Error::CorruptError { .. }));

        // truncated record region
        let mut trie = writer::write_trie(&[(
            "猫".to_string(),
            vec![rec(1, 5, PosTag::N, 0, 1)],
        )]);
        trie.truncate(trie.len() - 1);
        let err = Lexicon::load(
            Blob::from_bytes(trie),
            Blob::from_bytes(writer::write_seq_table(&[])),
            Blob::from_bytes(writer::write_seq_table(&[])),
        )
        .unwrap_err();
        assert!(matches!(err, Error::CorruptError { .. }));
    }

    #[test]
    fn load_from_dir_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexicon::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingError { .. }));

        writer::write_dir(
            dir.path(),
            &[("猫".to_string(), vec![rec(1, 5, PosTag::N, 0, 1)])],
            &[(1, "猫".to_string())],
            &[(1, "ねこ".to_string())],
        )
        .unwrap();
        let lex = Lexicon::load_from_dir(dir.path()).unwrap();
        assert_eq!(lex.lookup("猫").len(), 1);
    }
}
