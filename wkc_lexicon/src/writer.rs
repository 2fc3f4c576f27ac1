//! Artifact writer: serializes the trie and the seq tables in the formats
//! the reader maps. The off-line builder drives this; tests use it to
//! produce small fixtures in tempdirs.

use std::{collections::BTreeMap, fs, path::Path};

use snafu::ResultExt;

use crate::{
    entry::Record,
    trie::{TRIE_MAGIC, TRIE_VERSION},
    IoError, Result,
};

#[derive(Default)]
struct BuildNode {
    children: BTreeMap<u8, BuildNode>,
    records: Vec<Record>,
}

/// Serialize `(surface, records)` pairs into a trie artifact. Input order
/// is irrelevant; duplicate surfaces append to the same key.
pub fn write_trie(entries: &[(String, Vec<Record>)]) -> Vec<u8> {
    let mut root = BuildNode::default();
    for (surface, records) in entries {
        let mut node = &mut root;
        for byte in surface.as_bytes() {
            node = node.children.entry(*byte).or_default();
        }
        node.records.extend_from_slice(records);
    }

    // Breadth-first layout keeps each node's children contiguous.
    let mut flat: Vec<(u8, u8, u16, u32, u32)> = Vec::new();
    let mut records: Vec<Record> = Vec::new();
    let mut queue: Vec<(&BuildNode, usize)> = Vec::new();

    let rec_base = records.len() as u32;
    records.extend_from_slice(&root.records);
    flat.push((0, root.records.len() as u8, 0, 0, rec_base));
    queue.push((&root, 0));

    let mut head = 0usize;
    while head < queue.len() {
        let (node, index) = queue[head];
        head += 1;
        let first_child = flat.len() as u32;
        for (label, child) in &node.children {
            debug_assert!(child.records.len() <= u8::MAX as usize);
            let rec_base = records.len() as u32;
            records.extend_from_slice(&child.records);
            queue.push((child, flat.len()));
            flat.push((*label, child.records.len() as u8, 0, 0, rec_base));
        }
        flat[index].2 = node.children.len() as u16;
        flat[index].3 = first_child;
    }

    let mut out = Vec::with_capacity(16 + flat.len() * 12 + records.len() * 12);
    out.extend_from_slice(&TRIE_MAGIC.to_le_bytes());
    out.extend_from_slice(&TRIE_VERSION.to_le_bytes());
    out.extend_from_slice(&(flat.len() as u32).to_le_bytes());
    out.extend_from_slice(&(records.len() as u32).to_le_bytes());
    for (label, rec_count, child_count, first_child, rec_base) in flat {
        out.push(label);
        out.push(rec_count);
        out.extend_from_slice(&child_count.to_le_bytes());
        out.extend_from_slice(&first_child.to_le_bytes());
        out.extend_from_slice(&rec_base.to_le_bytes());
    }
    for rec in records {
        out.extend_from_slice(&rec.encode());
    }
    out
}

/// Serialize a seq-keyed string table. Rows are sorted by seq here so the
/// caller can pass them in any order.
pub fn write_seq_table(rows: &[(u32, String)]) -> Vec<u8> {
    let mut sorted: Vec<&(u32, String)> = rows.iter().collect();
    sorted.sort_by_key(|(seq, _)| *seq);
    sorted.dedup_by_key(|(seq, _)| *seq);

    let mut out = Vec::new();
    out.extend_from_slice(&(sorted.len() as u32).to_le_bytes());
    for (seq, text) in sorted {
        out.extend_from_slice(&seq.to_le_bytes());
        out.extend_from_slice(&(text.len() as u16).to_le_bytes());
        out.extend_from_slice(text.as_bytes());
    }
    out
}

/// Write the three artifacts (`lexicon.trie`, `base_forms.bin`,
/// `readings.bin`) under `dir`.
pub fn write_dir<P: AsRef<Path>>(
    dir: P,
    entries: &[(String, Vec<Record>)],
    base_forms: &[(u32, String)],
    readings: &[(u32, String)],
) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).context(IoError)?;
    fs::write(dir.join(crate::TRIE_FILE), write_trie(entries)).context(IoError)?;
    fs::write(dir.join(crate::BASE_FORMS_FILE), write_seq_table(base_forms)).context(IoError)?;
    fs::write(dir.join(crate::READINGS_FILE), write_seq_table(readings)).context(IoError)?;
    Ok(())
}
