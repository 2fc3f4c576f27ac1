use crate::{blob::Blob, CorruptError, Result};

/// A seq-keyed string table (`count:u32`, then `seq:u32, len:u16, bytes`
/// records sorted by seq). The blob stays mapped; loading builds only a
/// small index of byte ranges, and strings decode on demand.
#[derive(Debug)]
pub struct SeqTable {
    blob: Blob,
    index: Vec<IndexEntry>,
}

#[derive(Debug)]
struct IndexEntry {
    seq: u32,
    offset: u32,
    len: u16,
}

impl SeqTable {
    pub fn from_blob(blob: Blob) -> Result<SeqTable> {
        let data: &[u8] = &blob;
        if data.len() < 4 {
            return CorruptError {
                detail: "seq table shorter than its header",
            }
            .fail();
        }
        let count = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
        let mut index = Vec::with_capacity(count);
        let mut off = 4usize;
        let mut prev_seq: Option<u32> = None;
        for _ in 0..count {
            if off + 6 > data.len() {
                return CorruptError {
                    detail: "seq table truncated mid-record",
                }
                .fail();
            }
            let seq = u32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]]);
            let len = u16::from_le_bytes([data[off + 4], data[off + 5]]);
            off += 6;
            if off + len as usize > data.len() {
                return CorruptError {
                    detail: "seq table text overruns the artifact",
                }
                .fail();
            }
            if let Some(prev) = prev_seq {
                if seq <= prev {
                    return CorruptError {
                        detail: format!("seq table out of order at seq {seq}"),
                    }
                    .fail();
                }
            }
            prev_seq = Some(seq);
            index.push(IndexEntry {
                seq,
                offset: off as u32,
                len,
            });
            off += len as usize;
        }
        if off != data.len() {
            return CorruptError {
                detail: "seq table has trailing bytes",
            }
            .fail();
        }
        Ok(SeqTable { blob, index })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn get(&self, seq: u32) -> Option<&str> {
        let pos = self
            .index
            .binary_search_by_key(&seq, |entry| entry.seq)
            .ok()?;
        let entry = &self.index[pos];
        let bytes = &self.blob[entry.offset as usize..entry.offset as usize + entry.len as usize];
        match std::str::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(_) => {
                tracing::warn!(seq, "seq table entry is not valid utf-8");
                None
            }
        }
    }
}
