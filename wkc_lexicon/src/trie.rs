use crate::{
    blob::Blob,
    entry::{Record, WordEntry, RECORD_SIZE},
    CorruptError, Result,
};

pub const TRIE_MAGIC: u32 = u32::from_le_bytes(*b"WKLX");
pub const TRIE_VERSION: u32 = 1;

const HEADER_SIZE: usize = 16;
const NODE_SIZE: usize = 12;

/// One trie node, decoded from its 12-byte packed form.
///
/// A node's children occupy a contiguous run starting at `first_child`,
/// sorted by label byte, so descending is a binary search per byte. Keys
/// that end at this node own the records `[rec_base, rec_base + rec_count)`.
#[derive(Clone, Copy, Debug)]
struct Node {
    label: u8,
    rec_count: u8,
    child_count: u16,
    first_child: u32,
    rec_base: u32,
}

/// Read-only prefix-indexed key store over a [`Blob`].
///
/// The artifact is a static byte trie: header, node array, record array,
/// all little-endian. Lookup walks one node per key byte; nothing here
/// allocates until records are materialized.
#[derive(Debug)]
pub struct Trie {
    blob: Blob,
    node_count: u32,
    record_count: u32,
}

impl Trie {
    pub fn from_blob(blob: Blob) -> Result<Trie> {
        let data: &[u8] = &blob;
        if data.len() < HEADER_SIZE {
            return CorruptError {
                detail: "trie artifact shorter than its header",
            }
            .fail();
        }
        let magic = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        let version = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let node_count = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        let record_count = u32::from_le_bytes([data[12], data[13], data[14], data[15]]);
        if magic != TRIE_MAGIC {
            return CorruptError {
                detail: "bad trie magic",
            }
            .fail();
        }
        if version != TRIE_VERSION {
            return CorruptError {
                detail: format!("unsupported trie version {version}"),
            }
            .fail();
        }
        if node_count == 0 {
            return CorruptError {
                detail: "trie has no root node",
            }
            .fail();
        }
        let expected =
            HEADER_SIZE + node_count as usize * NODE_SIZE + record_count as usize * RECORD_SIZE;
        if data.len() != expected {
            return CorruptError {
                detail: format!(
                    "trie artifact size mismatch: expected {expected} bytes, found {}",
                    data.len()
                ),
            }
            .fail();
        }
        Ok(Trie {
            blob,
            node_count,
            record_count,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count as usize
    }

    pub fn record_count(&self) -> usize {
        self.record_count as usize
    }

    fn node(&self, index: u32) -> Node {
        debug_assert!(index < self.node_count);
        let off = HEADER_SIZE + index as usize * NODE_SIZE;
        let b = &self.blob[off..off + NODE_SIZE];
        Node {
            label: b[0],
            rec_count: b[1],
            child_count: u16::from_le_bytes([b[2], b[3]]),
            first_child: u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
            rec_base: u32::from_le_bytes([b[8], b[9], b[10], b[11]]),
        }
    }

    fn record(&self, index: u32) -> Record {
        let off =
            HEADER_SIZE + self.node_count as usize * NODE_SIZE + index as usize * RECORD_SIZE;
        Record::decode(&self.blob[off..off + RECORD_SIZE])
    }

    /// Binary search among a node's children for the given label byte.
    fn find_child(&self, node: Node, label: u8) -> Option<u32> {
        let mut lo = 0u32;
        let mut hi = node.child_count as u32;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let idx = node.first_child + mid;
            let l = self.node(idx).label;
            if l == label {
                return Some(idx);
            } else if l < label {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        None
    }

    /// Walk the key bytes from the root; `None` when the path leaves the
    /// trie.
    fn walk(&self, key: &[u8]) -> Option<u32> {
        let mut idx = 0u32;
        for &byte in key {
            idx = self.find_child(self.node(idx), byte)?;
        }
        Some(idx)
    }

    /// All records for an exact key. A missing key is an empty list, never
    /// an error.
    pub fn lookup(&self, surface: &str) -> Vec<WordEntry> {
        match self.walk(surface.as_bytes()) {
            Some(idx) => self.entries_at(self.node(idx), surface),
            None => Vec::new(),
        }
    }

    pub fn contains_key(&self, surface: &str) -> bool {
        self.walk(surface.as_bytes())
            .map(|idx| self.node(idx).rec_count > 0)
            .unwrap_or(false)
    }

    /// True iff at least one key starts with `prefix`. Every node lies on
    /// the path of some key, so reaching a node is proof enough; this is a
    /// pure walk, no allocation.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix.as_bytes()).is_some()
    }

    /// Enumerate every `(key, records)` pair whose key starts with
    /// `prefix`, in key byte order.
    pub fn prefix_items(&self, prefix: &str) -> PrefixItems<'_> {
        let start = self.walk(prefix.as_bytes());
        let mut stack = Vec::new();
        if let Some(idx) = start {
            stack.push(StackFrame {
                node: idx,
                parent_key_len: prefix.len(),
                push_label: false,
            });
        }
        PrefixItems {
            trie: self,
            key: prefix.as_bytes().to_vec(),
            stack,
        }
    }

    fn entries_at(&self, node: Node, surface: &str) -> Vec<WordEntry> {
        (0..node.rec_count as u32)
            .map(|i| WordEntry::from_record(surface, self.record(node.rec_base + i)))
            .collect()
    }
}

struct StackFrame {
    node: u32,
    parent_key_len: usize,
    push_label: bool,
}

/// Depth-first pre-order walk below a prefix node.
pub struct PrefixItems<'a> {
    trie: &'a Trie,
    key: Vec<u8>,
    stack: Vec<StackFrame>,
}

impl<'a> Iterator for PrefixItems<'a> {
    type Item = (String, Vec<WordEntry>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            let node = self.trie.node(frame.node);
            self.key.truncate(frame.parent_key_len);
            if frame.push_label {
                self.key.push(node.label);
            }
            for i in (0..node.child_count as u32).rev() {
                self.stack.push(StackFrame {
                    node: node.first_child + i,
                    parent_key_len: self.key.len(),
                    push_label: true,
                });
            }
            if node.rec_count > 0 {
                let surface = String::from_utf8_lossy(&self.key).into_owned();
                let entries = self.trie.entries_at(node, &surface);
                return Some((surface, entries));
            }
        }
        None
    }
}
