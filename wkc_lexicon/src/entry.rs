use crate::pos::PosTag;

/// Size of one packed lexicon record on disk.
pub const RECORD_SIZE: usize = 12;

/// One packed lexicon record: the per-key payload of the trie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub seq: u32,
    pub cost: i16,
    pub pos_id: u8,
    pub conj_type: u8,
    pub base_seq: u32,
}

impl Record {
    pub fn decode(bytes: &[u8]) -> Record {
        Record {
            seq: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            cost: i16::from_le_bytes([bytes[4], bytes[5]]),
            pos_id: bytes[6],
            conj_type: bytes[7],
            base_seq: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        }
    }

    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..4].copy_from_slice(&self.seq.to_le_bytes());
        out[4..6].copy_from_slice(&self.cost.to_le_bytes());
        out[6] = self.pos_id;
        out[7] = self.conj_type;
        out[8..12].copy_from_slice(&self.base_seq.to_le_bytes());
        out
    }
}

/// A lexicon entry as returned by lookup: a record plus the surface it was
/// found under. The same surface may carry many entries (different POS,
/// different conjugation layers).
#[derive(Clone, Debug, PartialEq)]
pub struct WordEntry {
    pub surface: String,
    pub seq: u32,
    pub cost: i16,
    pub pos_id: u8,
    pub conj_type: u8,
    pub base_seq: u32,
}

impl WordEntry {
    pub fn from_record(surface: &str, rec: Record) -> WordEntry {
        WordEntry {
            surface: surface.to_owned(),
            seq: rec.seq,
            cost: rec.cost,
            pos_id: rec.pos_id,
            conj_type: rec.conj_type,
            base_seq: rec.base_seq,
        }
    }

    /// Decoded POS tag. Out-of-range IDs are a recoverable inconsistency
    /// and collapse to `Unk`.
    pub fn pos(&self) -> PosTag {
        match PosTag::from_id(self.pos_id) {
            Some(tag) => tag,
            None => {
                tracing::warn!(pos_id = self.pos_id, seq = self.seq, "pos id out of range");
                PosTag::Unk
            }
        }
    }

    /// True for dictionary forms.
    pub fn is_root(&self) -> bool {
        self.conj_type == 0 || self.base_seq == self.seq
    }

    /// Sequence of the dictionary form this entry resolves to.
    pub fn base_form_id(&self) -> u32 {
        if self.base_seq != 0 {
            self.base_seq
        } else {
            self.seq
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn record_codec_roundtrip() {
        let rec = Record {
            seq: 1203940,
            cost: -7,
            pos_id: 13,
            conj_type: 2,
            base_seq: 1203945,
        };
        assert_eq!(Record::decode(&rec.encode()), rec);
    }

    #[test]
    fn base_form_resolution() {
        let root = WordEntry {
            surface: "食べる".into(),
            seq: 8,
            cost: 12,
            pos_id: PosTag::V1 as u8,
            conj_type: 0,
            base_seq: 8,
        };
        assert!(root.is_root());
        assert_eq!(root.base_form_id(), 8);

        let conj = WordEntry {
            surface: "食べました".into(),
            seq: 900,
            cost: 12,
            pos_id: PosTag::V1 as u8,
            conj_type: 2,
            base_seq: 8,
        };
        assert!(!conj.is_root());
        assert_eq!(conj.base_form_id(), 8);
    }
}
