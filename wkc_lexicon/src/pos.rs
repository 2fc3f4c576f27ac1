/// Part-of-speech tags, mapped to the 8-bit IDs used by the lexicon
/// artifact. The ID assignment is part of the artifact contract: the
/// builder and this library must agree, so the discriminants here are
/// frozen. Unknown IDs decode to [`PosTag::Unk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PosTag {
    Unk = 0,
    /// Noun
    N = 1,
    /// Adverbial noun
    NAdv = 2,
    /// Noun used as a prefix
    NPref = 3,
    /// Noun used as a suffix
    NSuf = 4,
    /// Temporal noun
    NT = 5,
    /// Proper noun
    NPr = 6,
    /// Numeric
    Num = 7,
    /// Ichidan verb
    V1 = 8,
    /// Ichidan verb, kureru special class
    V1S = 9,
    V5aru = 10,
    V5b = 11,
    V5g = 12,
    V5k = 13,
    V5kS = 14,
    V5m = 15,
    V5n = 16,
    V5r = 17,
    V5rI = 18,
    V5s = 19,
    V5t = 20,
    V5u = 21,
    V5uS = 22,
    V5uru = 23,
    /// kuru verb
    Vk = 24,
    /// suru-compound noun or participle
    Vs = 25,
    /// suru verb, included
    VsI = 26,
    /// suru verb, special class
    VsS = 27,
    /// zuru verb
    Vz = 28,
    AdjI = 29,
    /// yoi/ii class adjective
    AdjIx = 30,
    AdjNa = 31,
    AdjNo = 32,
    /// Pre-noun adjectival (demonstratives live here)
    AdjPn = 33,
    AdjT = 34,
    /// Noun or verb acting prenominally
    AdjF = 35,
    Adv = 36,
    AdvTo = 37,
    Aux = 38,
    AuxAdj = 39,
    AuxV = 40,
    Conj = 41,
    Cop = 42,
    /// Counter
    Ctr = 43,
    /// Expression (phrase, clause)
    Exp = 44,
    /// Interjection
    Int = 45,
    /// Pronoun
    Pn = 46,
    Pref = 47,
    /// Particle
    Prt = 48,
    Suf = 49,
    /// Unclassified
    Unc = 50,
}

const ALL: &[PosTag] = &[
    PosTag::Unk,
    PosTag::N,
    PosTag::NAdv,
    PosTag::NPref,
    PosTag::NSuf,
    PosTag::NT,
    PosTag::NPr,
    PosTag::Num,
    PosTag::V1,
    PosTag::V1S,
    PosTag::V5aru,
    PosTag::V5b,
    PosTag::V5g,
    PosTag::V5k,
    PosTag::V5kS,
    PosTag::V5m,
    PosTag::V5n,
    PosTag::V5r,
    PosTag::V5rI,
    PosTag::V5s,
    PosTag::V5t,
    PosTag::V5u,
    PosTag::V5uS,
    PosTag::V5uru,
    PosTag::Vk,
    PosTag::Vs,
    PosTag::VsI,
    PosTag::VsS,
    PosTag::Vz,
    PosTag::AdjI,
    PosTag::AdjIx,
    PosTag::AdjNa,
    PosTag::AdjNo,
    PosTag::AdjPn,
    PosTag::AdjT,
    PosTag::AdjF,
    PosTag::Adv,
    PosTag::AdvTo,
    PosTag::Aux,
    PosTag::AuxAdj,
    PosTag::AuxV,
    PosTag::Conj,
    PosTag::Cop,
    PosTag::Ctr,
    PosTag::Exp,
    PosTag::Int,
    PosTag::Pn,
    PosTag::Pref,
    PosTag::Prt,
    PosTag::Suf,
    PosTag::Unc,
];

impl PosTag {
    pub fn from_id(id: u8) -> Option<PosTag> {
        ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            PosTag::Unk => "unk",
            PosTag::N => "n",
            PosTag::NAdv => "n-adv",
            PosTag::NPref => "n-pref",
            PosTag::NSuf => "n-suf",
            PosTag::NT => "n-t",
            PosTag::NPr => "n-pr",
            PosTag::Num => "num",
            PosTag::V1 => "v1",
            PosTag::V1S => "v1-s",
            PosTag::V5aru => "v5aru",
            PosTag::V5b => "v5b",
            PosTag::V5g => "v5g",
            PosTag::V5k => "v5k",
            PosTag::V5kS => "v5k-s",
            PosTag::V5m => "v5m",
            PosTag::V5n => "v5n",
            PosTag::V5r => "v5r",
            PosTag::V5rI => "v5r-i",
            PosTag::V5s => "v5s",
            PosTag::V5t => "v5t",
            PosTag::V5u => "v5u",
            PosTag::V5uS => "v5u-s",
            PosTag::V5uru => "v5uru",
            PosTag::Vk => "vk",
            PosTag::Vs => "vs",
            PosTag::VsI => "vs-i",
            PosTag::VsS => "vs-s",
            PosTag::Vz => "vz",
            PosTag::AdjI => "adj-i",
            PosTag::AdjIx => "adj-ix",
            PosTag::AdjNa => "adj-na",
            PosTag::AdjNo => "adj-no",
            PosTag::AdjPn => "adj-pn",
            PosTag::AdjT => "adj-t",
            PosTag::AdjF => "adj-f",
            PosTag::Adv => "adv",
            PosTag::AdvTo => "adv-to",
            PosTag::Aux => "aux",
            PosTag::AuxAdj => "aux-adj",
            PosTag::AuxV => "aux-v",
            PosTag::Conj => "conj",
            PosTag::Cop => "cop",
            PosTag::Ctr => "ctr",
            PosTag::Exp => "exp",
            PosTag::Int => "int",
            PosTag::Pn => "pn",
            PosTag::Pref => "pref",
            PosTag::Prt => "prt",
            PosTag::Suf => "suf",
            PosTag::Unc => "unc",
        }
    }

    pub fn from_name(name: &str) -> Option<PosTag> {
        ALL.iter().copied().find(|t| t.name() == name)
    }

    pub fn is_particle(self) -> bool {
        self == PosTag::Prt
    }

    pub fn is_noun(self) -> bool {
        matches!(
            self,
            PosTag::N | PosTag::NAdv | PosTag::NPref | PosTag::NSuf | PosTag::NT | PosTag::NPr
        )
    }

    pub fn is_verb(self) -> bool {
        matches!(
            self,
            PosTag::V1
                | PosTag::V1S
                | PosTag::V5aru
                | PosTag::V5b
                | PosTag::V5g
                | PosTag::V5k
                | PosTag::V5kS
                | PosTag::V5m
                | PosTag::V5n
                | PosTag::V5r
                | PosTag::V5rI
                | PosTag::V5s
                | PosTag::V5t
                | PosTag::V5u
                | PosTag::V5uS
                | PosTag::V5uru
                | PosTag::Vk
                | PosTag::Vs
                | PosTag::VsI
                | PosTag::VsS
                | PosTag::Vz
        )
    }

    /// Pronouns and prenominal demonstratives.
    pub fn is_pronoun_like(self) -> bool {
        matches!(self, PosTag::Pn | PosTag::AdjPn)
    }

    pub fn is_adjective(self) -> bool {
        matches!(
            self,
            PosTag::AdjI
                | PosTag::AdjIx
                | PosTag::AdjNa
                | PosTag::AdjNo
                | PosTag::AdjPn
                | PosTag::AdjT
                | PosTag::AdjF
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_frozen() {
        // The artifact contract: these must never drift.
        assert_eq!(PosTag::Unk as u8, 0);
        assert_eq!(PosTag::N as u8, 1);
        assert_eq!(PosTag::V1 as u8, 8);
        assert_eq!(PosTag::Prt as u8, 48);
        assert_eq!(PosTag::Unc as u8, 50);
        for (i, tag) in ALL.iter().enumerate() {
            assert_eq!(*tag as u8 as usize, i);
            assert_eq!(PosTag::from_id(*tag as u8), Some(*tag));
        }
    }

    #[test]
    fn names_roundtrip() {
        for tag in ALL {
            assert_eq!(PosTag::from_name(tag.name()), Some(*tag));
        }
        assert_eq!(PosTag::from_id(200), None);
    }
}
