//! Conjugation classes. The lexicon stores the class of each derived
//! surface as an 8-bit id; 0 marks a dictionary form. The id assignment
//! is part of the artifact contract.

pub const DICTIONARY_FORM: u8 = 0;
pub const NON_PAST: u8 = 1;
pub const PAST: u8 = 2;
pub const CONJUNCTIVE: u8 = 3;
pub const PROVISIONAL: u8 = 4;
pub const POTENTIAL: u8 = 5;
pub const PASSIVE: u8 = 6;
pub const CAUSATIVE: u8 = 7;
pub const CAUSATIVE_PASSIVE: u8 = 8;
pub const VOLITIONAL: u8 = 9;
pub const IMPERATIVE: u8 = 10;
pub const CONDITIONAL: u8 = 11;
pub const ALTERNATIVE: u8 = 12;
pub const CONTINUATIVE: u8 = 13;

const NAMES: &[(u8, &str)] = &[
    (DICTIONARY_FORM, "dictionary form"),
    (NON_PAST, "non-past"),
    (PAST, "past (~ta)"),
    (CONJUNCTIVE, "conjunctive (~te)"),
    (PROVISIONAL, "provisional (~eba)"),
    (POTENTIAL, "potential"),
    (PASSIVE, "passive"),
    (CAUSATIVE, "causative"),
    (CAUSATIVE_PASSIVE, "causative-passive"),
    (VOLITIONAL, "volitional"),
    (IMPERATIVE, "imperative"),
    (CONDITIONAL, "conditional (~tara)"),
    (ALTERNATIVE, "alternative (~tari)"),
    (CONTINUATIVE, "continuative (~i)"),
];

pub fn name(conj_type: u8) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(id, _)| *id == conj_type)
        .map(|(_, name)| *name)
}

/// Both the ~eba provisional and the ~tara conditional count as
/// conditional for scoring.
pub fn is_conditional(conj_type: u8) -> bool {
    conj_type == PROVISIONAL || conj_type == CONDITIONAL
}
