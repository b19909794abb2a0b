//! Sequence types and the character tables they admit.
//!
//! Membership is case-insensitive: lowercase residues are accepted and passed on unchanged.

use std::fmt::{self, Display};

use crate::error::ValidationError;

#[cfg(test)]
mod tests;

/// The kind of residues in the input, as understood by libclustalo.
///
/// The discriminants are the `SEQTYPE_*` codes of the native library.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SequenceType {
    /// Let libclustalo detect the type.
    Unknown = 0,
    #[default]
    Dna = 1,
    Rna = 2,
    Protein = 3,
}

impl SequenceType {
    pub const ALL: [Self; 4] = [Self::Unknown, Self::Dna, Self::Rna, Self::Protein];

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Self::Unknown => &UNKNOWN,
            Self::Dna => &DNA,
            Self::Rna => &RNA,
            Self::Protein => &PROTEIN,
        }
    }
}

impl TryFrom<i32> for SequenceType {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|sequence_type| sequence_type.code() == code)
            .ok_or(ValidationError::UnknownSequenceType(code))
    }
}

impl Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Dna => write!(f, "DNA"),
            Self::Rna => write!(f, "RNA"),
            Self::Protein => write!(f, "PROTEIN"),
        }
    }
}

/// An enumerated set of admissible ASCII characters.
pub struct Alphabet {
    characters: &'static [u8],
    members: [bool; 256],
}

impl Alphabet {
    const fn new(characters: &'static [u8]) -> Self {
        let mut members = [false; 256];
        let mut index = 0;
        while index < characters.len() {
            let character = characters[index];
            members[character.to_ascii_uppercase() as usize] = true;
            members[character.to_ascii_lowercase() as usize] = true;
            index += 1;
        }

        Self {
            characters,
            members,
        }
    }

    /// The uppercase characters of this alphabet.
    pub fn characters(&self) -> &'static [u8] {
        self.characters
    }

    pub fn contains(&self, character: char) -> bool {
        u8::try_from(character).is_ok_and(|byte| self.members[usize::from(byte)])
    }

    /// Returns the first character not in the alphabet, with its position in characters.
    pub fn find_invalid(&self, sequence: &str) -> Option<(usize, char)> {
        sequence
            .chars()
            .enumerate()
            .find(|(_, character)| !self.contains(*character))
    }
}

pub static DNA: Alphabet = Alphabet::new(b"ACGTN");

pub static RNA: Alphabet = Alphabet::new(b"ACGUN");

/// The 20 standard amino acids and the ambiguity code `X`.
pub static PROTEIN: Alphabet = Alphabet::new(b"ACDEFGHIKLMNPQRSTVWYX");

/// Anything libclustalo could detect as one of the other types.
pub static UNKNOWN: Alphabet = Alphabet::new(b"ACDEFGHIKLMNPQRSTVWYXU");
