use std::collections::HashSet;

use log::trace;

use crate::{alignment::SequenceRecord, alphabet::SequenceType, error::ValidationError};

/// Records that passed [`validate`], in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSequences {
    records: Vec<SequenceRecord>,
    sequence_type: SequenceType,
}

impl ValidatedSequences {
    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn sequence_type(&self) -> SequenceType {
        self.sequence_type
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<SequenceRecord> {
        self.records
    }
}

/// Check names and residues of `records` against `sequence_type`.
///
/// Names must be unique and free of NUL bytes, sequences non-empty and restricted to the alphabet of the sequence type.
pub fn validate(
    records: Vec<SequenceRecord>,
    sequence_type: SequenceType,
) -> Result<ValidatedSequences, ValidationError> {
    let alphabet = sequence_type.alphabet();
    let mut names = HashSet::with_capacity(records.len());

    for record in &records {
        trace!("Validating sequence '{}' as {sequence_type}", record.name);

        if record.name.contains('\0') {
            return Err(ValidationError::NameContainsNul(record.name.clone()));
        }
        if !names.insert(record.name.as_str()) {
            return Err(ValidationError::DuplicateName(record.name.clone()));
        }
        if record.sequence.is_empty() {
            return Err(ValidationError::EmptySequence(record.name.clone()));
        }
        if let Some((position, character)) = alphabet.find_invalid(&record.sequence) {
            return Err(ValidationError::InvalidCharacter {
                name: record.name.clone(),
                character,
                position,
                sequence_type,
            });
        }
    }

    Ok(ValidatedSequences {
        records,
        sequence_type,
    })
}
