use log::debug;

use crate::{
    alignment::{Alignment, SequenceRecord},
    alphabet::SequenceType,
    config::AlignmentOptions,
    error::{ExecutionError, Result},
    native::ClustalOmega,
    validation::{ValidatedSequences, validate},
};

/// A multiple sequence aligner behind a single blocking call.
pub trait AlignmentEngine {
    /// Align `sequences`, returning one row per input sequence in input order.
    fn align(
        &self,
        sequences: &ValidatedSequences,
        options: &AlignmentOptions,
    ) -> std::result::Result<Vec<String>, ExecutionError>;
}

/// Validates input, runs an [`AlignmentEngine`] and checks its output.
#[derive(Debug, Clone, Default)]
pub struct Aligner<Engine = ClustalOmega> {
    engine: Engine,
    options: AlignmentOptions,
}

impl Aligner {
    /// An aligner backed by libclustalo.
    pub fn clustalo() -> Self {
        Self::default()
    }
}

impl<Engine: AlignmentEngine> Aligner<Engine> {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            options: AlignmentOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AlignmentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Align the given named sequences.
    ///
    /// The result contains the same names in the same order, each mapped to a row of the alignment.
    pub fn align<Record: Into<SequenceRecord>>(
        &self,
        sequences: impl IntoIterator<Item = Record>,
        sequence_type: SequenceType,
    ) -> Result<Alignment> {
        let sequences = validate(
            sequences.into_iter().map(Into::into).collect(),
            sequence_type,
        )?;
        self.align_validated(sequences)
    }

    /// Align records that already passed [`validate`].
    ///
    /// The options of this aligner are verified before anything else happens.
    pub fn align_validated(&self, sequences: ValidatedSequences) -> Result<Alignment> {
        self.options.verify()?;

        if sequences.len() < 2 {
            debug!(
                "Skipping the aligner for {} sequence(s)",
                sequences.len()
            );
            return Ok(Alignment::new_unchecked(sequences.into_records()));
        }

        debug!(
            "Aligning {} sequences of type {}",
            sequences.len(),
            sequences.sequence_type()
        );
        let rows = self.engine.align(&sequences, &self.options)?;

        if rows.len() != sequences.len() {
            return Err(ExecutionError::SequenceCountMismatch {
                expected: sequences.len(),
                actual: rows.len(),
            }
            .into());
        }

        let width = rows[0].chars().count();
        let records = sequences
            .into_records()
            .into_iter()
            .zip(rows)
            .map(|(record, row)| {
                let row_width = row.chars().count();
                if row_width == width {
                    Ok(SequenceRecord::new(record.name, row))
                } else {
                    Err(ExecutionError::UnequalWidth {
                        name: record.name,
                        expected: width,
                        actual: row_width,
                    })
                }
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Alignment has width {width}");

        Ok(Alignment::new_unchecked(records))
    }
}

/// Align `sequences` with libclustalo using default options.
pub fn align<Record: Into<SequenceRecord>>(
    sequences: impl IntoIterator<Item = Record>,
    sequence_type: SequenceType,
) -> Result<Alignment> {
    Aligner::clustalo().align(sequences, sequence_type)
}
