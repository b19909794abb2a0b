use thiserror::Error;

use crate::alphabet::SequenceType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Alignment failed: {0}")]
    Execution(#[from] ExecutionError),
}

/// Rejected input. Raised before the native library is called.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expected a mapping from sequence names to sequences, but got {0}.")]
    NotAMapping(String),

    #[error("Sequence names must be strings, but got the key {0}.")]
    NonStringKey(String),

    #[error("Sequences must be strings, but the value for '{name}' is {value}.")]
    NonStringValue { name: String, value: String },

    #[error(
        "Bad seqtype {0}, must be one of SEQTYPE_DNA, SEQTYPE_RNA, SEQTYPE_PROTEIN, or SEQTYPE_UNKNOWN."
    )]
    UnknownSequenceType(i32),

    #[error(
        "Sequence '{name}' contains the character {character:?} at position {position}, which is not part of the {sequence_type} alphabet."
    )]
    InvalidCharacter {
        name: String,
        character: char,
        position: usize,
        sequence_type: SequenceType,
    },

    #[error("Sequence '{0}' is empty.")]
    EmptySequence(String),

    #[error("The sequence name '{0}' was encountered twice.")]
    DuplicateName(String),

    #[error("The sequence name {0:?} contains a NUL byte.")]
    NameContainsNul(String),

    #[error("The alignment option '{option}' is invalid: {reason}.")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
}

/// Failure of the alignment call itself. Never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("lib_clustalo was built without the `native` feature, so libclustalo is unavailable.")]
    NativeUnavailable,

    #[error("libclustalo failed to align the sequences (return code {0}).")]
    NativeAlignmentFailed(i32),

    #[error("libclustalo rejected the sequence type code {0}.")]
    NativeRejectedSequenceType(i32),

    #[error("libclustalo ran out of memory while returning the alignment.")]
    OutOfMemory,

    #[error("Too many sequences for a single native call: {0}.")]
    TooManySequences(usize),

    #[error("Submitted {expected} sequences, but the aligner returned {actual}.")]
    SequenceCountMismatch { expected: usize, actual: usize },

    #[error(
        "Aligned sequence '{name}' has width {actual}, but the alignment width is {expected}."
    )]
    UnequalWidth {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Aligned sequence number {0} is not valid UTF-8.")]
    NonUtf8Output(usize),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
