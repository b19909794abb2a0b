//! Validated bindings to the Clustal Omega multiple sequence aligner.
//!
//! Sequences are checked against the alphabet of their [`SequenceType`](alphabet::SequenceType) before they are handed to libclustalo.
//! Linking against libclustalo requires the `native` feature.

pub mod aligner;
pub mod alignment;
pub mod alphabet;
pub mod config;
pub mod error;
pub mod native;
pub mod validation;

pub use aligner::{Aligner, AlignmentEngine, align};
pub use alignment::{Alignment, SequenceRecord};
pub use alphabet::SequenceType;
pub use config::AlignmentOptions;
pub use error::{Error, ExecutionError, Result, ValidationError};
