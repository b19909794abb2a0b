//! The libclustalo engine.
//!
//! All memory crossing the C boundary is owned within this module.

use crate::{
    aligner::AlignmentEngine, config::AlignmentOptions, error::ExecutionError,
    validation::ValidatedSequences,
};

/// Aligns with the native Clustal Omega library.
///
/// Without the `native` feature, every call fails with [`ExecutionError::NativeUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClustalOmega;

impl AlignmentEngine for ClustalOmega {
    #[cfg(feature = "native")]
    fn align(
        &self,
        sequences: &ValidatedSequences,
        options: &AlignmentOptions,
    ) -> Result<Vec<String>, ExecutionError> {
        ffi::align(sequences, options)
    }

    #[cfg(not(feature = "native"))]
    fn align(
        &self,
        _sequences: &ValidatedSequences,
        _options: &AlignmentOptions,
    ) -> Result<Vec<String>, ExecutionError> {
        Err(ExecutionError::NativeUnavailable)
    }
}

#[cfg(feature = "native")]
mod ffi {
    use std::{
        ffi::{CStr, CString, c_char, c_int},
        ptr,
        sync::{Mutex, PoisonError},
    };

    use log::{debug, trace};

    use crate::{
        config::AlignmentOptions, error::ExecutionError, validation::ValidatedSequences,
    };

    const SHIM_OK: c_int = 0;
    const SHIM_BAD_SEQTYPE: c_int = 2;
    const SHIM_OUT_OF_MEMORY: c_int = 3;

    /// libclustalo keeps its logger and thread count in globals.
    static NATIVE_LOCK: Mutex<()> = Mutex::new(());

    #[repr(C)]
    struct ShimOptions {
        threads: c_int,
        use_mbed: c_int,
        use_mbed_for_iteration: c_int,
        num_combined_iterations: c_int,
        max_guidetree_iterations: c_int,
        max_hmm_iterations: c_int,
    }

    unsafe extern "C" {
        fn clustalo_shim_align(
            names: *const *const c_char,
            residues: *const *const c_char,
            count: c_int,
            seqtype: c_int,
            options: *const ShimOptions,
            aligned: *mut *mut *mut c_char,
            aligned_count: *mut c_int,
        ) -> c_int;

        fn clustalo_shim_free(aligned: *mut *mut c_char, count: c_int);
    }

    impl From<&AlignmentOptions> for ShimOptions {
        fn from(options: &AlignmentOptions) -> Self {
            // Options are verified to fit into a c_int; -1 selects the library default.
            let int = |value: Option<u32>| value.map_or(-1, |value| value as c_int);
            let flag = |value: Option<bool>| value.map_or(-1, c_int::from);

            Self {
                threads: options.threads as c_int,
                use_mbed: flag(options.mbed_guide_tree),
                use_mbed_for_iteration: flag(options.mbed_iteration),
                num_combined_iterations: int(options.num_combined_iterations),
                max_guidetree_iterations: int(options.max_guidetree_iterations),
                max_hmm_iterations: int(options.max_hmm_iterations),
            }
        }
    }

    /// Rows allocated by the shim, released on drop.
    struct NativeRows {
        rows: *mut *mut c_char,
        count: c_int,
    }

    impl NativeRows {
        fn to_strings(&self) -> Result<Vec<String>, ExecutionError> {
            (0..usize::try_from(self.count).unwrap_or(0))
                .map(|index| {
                    // SAFETY: the shim returned `count` valid NUL-terminated rows.
                    let row = unsafe { CStr::from_ptr(*self.rows.add(index)) };
                    row.to_str()
                        .map(str::to_owned)
                        .map_err(|_| ExecutionError::NonUtf8Output(index))
                })
                .collect()
        }
    }

    impl Drop for NativeRows {
        fn drop(&mut self) {
            // SAFETY: `rows` and `count` come unchanged from `clustalo_shim_align`.
            unsafe { clustalo_shim_free(self.rows, self.count) };
        }
    }

    pub fn align(
        sequences: &ValidatedSequences,
        options: &AlignmentOptions,
    ) -> Result<Vec<String>, ExecutionError> {
        let count = c_int::try_from(sequences.len())
            .map_err(|_| ExecutionError::TooManySequences(sequences.len()))?;

        // Validation rejects NUL bytes in names, and alphabets contain no NUL.
        let (names, residues): (Vec<CString>, Vec<CString>) = sequences
            .records()
            .iter()
            .map(|record| {
                (
                    CString::new(record.name.as_bytes()).unwrap_or_default(),
                    CString::new(record.sequence.as_bytes()).unwrap_or_default(),
                )
            })
            .unzip();
        let name_pointers: Vec<*const c_char> = names.iter().map(|name| name.as_ptr()).collect();
        let residue_pointers: Vec<*const c_char> =
            residues.iter().map(|residue| residue.as_ptr()).collect();
        let shim_options = ShimOptions::from(options);

        let mut rows = ptr::null_mut();
        let mut row_count: c_int = 0;
        let code = {
            let _guard = NATIVE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            trace!("Calling libclustalo with {count} sequences");
            // SAFETY: all pointers are valid for the duration of the call, and the shim copies the strings.
            unsafe {
                clustalo_shim_align(
                    name_pointers.as_ptr(),
                    residue_pointers.as_ptr(),
                    count,
                    sequences.sequence_type().code(),
                    &shim_options,
                    &mut rows,
                    &mut row_count,
                )
            }
        };
        debug!("libclustalo returned {code}");

        match code {
            SHIM_OK => NativeRows {
                rows,
                count: row_count,
            }
            .to_strings(),
            SHIM_BAD_SEQTYPE => Err(ExecutionError::NativeRejectedSequenceType(
                sequences.sequence_type().code(),
            )),
            SHIM_OUT_OF_MEMORY => Err(ExecutionError::OutOfMemory),
            code => Err(ExecutionError::NativeAlignmentFailed(code)),
        }
    }
}
