use std::ffi::c_int;

use crate::error::ValidationError;

/// Tunables forwarded to libclustalo.
///
/// Options left at `None` keep the library default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AlignmentOptions {
    /// Number of OpenMP threads libclustalo may use.
    #[cfg_attr(feature = "serde", serde(alias = "num_threads"))]
    pub threads: u32,
    /// Use mBed-like clustering to build the guide tree.
    pub mbed_guide_tree: Option<bool>,
    /// Use mBed-like clustering during iteration.
    pub mbed_iteration: Option<bool>,
    /// Number of combined guide-tree/HMM iterations.
    pub num_combined_iterations: Option<u32>,
    pub max_guidetree_iterations: Option<u32>,
    pub max_hmm_iterations: Option<u32>,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            mbed_guide_tree: None,
            mbed_iteration: None,
            num_combined_iterations: None,
            max_guidetree_iterations: None,
            max_hmm_iterations: None,
        }
    }
}

impl AlignmentOptions {
    pub fn verify(&self) -> Result<(), ValidationError> {
        if self.threads == 0 {
            return Err(ValidationError::InvalidOption {
                option: "threads",
                reason: "at least one thread is required".to_string(),
            });
        }

        for (option, value) in [
            ("threads", Some(self.threads)),
            ("num_combined_iterations", self.num_combined_iterations),
            ("max_guidetree_iterations", self.max_guidetree_iterations),
            ("max_hmm_iterations", self.max_hmm_iterations),
        ] {
            if let Some(value) = value {
                if c_int::try_from(value).is_err() {
                    return Err(ValidationError::InvalidOption {
                        option,
                        reason: format!("{value} exceeds the maximum of {}", c_int::MAX),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ValidationError;

    use super::AlignmentOptions;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(AlignmentOptions::default().verify(), Ok(()));
        assert_eq!(AlignmentOptions::default().threads, 1);
    }

    #[test]
    fn test_zero_threads() {
        let options = AlignmentOptions {
            threads: 0,
            ..Default::default()
        };
        assert!(matches!(
            options.verify(),
            Err(ValidationError::InvalidOption {
                option: "threads",
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range() {
        let options = AlignmentOptions {
            max_hmm_iterations: Some(u32::MAX),
            ..Default::default()
        };
        assert!(matches!(
            options.verify(),
            Err(ValidationError::InvalidOption {
                option: "max_hmm_iterations",
                ..
            })
        ));

        let options = AlignmentOptions {
            max_guidetree_iterations: Some(i32::MAX as u32),
            ..Default::default()
        };
        assert_eq!(options.verify(), Ok(()));
    }
}
