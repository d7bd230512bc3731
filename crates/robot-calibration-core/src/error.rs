use thiserror::Error;

use crate::LinkConvention;

/// Failures raised by kinematic chain operations.
///
/// All variants describe caller-input problems; retrying with the same input
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KinematicsError {
    #[error("link convention `{0}` is not supported for array construction")]
    LinkConvention(LinkConvention),
    #[error("links must all share the same convention")]
    LinkSequence,
    #[error("{name} must be a 1D sequence with len {expected}, got {got}")]
    SequenceLength {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("array of length {len} cannot be reshaped into rows of {row_len}")]
    Shape { len: usize, row_len: usize },
    #[error("optimization vector exhausted after {supplied} values; mask selects more")]
    OptimizationVectorExhausted { supplied: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            KinematicsError::LinkConvention(LinkConvention::Dh).to_string(),
            "link convention `dh` is not supported for array construction"
        );
        assert_eq!(
            KinematicsError::SequenceLength {
                name: "position",
                expected: 6,
                got: 5
            }
            .to_string(),
            "position must be a 1D sequence with len 6, got 5"
        );
        assert_eq!(
            KinematicsError::Shape { len: 7, row_len: 4 }.to_string(),
            "array of length 7 cannot be reshaped into rows of 4"
        );
    }

    #[test]
    fn errors_are_comparable() {
        let err = KinematicsError::LinkSequence;
        let copy = err.clone();
        assert_eq!(err, copy);
        assert_ne!(
            err,
            KinematicsError::OptimizationVectorExhausted { supplied: 0 }
        );
    }
}
