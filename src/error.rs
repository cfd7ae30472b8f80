//! Error types for sample-table construction and quadrature evaluation.

use thiserror::Error;

/// Result type for quadrature operations.
pub type QuadratureResult<T> = Result<T, QuadratureError>;

/// Errors that can occur building a table or evaluating a rule.
///
/// Every fallible operation raises at the point of detection and the error
/// bubbles to the outermost caller untouched; the library never retries or
/// recovers partially.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadratureError {
    /// The declared sample count disagrees with a supplied sequence length.
    #[error(
        "size mismatch: expected {expected} samples, got {arguments} arguments and {values} values"
    )]
    SizeMismatch {
        expected: usize,
        arguments: usize,
        values: usize,
    },

    /// Indexed read past the end of the value sequence.
    #[error("index {index} out of range for a table of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    /// The sample count violates a rule's structural requirement
    /// (Simpson parity, Newton grouping).
    #[error("{method}: {requirement} (got {n} points)")]
    InvalidPointCount {
        method: &'static str,
        n: usize,
        requirement: &'static str,
    },

    /// Too few samples for any interval-based rule to be meaningful.
    #[error("{method}: need at least {required} samples (got {n})")]
    InsufficientSamples {
        method: &'static str,
        n: usize,
        required: usize,
    },
}
