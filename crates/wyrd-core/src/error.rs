//! Error types for the randomness contracts.

use thiserror::Error;

/// Top-level error type for argument and restore failures.
///
/// The contracts are total wherever they can be; these are the only ways a
/// caller can get them wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RngError {
    /// A bit count outside `1..=32` was requested.
    #[error("invalid bit count {0}: expected a value in 1..=32")]
    InvalidBitCount(u32),

    /// A sampler was configured with an unusable parameter.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A snapshot was restored into a generator of a different kind.
    #[error("snapshot kind mismatch: expected {expected}, found {found}")]
    SnapshotKindMismatch {
        /// The kind of the generator being restored.
        expected: String,
        /// The kind recorded in the snapshot.
        found: String,
    },
}
