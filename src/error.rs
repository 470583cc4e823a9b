//! Input-contract errors.
//!
//! The optimizer is a pure, total computation over valid inputs: every
//! error here marks a caller-side contract violation, reported
//! immediately and never retried.

use thiserror::Error;

/// Errors raised when inputs violate the optimizer's contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    /// A group-size or group-count target outside `[1, class_size]`.
    #[error("group target {target} outside [1, {class_size}]")]
    TargetOutOfRange {
        /// The requested size or count.
        target: usize,
        /// Number of students in the roster.
        class_size: usize,
    },

    /// A group-size plan that does not add up to the roster size.
    ///
    /// The original system silently truncated or dropped trailing
    /// students on mismatch; this crate refuses the plan instead.
    #[error("group sizes sum to {sum}, roster has {expected} students")]
    SizeSumMismatch {
        /// Sum of the supplied plan entries.
        sum: usize,
        /// Number of indices to be partitioned.
        expected: usize,
    },

    /// A cost matrix whose rows do not form a square table.
    #[error("cost matrix row {row} has {len} entries, expected {n}")]
    MalformedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Entries found in that row.
        len: usize,
        /// Expected row length (the number of rows).
        n: usize,
    },

    /// An empty candidate set passed to the selector.
    #[error("no candidate partitions to choose from")]
    NoCandidates,
}
