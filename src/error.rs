//! Error types for ledger-index

use crate::core::time::{TimeField, TimeValue};
use thiserror::Error;

/// Result type alias for ledger-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ledger-index
///
/// Every variant is a caller-input error: the operation is rejected
/// synchronously with state unchanged, and the caller must correct its
/// input before retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A time component was outside its valid range
    #[error("invalid {field} value {value} ({field} must be between 0 and {max})")]
    InvalidTimeComponent {
        /// The first field that failed validation
        field: TimeField,
        /// The raw value supplied for that field
        value: i64,
        /// Upper bound of the valid range for that field
        max: u32,
    },

    /// A textual time did not match the `hh:mm:ss` form
    #[error("malformed time {input:?} (expected format is \"hh:mm:ss\")")]
    MalformedTime {
        /// The rejected input
        input: String,
    },

    /// A batch with zero entries was submitted for preparation
    #[error("ledger batch must have at least one entry")]
    EmptyBatch,

    /// A range query was issued before any successful preparation
    #[error("index has not been prepared")]
    NotPrepared,

    /// A range query with start after end
    #[error("start time {start} must be less than or equal to end time {end}")]
    InvalidRange {
        /// Requested range start
        start: TimeValue,
        /// Requested range end
        end: TimeValue,
    },
}
