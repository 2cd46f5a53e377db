//! Ledger entries: time-stamped amounts

use crate::core::time::TimeValue;
use serde::{Deserialize, Serialize};

/// A single time-stamped ledger amount
///
/// Entries are input-only: the index does not retain them individually
/// after preparation. Amounts are signed; negative values participate in
/// sums like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Time of day the amount was recorded at
    pub time: TimeValue,
    /// The amount itself
    pub value: i64,
}

impl ReportEntry {
    /// Create a new entry
    pub fn new(time: TimeValue, value: i64) -> Self {
        Self { time, value }
    }
}
