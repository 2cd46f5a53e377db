//! Prefix-sum index for inclusive range-sum queries
//!
//! A batch of possibly-duplicated, unordered (time, value) entries is
//! compressed once into two parallel arrays: strictly increasing distinct
//! time ordinals and their running value totals. Any inclusive range sum
//! is then the difference of two prefix sums located by binary search.

use crate::core::entry::ReportEntry;
use crate::core::time::TimeValue;
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Ordinal sitting before any valid time of day ("before all data")
///
/// Stored at index 0 of the time array so that every less-than-or-equal
/// search has an answer, even for ranges that start before the first entry.
const SENTINEL_ORDINAL: i64 = -1;

/// Greatest index in `times[..=upper]` whose value is `<= target`.
///
/// `times` must be strictly increasing with `times[0] <= target` (the
/// sentinel guarantees this for all valid query ordinals). The bracket
/// `[left, right]` is narrowed by midpoint tests until its width is 1,
/// then the final candidate is disambiguated by an exact-equality check.
fn search_last_le(times: &[i64], target: i64, upper: usize) -> usize {
    // Nothing stored beyond `upper` can match; answer directly.
    if target > times[upper] {
        return upper;
    }

    let mut left = 0;
    let mut right = upper;

    while left + 1 < right {
        let pivot = left + (right - left) / 2;
        if times[pivot] < target {
            left = pivot;
        } else {
            right = pivot;
        }
    }

    if times[right] == target {
        right
    } else {
        left
    }
}

/// Range-sum index over a prepared batch of ledger entries
///
/// Build-once, query-many: [`prepare`](Self::prepare) compresses a batch
/// into the prefix-sum representation, after which any number of
/// [`query_range`](Self::query_range) calls resolve in O(log n). A later
/// `prepare` fully replaces the dataset; it never merges.
pub struct RangeSumIndex {
    /// Distinct entry ordinals, strictly increasing, sentinel at index 0
    times: Vec<i64>,
    /// `prefix_sums[i]` = sum of all values with ordinal <= `times[i]`
    prefix_sums: Vec<i64>,
    /// False until the first successful `prepare`
    prepared: bool,
}

impl RangeSumIndex {
    /// Create an empty, unprepared index
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            prefix_sums: Vec::new(),
            prepared: false,
        }
    }

    /// Whether a batch has been successfully prepared
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Number of distinct timestamps currently indexed
    pub fn len(&self) -> usize {
        // The sentinel slot is not a data point.
        self.times.len().saturating_sub(1)
    }

    /// Whether the index holds no data points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compress a batch of entries into the prefix-sum representation
    ///
    /// Entries are sorted by time; entries sharing a timestamp are merged
    /// by summing their values into a single slot. The new arrays are
    /// built completely before being committed, so a failed call leaves
    /// any previously prepared dataset intact and queryable.
    pub fn prepare(&mut self, entries: &[ReportEntry]) -> Result<()> {
        if entries.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let mut ordered: Vec<(i64, i64)> = entries
            .iter()
            .map(|entry| (i64::from(entry.time.to_ordinal()), entry.value))
            .collect();
        ordered.sort_unstable_by_key(|&(ordinal, _)| ordinal);

        let mut times = Vec::with_capacity(ordered.len() + 1);
        let mut prefix_sums = Vec::with_capacity(ordered.len() + 1);
        times.push(SENTINEL_ORDINAL);
        prefix_sums.push(0);

        let mut last_ordinal = SENTINEL_ORDINAL;
        let mut running = 0i64;

        for (ordinal, value) in ordered {
            running += value;
            if ordinal == last_ordinal {
                // Duplicate timestamp: fold into the slot just emitted.
                if let Some(slot) = prefix_sums.last_mut() {
                    *slot = running;
                }
            } else {
                times.push(ordinal);
                prefix_sums.push(running);
                last_ordinal = ordinal;
            }
        }

        debug!(
            entries = entries.len(),
            distinct = times.len() - 1,
            "prepared range-sum index"
        );

        self.times = times;
        self.prefix_sums = prefix_sums;
        self.prepared = true;
        Ok(())
    }

    /// Sum of all entry values with time in `[start, end]`, both inclusive
    ///
    /// The degenerate query `start == end` returns the merged value stored
    /// at that timestamp, or 0 when no entry sits exactly there.
    pub fn query_range(&self, start: TimeValue, end: TimeValue) -> Result<i64> {
        if !self.prepared {
            return Err(Error::NotPrepared);
        }

        if start > end {
            return Err(Error::InvalidRange { start, end });
        }

        let start_ordinal = i64::from(start.to_ordinal());
        let end_ordinal = i64::from(end.to_ordinal());

        let end_index = search_last_le(&self.times, end_ordinal, self.times.len() - 1);

        // The start index can never exceed the end index; bound the second
        // search accordingly.
        let mut start_index = search_last_le(&self.times, start_ordinal, end_index);

        // An exact hit means prefix_sums[start_index] already includes the
        // entry at `start`, which the caller wants inside the result; the
        // exclusive lower boundary must sit one slot earlier.
        if self.times[start_index] == start_ordinal {
            start_index -= 1;
        }

        let total = self.prefix_sums[end_index] - self.prefix_sums[start_index];
        trace!(%start, %end, total, "resolved range-sum query");
        Ok(total)
    }
}

impl Default for RangeSumIndex {
    fn default() -> Self {
        Self::new()
    }
}
