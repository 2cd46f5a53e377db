//! Ledger-Index: range-sum aggregation over time-stamped ledgers
//!
//! A build-once, query-many aggregation engine for time-stamped numeric
//! ledgers (invoice entries, report rows, anything keyed by a time of day).
//!
//! # Core Concepts
//!
//! - **Time values**: Immutable, validated hour/minute/second triples
//! - **Report entries**: (time, value) pairs supplied by an external parser
//! - **Range-sum index**: A sorted, deduplicated prefix-sum structure that
//!   answers inclusive range-sum queries in O(log n)
//!
//! Transport, file parsing, and client concerns stay outside: callers hand
//! in validated entries and time bounds, and get back a single total.
//!
//! # Example
//!
//! ```
//! use ledger_index::prelude::*;
//!
//! # fn example() -> ledger_index::error::Result<()> {
//! let entries = vec![
//!     ReportEntry::new(TimeValue::new(18, 29, 11)?, 50_000),
//!     ReportEntry::new(TimeValue::new(18, 30, 23)?, 60_000),
//!     ReportEntry::new(TimeValue::new(18, 30, 23)?, 119_214),
//! ];
//!
//! let mut index = RangeSumIndex::new();
//! index.prepare(&entries)?;
//!
//! let total = index.query_range(TimeValue::new(18, 29, 0)?, TimeValue::new(18, 30, 23)?)?;
//! assert_eq!(total, 229_214);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod core;
pub mod error;
pub mod index;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::core::{ReportEntry, TimeField, TimeValue};
    pub use crate::error::{Error, Result};
    pub use crate::index::RangeSumIndex;
}
