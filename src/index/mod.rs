//! Indexing for range-sum queries

pub mod range_sum;

pub use range_sum::*;
