//! Substring indexing
//!
//! Each corpus region gets one immutable in-memory suffix index built at
//! load time. Lookup returns every occurrence of a query as one contiguous
//! suffix-array range, so downstream code never re-scans the text.

pub mod suffix;

pub use suffix::{SuffixIndex, TextOffset};
