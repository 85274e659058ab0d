//! # Range Queries
//!
//! [`RangeQuery`] decompresses a record's arrays on demand, sorts them by
//! wavenumber and binary-searches the requested window. The sort is redone on
//! every call (O(n log n)); arrays hold a few thousand points, so no sorted
//! index is kept.

mod config;
mod range;


pub use config::QueryConfig;
pub use range::RangeQuery;
