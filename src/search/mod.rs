//! Substring search over contact records.
//!
//! Names are compared case-insensitively; phone numbers are compared as raw
//! digit strings.

pub mod query;

pub use query::SearchQuery;
