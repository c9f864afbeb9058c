//! Domain layer for the prompt gallery.
//!
//! This crate has no I/O: it defines the record types, the fixed
//! category/tag catalog, the analytics event types, and the pure
//! query/aggregation functions used by the store and API layers.

pub mod catalog;
pub mod error;
pub mod prompt;
pub mod query;
pub mod stats;
pub mod types;
