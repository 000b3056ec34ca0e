//! Directory query pipeline: search, filter, sort and paginate.
//!
//! # Responsibility
//! - Derive the displayed record sequence from store contents plus query
//!   state, recomputed from scratch on every call.
//! - Slice that sequence into pages and keep the page index in range.
//!
//! # Invariants
//! - Query functions are pure; they never mutate the input records.
//! - The view and page navigation share one query path.

pub mod engine;
pub mod paginate;
