//! Record store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented mutation/read contracts for employee records.
//! - Own the authoritative record list; no other layer mutates it.
//!
//! # Invariants
//! - At most one record per `email` at any time.
//! - Store APIs return semantic errors (`DuplicateEmail`, `NotFound`) and
//!   leave state unchanged when they fail.

pub mod employee_repo;
