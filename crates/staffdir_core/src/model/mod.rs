//! Employee directory domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and raw form input shape.
//! - Keep one flat five-field schema shared by store, query and form layers.
//!
//! # Invariants
//! - Every employee is identified by its `email` value.
//! - Records carry no surrogate key.

pub mod employee;
