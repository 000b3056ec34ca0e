//! Add/edit form handling.
//!
//! # Responsibility
//! - Turn raw form input into a normalized employee record.
//! - Produce user-facing validation messages in a fixed order.

pub mod validator;
