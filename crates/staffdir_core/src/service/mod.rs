//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, store and query calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from store details.

pub mod directory_service;
