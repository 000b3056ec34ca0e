//! Flutter-facing bridge for the staff directory core.

pub mod api;
