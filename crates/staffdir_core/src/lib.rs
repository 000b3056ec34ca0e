//! Core domain logic for the staff directory.
//! This crate is the single source of truth for record and listing invariants.

pub mod bootstrap;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod query;
pub mod render;
pub mod repo;
pub mod service;

pub use bootstrap::{bootstrap_store, load_json, parse_rendered_cards, BootstrapError};
pub use config::{ConfigError, DirectoryConfig};
pub use form::validator::{validate, ValidationErrors};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::employee::{Employee, EmployeeFields, EmployeeKey};
pub use query::engine::{query, EmployeeFilter, SortKey};
pub use query::paginate::{paginate, Page};
pub use repo::employee_repo::{
    EmployeeRepository, InMemoryEmployeeRepository, RepoError, RepoResult,
};
pub use service::directory_service::{
    DirectoryError, DirectoryService, DirectoryView, QueryState,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
