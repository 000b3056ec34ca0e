//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one directory session handle and its use-case calls to Dart via FRB.
//! - Flatten core results into simple response envelopes for the view layer.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every session call returns the refreshed page, even when the
//!   operation itself was rejected.
//!
//! # See also
//! - staffdir_core::service::directory_service

use log::warn;
use staffdir_core::{
    bootstrap_store, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, DirectoryConfig, DirectoryError, DirectoryService, DirectoryView,
    Employee, EmployeeFields, EmployeeFilter, InMemoryEmployeeRepository, SortKey,
};
use std::sync::{Mutex, MutexGuard};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Employee card item for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeItem {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

/// One rendered page of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPageResponse {
    /// Cards on the current page (empty renders the placeholder).
    pub items: Vec<EmployeeItem>,
    /// Matching records across all pages.
    pub total: u32,
    pub total_pages: u32,
    pub current_page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    /// Caption such as `Page 1 of 3`.
    pub page_label: String,
}

/// Generic action envelope for session calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryActionResponse {
    /// Whether the operation was applied.
    pub ok: bool,
    /// Inline form/control message; empty on success.
    pub message: String,
    /// Page to render after the call.
    pub page: DirectoryPageResponse,
}

/// Prefilled edit form payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFormResponse {
    pub ok: bool,
    pub message: String,
    pub fields: Option<EmployeeItem>,
}

/// One directory session: record store, query state and edit key.
#[flutter_rust_bridge::frb(opaque)]
pub struct DirectorySession {
    inner: Mutex<DirectoryService<InMemoryEmployeeRepository>>,
}

impl DirectorySession {
    /// Opens a session.
    ///
    /// Input semantics:
    /// - `config_json`: optional directory config document; `None` uses defaults.
    /// - `employees_json`: optional injected record list.
    /// - `rendered_listing`: card text used when no (or an empty) list is injected.
    ///
    /// # FFI contract
    /// - Never panics; returns a readable error for bad config or seed data.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open(
        config_json: Option<String>,
        employees_json: Option<String>,
        rendered_listing: String,
    ) -> Result<DirectorySession, String> {
        let config = match config_json.as_deref() {
            Some(raw) => DirectoryConfig::from_json(raw).map_err(|err| err.to_string())?,
            None => DirectoryConfig::default(),
        };
        let repo = bootstrap_store(employees_json.as_deref(), rendered_listing.as_str())
            .map_err(|err| err.to_string())?;
        Ok(Self {
            inner: Mutex::new(DirectoryService::with_config(repo, &config)),
        })
    }

    /// Current page without changing any state.
    #[flutter_rust_bridge::frb(sync)]
    pub fn view(&self) -> DirectoryPageResponse {
        to_page_response(self.lock().refresh())
    }

    /// Opens the form in add mode.
    #[flutter_rust_bridge::frb(sync)]
    pub fn begin_add(&self) {
        self.lock().begin_add();
    }

    /// Opens the form in edit mode for `email`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn begin_edit(&self, email: String) -> EditFormResponse {
        match self.lock().begin_edit(email.as_str()) {
            Ok(fields) => EditFormResponse {
                ok: true,
                message: String::new(),
                fields: Some(fields_to_item(fields)),
            },
            Err(err) => EditFormResponse {
                ok: false,
                message: err.user_message(),
                fields: None,
            },
        }
    }

    /// Closes the form without saving.
    #[flutter_rust_bridge::frb(sync)]
    pub fn cancel_edit(&self) {
        self.lock().cancel_edit();
    }

    /// Submits the form in its current add/edit mode.
    #[flutter_rust_bridge::frb(sync)]
    pub fn submit(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        department: String,
        role: String,
    ) -> DirectoryActionResponse {
        let fields = EmployeeFields {
            first_name,
            last_name,
            email,
            department,
            role,
        };
        let mut service = self.lock();
        let result = service.submit(&fields);
        respond(&mut service, result)
    }

    /// Deletes one record; deleting an absent record still succeeds.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete(&self, email: String) -> DirectoryActionResponse {
        let view = self.lock().delete_record(email.as_str());
        success(view)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_search(&self, text: String) -> DirectoryPageResponse {
        to_page_response(self.lock().set_search(text))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn apply_filters(
        &self,
        first_name: String,
        department: String,
        role: String,
    ) -> DirectoryPageResponse {
        to_page_response(self.lock().set_filter(EmployeeFilter {
            first_name,
            department,
            role,
        }))
    }

    /// Unknown selector values keep insertion order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_sort(&self, sort_by: String) -> DirectoryPageResponse {
        to_page_response(self.lock().set_sort(SortKey::parse(sort_by.as_str())))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_page_size(&self, page_size: u32) -> DirectoryActionResponse {
        let mut service = self.lock();
        let result = service.set_page_size(page_size as usize);
        respond(&mut service, result)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn previous_page(&self) -> DirectoryPageResponse {
        to_page_response(self.lock().previous_page())
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn next_page(&self) -> DirectoryPageResponse {
        to_page_response(self.lock().next_page())
    }

    fn lock(&self) -> MutexGuard<'_, DirectoryService<InMemoryEmployeeRepository>> {
        // A poisoned lock still holds consistent state: every service call
        // validates before mutating.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn respond(
    service: &mut DirectoryService<InMemoryEmployeeRepository>,
    result: Result<DirectoryView, DirectoryError>,
) -> DirectoryActionResponse {
    match result {
        Ok(view) => success(view),
        Err(err) => {
            warn!(
                "event=ffi_action module=ffi status=rejected reason={}",
                err.code()
            );
            DirectoryActionResponse {
                ok: false,
                message: err.user_message(),
                page: to_page_response(service.refresh()),
            }
        }
    }
}

fn success(view: DirectoryView) -> DirectoryActionResponse {
    DirectoryActionResponse {
        ok: true,
        message: String::new(),
        page: to_page_response(view),
    }
}

fn to_page_response(view: DirectoryView) -> DirectoryPageResponse {
    DirectoryPageResponse {
        items: view.records.into_iter().map(to_item).collect(),
        total: saturating_u32(view.total),
        total_pages: saturating_u32(view.total_pages),
        current_page: saturating_u32(view.current_page),
        has_previous: view.has_previous,
        has_next: view.has_next,
        page_label: view.page_label,
    }
}

fn to_item(employee: Employee) -> EmployeeItem {
    EmployeeItem {
        first_name: employee.first_name,
        last_name: employee.last_name,
        email: employee.email,
        department: employee.department,
        role: employee.role,
    }
}

fn fields_to_item(fields: EmployeeFields) -> EmployeeItem {
    EmployeeItem {
        first_name: fields.first_name,
        last_name: fields.last_name,
        email: fields.email,
        department: fields.department,
        role: fields.role,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
