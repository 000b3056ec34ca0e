//! Directory use-case service.
//!
//! # Responsibility
//! - Own the query state and the optional "currently editing" key.
//! - Route add/edit/delete submissions through validation and the store.
//! - Recompute the visible page after every state-changing call.
//!
//! # Invariants
//! - `current_page` resets to 1 on search, filter and page-size changes,
//!   never on sort change or page navigation.
//! - The stored `current_page` always equals the clamped page of the last
//!   computed view.
//! - A failed operation leaves records, query state and edit key unchanged.

use crate::config::DirectoryConfig;
use crate::form::validator::{validate, ValidationErrors};
use crate::model::employee::{Employee, EmployeeFields, EmployeeKey};
use crate::query::engine::{query, EmployeeFilter, SortKey};
use crate::query::paginate::{paginate, step_page, Page};
use crate::render::{page_label, render_listing};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MSG_DUPLICATE_EMAIL: &str = "An employee with this email already exists.";
const MSG_EDIT_TARGET_MISSING: &str = "The employee being edited no longer exists.";
const MSG_INVALID_PAGE_SIZE: &str = "Page size must be greater than zero.";

/// Service error for directory use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Form input failed one or more checks.
    Validation(ValidationErrors),
    /// Email already used by another record.
    DuplicateEmail(String),
    /// Edit key was captured from a record that is gone.
    EditTargetMissing(String),
    /// `begin_edit` named an email with no record.
    UnknownEmployee(String),
    /// Page size must be positive.
    InvalidPageSize(usize),
}

impl DirectoryError {
    /// Stable reason code for diagnostics; carries no record data.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::DuplicateEmail(_) => "duplicate_email",
            Self::EditTargetMissing(_) => "edit_target_missing",
            Self::UnknownEmployee(_) => "unknown_employee",
            Self::InvalidPageSize(_) => "invalid_page_size",
        }
    }

    /// Inline text shown under the form or control that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.joined(),
            Self::DuplicateEmail(_) => MSG_DUPLICATE_EMAIL.to_string(),
            Self::EditTargetMissing(_) | Self::UnknownEmployee(_) => {
                MSG_EDIT_TARGET_MISSING.to_string()
            }
            Self::InvalidPageSize(_) => MSG_INVALID_PAGE_SIZE.to_string(),
        }
    }
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "invalid employee form: {errors}"),
            Self::DuplicateEmail(email) => write!(f, "employee email already exists: {email}"),
            Self::EditTargetMissing(email) => write!(f, "edit target not found: {email}"),
            Self::UnknownEmployee(email) => write!(f, "employee not found: {email}"),
            Self::InvalidPageSize(size) => write!(f, "invalid page size: {size}"),
        }
    }
}

impl Error for DirectoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for DirectoryError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for DirectoryError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateEmail(email) => Self::DuplicateEmail(email),
            RepoError::NotFound(email) => Self::EditTargetMissing(email),
        }
    }
}

/// Transient query parameters for the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub filter: EmployeeFilter,
    pub sort_by: SortKey,
    /// 1-based page index.
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::from_config(&DirectoryConfig::default())
    }
}

impl QueryState {
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self {
            search: String::new(),
            filter: EmployeeFilter::default(),
            sort_by: config.sort_by,
            current_page: 1,
            page_size: config.page_size.max(1),
        }
    }
}

/// Render-ready snapshot returned after every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub records: Vec<Employee>,
    /// Matching records across all pages.
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
    /// `false` disables the previous-page control.
    pub has_previous: bool,
    /// `false` disables the next-page control.
    pub has_next: bool,
    /// Caption such as `Page 1 of 3`.
    pub page_label: String,
}

impl DirectoryView {
    /// Plain-text card listing with the pagination caption.
    pub fn render(&self) -> String {
        render_listing(&self.records, self.current_page, self.total_pages)
    }
}

impl From<Page> for DirectoryView {
    fn from(page: Page) -> Self {
        Self {
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            page_label: page_label(page.current_page, page.total_pages),
            total: page.total,
            total_pages: page.total_pages,
            current_page: page.current_page,
            records: page.records,
        }
    }
}

/// Directory session facade over a record store.
pub struct DirectoryService<R: EmployeeRepository> {
    repo: R,
    state: QueryState,
    editing: Option<EmployeeKey>,
}

impl<R: EmployeeRepository> DirectoryService<R> {
    /// Creates a session with default query state.
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, &DirectoryConfig::default())
    }

    /// Creates a session whose initial query state follows `config`.
    pub fn with_config(repo: R, config: &DirectoryConfig) -> Self {
        Self {
            repo,
            state: QueryState::from_config(config),
            editing: None,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Full record list in insertion order.
    pub fn records(&self) -> &[Employee] {
        self.repo.all()
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Key of the record currently open in the edit form, if any.
    pub fn editing_key(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Recomputes the visible page and stores the clamped page index.
    pub fn refresh(&mut self) -> DirectoryView {
        let page = self.current_page_slice();
        self.state.current_page = page.current_page;
        page.into()
    }

    /// Opens the form in add mode.
    pub fn begin_add(&mut self) {
        self.editing = None;
    }

    /// Opens the form in edit mode and returns the prefilled fields.
    pub fn begin_edit(&mut self, email: &str) -> Result<EmployeeFields, DirectoryError> {
        let fields = self
            .repo
            .get(email)
            .map(EmployeeFields::from)
            .ok_or_else(|| DirectoryError::UnknownEmployee(email.to_string()))?;
        self.editing = Some(email.to_string());
        Ok(fields)
    }

    /// Closes the form without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Submits the form in its current mode and closes it on success.
    pub fn submit(&mut self, fields: &EmployeeFields) -> Result<DirectoryView, DirectoryError> {
        let view = match self.editing.clone() {
            Some(original_email) => self.edit_record(&original_email, fields)?,
            None => self.add_record(fields)?,
        };
        self.editing = None;
        Ok(view)
    }

    /// Validates and appends one record.
    ///
    /// # Errors
    /// - `Validation` when form checks fail.
    /// - `DuplicateEmail` when the email is already present.
    pub fn add_record(&mut self, fields: &EmployeeFields) -> Result<DirectoryView, DirectoryError> {
        let employee = validate(fields).inspect_err(|errors| {
            warn!(
                "event=employee_add module=directory status=rejected reason=validation errors={}",
                errors.messages().len()
            );
        })?;

        if let Err(err) = self.repo.add(employee) {
            warn!("event=employee_add module=directory status=rejected reason=duplicate_email");
            return Err(err.into());
        }

        info!(
            "event=employee_add module=directory status=ok total={}",
            self.repo.len()
        );
        Ok(self.refresh())
    }

    /// Validates and replaces the record identified by `original_email`.
    ///
    /// # Errors
    /// - `Validation` when form checks fail.
    /// - `DuplicateEmail` when the new email belongs to a different record.
    /// - `EditTargetMissing` when `original_email` has no record.
    pub fn edit_record(
        &mut self,
        original_email: &str,
        fields: &EmployeeFields,
    ) -> Result<DirectoryView, DirectoryError> {
        let employee = validate(fields).inspect_err(|errors| {
            warn!(
                "event=employee_edit module=directory status=rejected reason=validation errors={}",
                errors.messages().len()
            );
        })?;

        match self.repo.update(original_email, employee) {
            Ok(()) => {}
            Err(RepoError::NotFound(email)) => {
                error!("event=employee_edit module=directory status=error reason=target_missing");
                return Err(DirectoryError::EditTargetMissing(email));
            }
            Err(err) => {
                warn!(
                    "event=employee_edit module=directory status=rejected reason=duplicate_email"
                );
                return Err(err.into());
            }
        }

        info!("event=employee_edit module=directory status=ok");
        Ok(self.refresh())
    }

    /// Removes the record with `email`; absent records are ignored.
    pub fn delete_record(&mut self, email: &str) -> DirectoryView {
        let removed = self.repo.remove(email);
        if removed && self.editing.as_deref() == Some(email) {
            self.editing = None;
        }
        info!(
            "event=employee_delete module=directory status=ok removed={removed} total={}",
            self.repo.len()
        );
        self.refresh()
    }

    /// Sets free-text search and returns to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) -> DirectoryView {
        self.state.search = text.into();
        self.state.current_page = 1;
        self.refresh()
    }

    /// Applies filter criteria and returns to page 1.
    ///
    /// The first-name criterion is trimmed; department and role are choices.
    pub fn set_filter(&mut self, filter: EmployeeFilter) -> DirectoryView {
        self.state.filter = EmployeeFilter {
            first_name: filter.first_name.trim().to_string(),
            ..filter
        };
        self.state.current_page = 1;
        self.refresh()
    }

    /// Changes the sort key; the page index is kept.
    pub fn set_sort(&mut self, sort_by: SortKey) -> DirectoryView {
        self.state.sort_by = sort_by;
        self.refresh()
    }

    /// Changes page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<DirectoryView, DirectoryError> {
        if page_size == 0 {
            return Err(DirectoryError::InvalidPageSize(page_size));
        }
        self.state.page_size = page_size;
        self.state.current_page = 1;
        Ok(self.refresh())
    }

    /// Moves `delta` pages, checked against the current query result.
    ///
    /// Steps that would leave `[1, total_pages]` are no-ops.
    pub fn go_to_page(&mut self, delta: i64) -> DirectoryView {
        let page = self.current_page_slice();
        self.state.current_page = step_page(page.current_page, delta, page.total_pages);
        self.refresh()
    }

    pub fn next_page(&mut self) -> DirectoryView {
        self.go_to_page(1)
    }

    pub fn previous_page(&mut self) -> DirectoryView {
        self.go_to_page(-1)
    }

    fn current_page_slice(&self) -> Page {
        let ordered = query(
            self.repo.all(),
            self.state.search.as_str(),
            &self.state.filter,
            self.state.sort_by,
        );
        paginate(&ordered, self.state.current_page, self.state.page_size)
    }
}
