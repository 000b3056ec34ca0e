//! Employee record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/update/remove/read APIs over the employee list.
//! - Enforce email uniqueness on every write.
//!
//! # Invariants
//! - List order is insertion order; `update` keeps the record position.
//! - `remove` of an absent key is a no-op, never an error.
//! - Failed writes leave the list untouched.

use crate::model::employee::Employee;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Record store error for mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Another record already uses this email.
    DuplicateEmail(String),
    /// No record exists for the lookup email.
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail(email) => write!(f, "employee email already exists: {email}"),
            Self::NotFound(email) => write!(f, "employee not found: {email}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for employee record operations.
pub trait EmployeeRepository {
    /// Appends one record; rejects an email already present.
    fn add(&mut self, employee: Employee) -> RepoResult<()>;
    /// Replaces every field of the record found by `email`.
    fn update(&mut self, email: &str, employee: Employee) -> RepoResult<()>;
    /// Removes the record with `email`; returns whether one was removed.
    fn remove(&mut self, email: &str) -> bool;
    /// Gets one record by email.
    fn get(&self, email: &str) -> Option<&Employee>;
    /// Returns the full current list in insertion order.
    fn all(&self) -> &[Employee];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Vec-backed employee store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from an externally supplied record list.
    ///
    /// Records are added in order, so a repeated email is rejected the same
    /// way a duplicate add would be.
    pub fn from_records(records: impl IntoIterator<Item = Employee>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.add(record)?;
        }
        Ok(repo)
    }

    fn position(&self, email: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.email == email)
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn add(&mut self, employee: Employee) -> RepoResult<()> {
        if self.position(employee.email.as_str()).is_some() {
            return Err(RepoError::DuplicateEmail(employee.email));
        }
        self.employees.push(employee);
        debug!(
            "event=employee_add module=repo status=ok total={}",
            self.employees.len()
        );
        Ok(())
    }

    fn update(&mut self, email: &str, employee: Employee) -> RepoResult<()> {
        let idx = self
            .position(email)
            .ok_or_else(|| RepoError::NotFound(email.to_string()))?;

        // An edit may rename the key, but never onto another record's email.
        if employee.email != email && self.position(employee.email.as_str()).is_some() {
            return Err(RepoError::DuplicateEmail(employee.email));
        }

        self.employees[idx] = employee;
        debug!("event=employee_update module=repo status=ok index={idx}");
        Ok(())
    }

    fn remove(&mut self, email: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.email != email);
        let removed = self.employees.len() != before;
        debug!(
            "event=employee_remove module=repo status=ok removed={removed} total={}",
            self.employees.len()
        );
        removed
    }

    fn get(&self, email: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.email == email)
    }

    fn all(&self) -> &[Employee] {
        &self.employees
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeRepository, InMemoryEmployeeRepository, RepoError};
    use crate::model::employee::Employee;

    fn ann() -> Employee {
        Employee::new("Ann", "Lee", "a@x.com", "Eng", "Dev")
    }

    #[test]
    fn from_records_rejects_repeated_email() {
        let err = InMemoryEmployeeRepository::from_records(vec![ann(), ann()]).unwrap_err();
        assert_eq!(err, RepoError::DuplicateEmail("a@x.com".to_string()));
    }

    #[test]
    fn update_keeps_position() {
        let mut repo = InMemoryEmployeeRepository::from_records(vec![
            ann(),
            Employee::new("Dan", "Roe", "d@x.com", "Ops", "Lead"),
        ])
        .unwrap();
        repo.update("a@x.com", Employee::new("Anne", "Lee", "anne@x.com", "Eng", "Dev"))
            .unwrap();
        assert_eq!(repo.all()[0].email, "anne@x.com");
        assert_eq!(repo.all()[1].email, "d@x.com");
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let mut repo = InMemoryEmployeeRepository::new();
        repo.add(ann()).unwrap();
        repo.add(Employee::new("Ann", "Lee", "A@x.com", "Eng", "Dev"))
            .unwrap();
        assert_eq!(repo.len(), 2);
        assert!(repo.get("A@X.COM").is_none());
    }
}
