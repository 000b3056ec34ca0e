//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record held by the directory store.
//! - Define the raw, untrimmed form input submitted by add/edit flows.
//!
//! # Invariants
//! - `email` is the record identity; matching is case-sensitive and exact.
//! - Stored records have all five fields non-empty (enforced by the form
//!   validator before any store mutation).

use serde::{Deserialize, Serialize};

/// Identity key for one employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeKey = String;

/// Canonical employee record.
///
/// Serialized with camelCase field names to match the listing data shape
/// injected by the hosting page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    /// Unique identifier of this record.
    pub email: String,
    /// One value from the department choice list.
    pub department: String,
    /// One value from the role choice list.
    pub role: String,
}

impl Employee {
    /// Creates one employee record from already-normalized values.
    ///
    /// This constructor does not validate; use `form::validate` for user input.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department: department.into(),
            role: role.into(),
        }
    }

    /// Returns the identity key of this record.
    pub fn key(&self) -> &str {
        self.email.as_str()
    }

    /// Display name as rendered in the listing heading.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw form field values for add/edit submissions.
///
/// Values are kept exactly as typed; trimming happens during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl From<&Employee> for EmployeeFields {
    /// Prefills an edit form from an existing record.
    fn from(value: &Employee) -> Self {
        Self {
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            email: value.email.clone(),
            department: value.department.clone(),
            role: value.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeFields};

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let employee = Employee::new("Ann", "Lee", "a@x.com", "Eng", "Dev");
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["lastName"], "Lee");
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn fields_prefill_from_record() {
        let employee = Employee::new("Ann", "Lee", "a@x.com", "Eng", "Dev");
        let fields = EmployeeFields::from(&employee);
        assert_eq!(fields.first_name, "Ann");
        assert_eq!(fields.role, "Dev");
        assert_eq!(employee.full_name(), "Ann Lee");
    }
}
