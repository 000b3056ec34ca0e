//! Employee form validation and normalization.
//!
//! # Invariants
//! - First name, last name and email are trimmed before checks and storage.
//! - Department and role are taken as-is (closed choice lists).
//! - Every violated check contributes exactly one message; the email format
//!   check only runs when the email is non-empty.

use crate::model::employee::{Employee, EmployeeFields};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

pub const MSG_FIRST_NAME_REQUIRED: &str = "First Name is required.";
pub const MSG_LAST_NAME_REQUIRED: &str = "Last Name is required.";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required.";
pub const MSG_EMAIL_INVALID: &str = "Invalid email format.";
pub const MSG_DEPARTMENT_REQUIRED: &str = "Department is required.";
pub const MSG_ROLE_REQUIRED: &str = "Role is required.";

/// Ordered list of form validation messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Messages joined with a single space, as shown under the form.
    pub fn joined(&self) -> String {
        self.messages.join(" ")
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined())
    }
}

impl Error for ValidationErrors {}

/// Returns whether `email` has the `<x>@<y>.<z>` shape without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates raw form input and returns the normalized record.
///
/// # Errors
/// Returns all violated checks, in field order.
pub fn validate(fields: &EmployeeFields) -> Result<Employee, ValidationErrors> {
    let first_name = fields.first_name.trim();
    let last_name = fields.last_name.trim();
    let email = fields.email.trim();
    let department = fields.department.as_str();
    let role = fields.role.as_str();

    let mut messages = Vec::new();
    if first_name.is_empty() {
        messages.push(MSG_FIRST_NAME_REQUIRED.to_string());
    }
    if last_name.is_empty() {
        messages.push(MSG_LAST_NAME_REQUIRED.to_string());
    }
    if email.is_empty() {
        messages.push(MSG_EMAIL_REQUIRED.to_string());
    } else if !is_valid_email(email) {
        messages.push(MSG_EMAIL_INVALID.to_string());
    }
    if department.is_empty() {
        messages.push(MSG_DEPARTMENT_REQUIRED.to_string());
    }
    if role.is_empty() {
        messages.push(MSG_ROLE_REQUIRED.to_string());
    }

    if !messages.is_empty() {
        return Err(ValidationErrors { messages });
    }

    Ok(Employee::new(first_name, last_name, email, department, role))
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, validate};
    use crate::model::employee::EmployeeFields;

    fn fields(first: &str, last: &str, email: &str, dept: &str, role: &str) -> EmployeeFields {
        EmployeeFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department: dept.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn reports_missing_first_name_and_bad_email() {
        let err = validate(&fields("", "Lee", "bad", "Eng", "Dev")).unwrap_err();
        assert_eq!(
            err.messages(),
            &["First Name is required.", "Invalid email format."]
        );
        assert_eq!(
            err.joined(),
            "First Name is required. Invalid email format."
        );
    }

    #[test]
    fn empty_email_skips_format_check() {
        let err = validate(&fields("Ann", "Lee", "   ", "Eng", "Dev")).unwrap_err();
        assert_eq!(err.messages(), &["Email is required."]);
    }

    #[test]
    fn all_empty_reports_every_field_in_order() {
        let err = validate(&EmployeeFields::default()).unwrap_err();
        assert_eq!(
            err.messages(),
            &[
                "First Name is required.",
                "Last Name is required.",
                "Email is required.",
                "Department is required.",
                "Role is required.",
            ]
        );
    }

    #[test]
    fn trims_text_fields_but_not_choices() {
        let employee = validate(&fields("  Ann ", " Lee", " a@x.com ", "Eng", "Dev")).unwrap();
        assert_eq!(employee.first_name, "Ann");
        assert_eq!(employee.last_name, "Lee");
        assert_eq!(employee.email, "a@x.com");
    }

    #[test]
    fn email_pattern_rejects_whitespace_and_missing_dot() {
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email("a@xcom"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("@x.com"));
    }
}
