//! Search/filter/sort over the employee list.
//!
//! # Responsibility
//! - Apply free-text search and the filter criteria.
//! - Order results by the selected sort key.
//!
//! # Invariants
//! - Output length never exceeds input length.
//! - Sorting is stable; records with equal keys keep their input order.
//! - An unrecognized sort key leaves input order unchanged.

use crate::model::employee::Employee;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field used to order the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "department")]
    Department,
    #[serde(rename = "role")]
    Role,
    /// Any unknown selector value; keeps insertion order.
    #[serde(other)]
    Unsorted,
}

impl SortKey {
    /// Parses the selector value used by the sort control.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "firstName" => Self::FirstName,
            "department" => Self::Department,
            "role" => Self::Role,
            _ => Self::Unsorted,
        }
    }

    /// Stable selector value for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Department => "department",
            Self::Role => "role",
            Self::Unsorted => "",
        }
    }

    fn field(self, employee: &Employee) -> Option<&str> {
        match self {
            Self::FirstName => Some(employee.first_name.as_str()),
            Self::Department => Some(employee.department.as_str()),
            Self::Role => Some(employee.role.as_str()),
            Self::Unsorted => None,
        }
    }
}

/// Filter sidebar criteria. Empty values disable that criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeFilter {
    /// Case-insensitive substring of first name.
    pub first_name: String,
    /// Exact department match.
    pub department: String,
    /// Exact role match.
    pub role: String,
}

impl EmployeeFilter {
    /// Returns whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.department.is_empty() && self.role.is_empty()
    }

    /// Returns whether `employee` satisfies every active criterion.
    pub fn matches(&self, employee: &Employee) -> bool {
        (self.first_name.is_empty()
            || contains_ignore_case(&employee.first_name, &self.first_name))
            && (self.department.is_empty() || employee.department == self.department)
            && (self.role.is_empty() || employee.role == self.role)
    }
}

/// Returns whether `employee` matches the free-text search.
///
/// Empty search matches everything; otherwise first name, last name or email
/// must contain the text, ignoring case.
pub fn matches_search(employee: &Employee, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.email.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle.as_str()))
}

/// Runs the full search + filter + sort pipeline.
///
/// Returns a fresh ordered sequence; `records` is left untouched.
pub fn query(
    records: &[Employee],
    search: &str,
    filter: &EmployeeFilter,
    sort_by: SortKey,
) -> Vec<Employee> {
    let mut list = records
        .iter()
        .filter(|employee| matches_search(employee, search) && filter.matches(employee))
        .cloned()
        .collect::<Vec<_>>();

    // `sort_by` on slices is stable.
    list.sort_by(|a, b| match (sort_by.field(a), sort_by.field(b)) {
        (Some(left), Some(right)) => locale_compare(left, right),
        _ => Ordering::Equal,
    });
    list
}

/// Locale-style string ordering.
///
/// Primary order ignores case; among strings equal under that rule,
/// lowercase sorts before uppercase at the first differing character.
/// Identical strings compare equal so stable sorting keeps their order.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    let primary = left
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (l, r) in left.chars().zip(right.chars()) {
        if l != r {
            return match (l.is_lowercase(), r.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => l.cmp(&r),
            };
        }
    }
    left.chars().count().cmp(&right.chars().count())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::{locale_compare, matches_search, query, EmployeeFilter, SortKey};
    use crate::model::employee::Employee;
    use std::cmp::Ordering;

    fn sample() -> Vec<Employee> {
        vec![
            Employee::new("dan", "Roe", "d@x.com", "Ops", "Lead"),
            Employee::new("Ann", "Lee", "a@x.com", "Eng", "Dev"),
            Employee::new("Bea", "Kim", "b@x.com", "Eng", "Lead"),
        ]
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Eng", "Eng"), Ordering::Equal);
    }

    #[test]
    fn sort_key_parse_falls_back_to_unsorted() {
        assert_eq!(SortKey::parse("role"), SortKey::Role);
        assert_eq!(SortKey::parse("salary"), SortKey::Unsorted);
        let parsed: SortKey = serde_json::from_str("\"salary\"").unwrap();
        assert_eq!(parsed, SortKey::Unsorted);
    }

    #[test]
    fn unsorted_keeps_input_order() {
        let result = query(&sample(), "", &EmployeeFilter::default(), SortKey::Unsorted);
        assert_eq!(result, sample());
    }

    #[test]
    fn first_name_sort_is_case_insensitive() {
        let result = query(&sample(), "", &EmployeeFilter::default(), SortKey::FirstName);
        let names = result.iter().map(|e| e.first_name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Ann", "Bea", "dan"]);
    }

    #[test]
    fn search_matches_email() {
        let employee = Employee::new("Ann", "Lee", "ann.lee@corp.io", "Eng", "Dev");
        assert!(matches_search(&employee, "CORP"));
        assert!(!matches_search(&employee, "Eng"));
    }

    #[test]
    fn filter_department_is_exact() {
        let filter = EmployeeFilter {
            department: "eng".to_string(),
            ..EmployeeFilter::default()
        };
        assert!(query(&sample(), "", &filter, SortKey::FirstName).is_empty());
    }
}
