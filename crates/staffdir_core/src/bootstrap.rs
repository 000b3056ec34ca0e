//! Initial record ingestion.
//!
//! # Responsibility
//! - Seed the store from a host-supplied JSON record list.
//! - Fall back to parsing a pre-rendered card listing when no list (or an
//!   empty list) is supplied.
//!
//! # Invariants
//! - Seeded stores satisfy the same email uniqueness rule as `add`.
//! - Parsing never panics on malformed input; it returns an error naming the
//!   offending card.

use crate::model::employee::Employee;
use crate::render::EMPTY_LISTING;
use crate::repo::employee_repo::{EmployeeRepository, InMemoryEmployeeRepository, RepoError};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PAGE_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Page \d+ of \d+$").expect("valid page label regex"));

/// Errors raised while seeding a store.
#[derive(Debug)]
pub enum BootstrapError {
    /// Injected JSON is not a list of employee records.
    Json(serde_json::Error),
    /// A rendered card is missing a line or label.
    MalformedCard { index: usize, reason: String },
    /// Seed data repeats an email.
    Repo(RepoError),
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid employee list: {err}"),
            Self::MalformedCard { index, reason } => {
                write!(f, "malformed employee card #{index}: {reason}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::MalformedCard { .. } => None,
        }
    }
}

impl From<serde_json::Error> for BootstrapError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<RepoError> for BootstrapError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Parses a JSON array of employee records.
pub fn load_json(raw: &str) -> Result<Vec<Employee>, BootstrapError> {
    Ok(serde_json::from_str(raw)?)
}

/// Parses a rendered card listing back into records.
///
/// Cards are separated by blank lines. The first line holds the full name
/// (first word is the first name, the rest the last name), followed by
/// `Email:`, `Department:` and `Role:` lines.
pub fn parse_rendered_cards(text: &str) -> Result<Vec<Employee>, BootstrapError> {
    let mut employees = Vec::new();
    for (index, block) in split_blocks(text).into_iter().enumerate() {
        if block.len() == 1 && (block[0] == EMPTY_LISTING || PAGE_LABEL_RE.is_match(block[0])) {
            continue;
        }
        employees.push(parse_card(index, &block)?);
    }
    Ok(employees)
}

/// Builds the initial store.
///
/// `injected` wins when it is present and non-empty; otherwise the rendered
/// listing is parsed.
pub fn bootstrap_store(
    injected: Option<&str>,
    rendered: &str,
) -> Result<InMemoryEmployeeRepository, BootstrapError> {
    let injected = match injected {
        Some(raw) if !raw.trim().is_empty() => load_json(raw)?,
        _ => Vec::new(),
    };

    let (source, records) = if injected.is_empty() {
        ("rendered", parse_rendered_cards(rendered)?)
    } else {
        ("injected", injected)
    };

    let repo = InMemoryEmployeeRepository::from_records(records)?;
    info!(
        "event=directory_bootstrap module=bootstrap status=ok source={source} count={}",
        repo.len()
    );
    Ok(repo)
}

fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_card(index: usize, lines: &[&str]) -> Result<Employee, BootstrapError> {
    let malformed = |reason: &str| BootstrapError::MalformedCard {
        index,
        reason: reason.to_string(),
    };

    let [heading, email, department, role] = lines else {
        return Err(malformed("expected heading, Email, Department and Role lines"));
    };

    let (first_name, last_name) = match heading.split_once(char::is_whitespace) {
        Some((first, last)) => (first, last.trim()),
        None => (*heading, ""),
    };

    Ok(Employee::new(
        first_name,
        last_name,
        labeled(email, "Email:").ok_or_else(|| malformed("missing `Email:` line"))?,
        labeled(department, "Department:")
            .ok_or_else(|| malformed("missing `Department:` line"))?,
        labeled(role, "Role:").ok_or_else(|| malformed("missing `Role:` line"))?,
    ))
}

fn labeled<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::{bootstrap_store, parse_rendered_cards, BootstrapError};
    use crate::model::employee::Employee;
    use crate::render::render_cards;
    use crate::repo::employee_repo::EmployeeRepository;

    #[test]
    fn rendered_cards_parse_back() {
        let records = vec![
            Employee::new("Ann", "Lee", "a@x.com", "Eng", "Dev"),
            Employee::new("Mary", "Ann Roe", "m@x.com", "Ops", "Lead"),
        ];
        let parsed = parse_rendered_cards(&render_cards(&records)).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn placeholder_listing_yields_no_records() {
        assert!(parse_rendered_cards("No employees found.\n\nPage 1 of 1")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn page_caption_is_skipped_but_page_named_heading_is_not() {
        let listing = "Ann Lee\nEmail: a@x.com\nDepartment: Eng\nRole: Dev\n\nPage 2 of 3";
        assert_eq!(parse_rendered_cards(listing).unwrap().len(), 1);

        let err = parse_rendered_cards("Page Turner").unwrap_err();
        assert!(matches!(err, BootstrapError::MalformedCard { index: 0, .. }));
    }

    #[test]
    fn empty_injected_list_with_no_listing_yields_empty_store() {
        let repo = bootstrap_store(Some("[]"), "").unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn card_missing_role_is_malformed() {
        let err = parse_rendered_cards("Ann Lee\nEmail: a@x.com\nDepartment: Eng\nTeam: Dev")
            .unwrap_err();
        assert!(matches!(err, BootstrapError::MalformedCard { index: 0, .. }));
    }

    #[test]
    fn empty_injected_list_falls_back_to_rendered() {
        let repo =
            bootstrap_store(Some("[]"), "Ann Lee\nEmail: a@x.com\nDepartment: Eng\nRole: Dev")
                .unwrap();
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn injected_list_wins_over_rendered() {
        let injected = r#"[{"firstName":"Dan","lastName":"Roe","email":"d@x.com","department":"Ops","role":"Lead"}]"#;
        let repo = bootstrap_store(
            Some(injected),
            "Ann Lee\nEmail: a@x.com\nDepartment: Eng\nRole: Dev",
        )
        .unwrap();
        assert_eq!(repo.all()[0].email, "d@x.com");
        assert_eq!(repo.len(), 1);
    }
}
