//! Directory view configuration.
//!
//! # Responsibility
//! - Hold the initial query defaults and the form's choice lists.
//! - Load overrides from a JSON document supplied by the host.
//!
//! # Invariants
//! - `page_size` is always positive after `validate()`.
//! - Every entry of `page_size_options` is positive.

use crate::query::engine::SortKey;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Configuration loading/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Document is not valid JSON for this shape.
    Parse(serde_json::Error),
    /// A value is present but out of range.
    InvalidValue { key: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid directory config: {err}"),
            Self::InvalidValue { key, reason } => {
                write!(f, "invalid directory config value for `{key}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Startup configuration for one directory session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryConfig {
    /// Initial page size.
    pub page_size: usize,
    /// Choices offered by the page-size control.
    pub page_size_options: Vec<usize>,
    /// Initial sort key.
    pub sort_by: SortKey,
    /// Department choices presented by the form and filter.
    pub departments: Vec<String>,
    /// Role choices presented by the form and filter.
    pub roles: Vec<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            sort_by: SortKey::FirstName,
            departments: Vec::new(),
            roles: Vec::new(),
        }
    }
}

impl DirectoryConfig {
    /// Parses and validates a JSON config document.
    ///
    /// Missing keys fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pageSize",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::InvalidValue {
                key: "pageSizeOptions",
                reason: "entries must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DirectoryConfig};
    use crate::query::engine::SortKey;

    #[test]
    fn empty_document_uses_defaults() {
        let config = DirectoryConfig::from_json("{}").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn overrides_are_applied() {
        let config = DirectoryConfig::from_json(
            r#"{"pageSize": 20, "sortBy": "role", "departments": ["Eng", "Ops"]}"#,
        )
        .unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.sort_by, SortKey::Role);
        assert_eq!(config.departments, vec!["Eng", "Ops"]);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = DirectoryConfig::from_json(r#"{"pageSize": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "pageSize", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DirectoryConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
