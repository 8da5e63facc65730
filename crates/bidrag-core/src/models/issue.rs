//! Validation issue model.

use std::fmt;

/// A single validation finding, pointing into the aggregate form value.
///
/// The path starts with the owning step's token (e.g.
/// `["partene", "bidragspliktig", "ident"]`); the message is already
/// localized for the schema's locale. Issues are transient and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Sequence of keys from the aggregate root to the offending field
    pub path: Vec<String>,

    /// Localized, user-facing message
    pub message: String,
}

impl ValidationIssue {
    /// Creates an issue at the given path.
    pub fn new(path: &[&str], message: impl Into<String>) -> Self {
        Self {
            path: path.iter().map(|s| (*s).to_string()).collect(),
            message: message.into(),
        }
    }

    /// The leading path segment, expected to be a step token.
    pub fn leading_token(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.join("."), self.message)
    }
}
