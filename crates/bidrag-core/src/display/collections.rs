//! Collection wrapper types for display formatting.

use std::fmt;

use crate::i18n::Locale;
use crate::models::{Step, ValidationIssue};

/// Wrapper for displaying a list of validation issues as a markdown list.
pub struct Issues<'a>(pub &'a [ValidationIssue]);

impl<'a> fmt::Display for Issues<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No validation issues.");
        }
        for issue in self.0 {
            writeln!(f, "- `{}`: {}", issue.path.join("."), issue.message)?;
        }
        Ok(())
    }
}

/// Wrapper for displaying incomplete steps with localized titles.
pub struct IncompleteSteps<'a> {
    steps: &'a [&'static Step],
    locale: Locale,
}

impl<'a> IncompleteSteps<'a> {
    /// Creates a wrapper rendering titles in the given locale.
    pub fn new(steps: &'a [&'static Step], locale: Locale) -> Self {
        Self { steps, locale }
    }
}

impl<'a> fmt::Display for IncompleteSteps<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return writeln!(f, "All steps are complete.");
        }
        writeln!(f, "Incomplete steps:")?;
        for step in self.steps {
            writeln!(f, "- {}. {}", step.ordinal, step.title(self.locale))?;
        }
        Ok(())
    }
}
