//! Progress enumerations for steps and sessions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Progress of a single step within a session.
///
/// A step is `Empty` until its slice diverges from the defaults,
/// `InProgress` while the slice still fails validation, and `Complete`
/// once it passes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepProgress {
    /// No data entered yet
    Empty,

    /// Data entered but the step still fails validation
    InProgress,

    /// The step's slice passes validation
    Complete,
}

impl StepProgress {
    /// Get progress with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepProgress::Complete => "✓ Complete",
            StepProgress::InProgress => "➤ In progress",
            StepProgress::Empty => "○ Empty",
        }
    }
}

/// Aggregate state of a wizard session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// At least one step still fails validation
    #[default]
    Incomplete,

    /// Every step passes validation; submission is unblocked
    ReadyToSubmit,

    /// The agreement has been submitted (terminal)
    Submitted,
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incomplete" => Ok(SessionStatus::Incomplete),
            "readytosubmit" | "ready_to_submit" => Ok(SessionStatus::ReadyToSubmit),
            "submitted" => Ok(SessionStatus::Submitted),
            _ => Err(format!("Invalid session status: {s}")),
        }
    }
}

impl SessionStatus {
    /// Convert to a stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Incomplete => "incomplete",
            SessionStatus::ReadyToSubmit => "readytosubmit",
            SessionStatus::Submitted => "submitted",
        }
    }
}
