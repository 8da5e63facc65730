//! High-level wizard API for driving an agreement session.
//!
//! The [`Wizard`] is the central coordinator between interface layers and
//! the session store. It owns no state beyond the database path; every
//! operation loads the session, applies the change, and persists it, so
//! concurrent interfaces sharing a session race with last-write-wins
//! semantics exactly like concurrent browser tabs did in the original
//! system.
//!
//! ## Submodules
//!
//! - [`builder`]: factory for creating [`Wizard`] instances with configuration
//! - [`session_ops`]: session lifecycle, navigation, evaluation and submission
//! - [`form_ops`]: per-step data reads and patches
//!
//! All operations are async and wrap the blocking SQLite work in
//! `tokio::task::spawn_blocking`.

use std::path::PathBuf;

use crate::evaluator;
use crate::i18n::Locale;
use crate::models::{SessionStatus, Step, StepProgress, WizardSession};
use crate::navigation;
use crate::registry;

pub mod builder;
pub mod form_ops;
pub mod session_ops;

#[cfg(test)]
mod tests;

pub use builder::WizardBuilder;

/// Main wizard interface for managing agreement sessions.
pub struct Wizard {
    pub(crate) db_path: PathBuf,
}

impl Wizard {
    /// Creates a new wizard with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

/// Per-step line of a status report.
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    /// The registry entry
    pub step: &'static Step,

    /// Progress of this step in the session
    pub progress: StepProgress,
}

/// Snapshot of a session's aggregate and per-step state.
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// The session the report describes
    pub session: WizardSession,

    /// Aggregate session status
    pub status: SessionStatus,

    /// One line per registry step, in ordinal order
    pub steps: Vec<StepReport>,

    /// The step the session's current route resolves to
    pub active: &'static Step,

    /// Locale the report's titles render in
    pub locale: Locale,
}

/// Build a status report from a loaded session. Pure; never fails.
pub(crate) fn status_report(session: WizardSession, locale: Locale) -> StatusReport {
    let incomplete = evaluator::incomplete_steps(&session.form, locale);

    let steps = registry::all()
        .iter()
        .map(|step| {
            let progress = if !incomplete.iter().any(|s| s.id == step.id) {
                StepProgress::Complete
            } else if session.form.step_is_empty(step.id) {
                StepProgress::Empty
            } else {
                StepProgress::InProgress
            };
            StepReport { step, progress }
        })
        .collect();

    let status = if session.submitted {
        SessionStatus::Submitted
    } else if incomplete.is_empty() {
        SessionStatus::ReadyToSubmit
    } else {
        SessionStatus::Incomplete
    };

    let active = navigation::active_step(&session.current_route).unwrap_or_else(registry::first);

    StatusReport {
        session,
        status,
        steps,
        active,
        locale,
    }
}
