//! Persisted wizard session model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::FormValue;

/// A persisted wizard session.
///
/// Sessions are created empty on first touch, mutated by step patches and
/// navigation throughout their lifetime, and either cleared or marked
/// submitted at the end. Concurrent writers to the same session race with
/// last-write-wins semantics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WizardSession {
    /// Session identifier (one per browser session in the original system)
    pub id: String,

    /// The aggregate form value entered so far
    pub form: FormValue,

    /// Route path of the step the user is currently on
    pub current_route: String,

    /// Whether the agreement has been submitted (terminal)
    pub submitted: bool,

    /// Timestamp when the session was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the session was last written (UTC)
    pub updated_at: Timestamp,
}
