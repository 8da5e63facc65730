//! Data models for the agreement wizard.
//!
//! This module contains the core domain models: the step registry entry
//! ([`Step`]) and its typed identity ([`StepId`]), the aggregate form value
//! with one data slice per step ([`FormValue`]), validation findings
//! ([`ValidationIssue`]), per-step and per-session progress states, and the
//! persisted session record ([`WizardSession`]).
//!
//! Display implementations for these models live in
//! [`crate::display`] to keep data structures separate from presentation.

pub mod form;
pub mod issue;
pub mod session;
pub mod status;
pub mod step;


// Re-export all public types at the models level
pub use form::{
    ChildData, ChildrenData, ConfirmationData, FormValue, PartiesData, PartyData, PeriodData,
};
pub use issue::ValidationIssue;
pub use session::WizardSession;
pub use status::{SessionStatus, StepProgress};
pub use step::{Step, StepId};
