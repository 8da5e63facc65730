//! Core library for the barnebidrag agreement wizard.
//!
//! This crate provides the engine behind a multi-step form flow for private
//! child-support agreements: a static step registry, a session-persisted
//! per-step data store, a locale-aware validation schema, a completeness
//! evaluator mapping validation findings back to their owning steps, and
//! route-based navigation. A support-amount estimator and an agreement
//! document renderer round out the engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Wizard      │    │  Schema layer   │    │  Session store  │
//! │ (wizard/, the   │───▶│ (schema/, pure  │    │ (db/, SQLite,   │
//! │  async API)     │    │  per-locale)    │    │  one table)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!         │                      │
//!         ▼                      ▼
//! ┌─────────────────┐    ┌─────────────────┐
//! │   Navigation    │    │   Evaluator     │
//! │ (registry order)│    │ (issues → steps)│
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! The evaluator is total: for any form value it terminates without
//! error, deduplicates, and reports incomplete steps in registry order.
//! Validation issues are the only user-visible "failures"; malformed
//! session data degrades to an empty form.
//!
//! # Quick Start
//!
//! ```rust
//! use bidrag_core::{params::{SessionRef, StepPatch}, Locale, StepId, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let wizard = WizardBuilder::new()
//!     .with_database_path(Some("wizard.db"))
//!     .build()
//!     .await?;
//!
//! // Patch one step's data slice
//! wizard
//!     .update_step(&StepPatch {
//!         session: "default".to_string(),
//!         step: StepId::Periode,
//!         data: serde_json::json!({ "fraDato": "2026-01-01" }),
//!     })
//!     .await?;
//!
//! // Which steps still need input?
//! let params = SessionRef { session: "default".to_string() };
//! for step in wizard.incomplete(&params, Locale::Nb).await? {
//!     println!("{}. {}", step.ordinal, step.title(Locale::Nb));
//! }
//! # Ok(())
//! # }
//! ```

pub mod calc;
pub mod db;
pub mod display;
pub mod error;
pub mod evaluator;
pub mod i18n;
pub mod models;
pub mod navigation;
pub mod params;
pub mod registry;
pub mod schema;
pub mod wizard;

// Re-export commonly used types
pub use calc::{Estimate, VisitationClass};
pub use db::SessionDb;
pub use display::{Agreement, IncompleteSteps, Issues, LocalDateTime, OperationStatus};
pub use error::{Result, WizardError};
pub use i18n::{translate, Locale, Msg};
pub use models::{
    FormValue, SessionStatus, Step, StepId, StepProgress, ValidationIssue, WizardSession,
};
pub use schema::Schema;
pub use wizard::{StatusReport, StepReport, Wizard, WizardBuilder};
