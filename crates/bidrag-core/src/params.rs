//! Parameter structures for wizard operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, other
//! surfaces later) without framework-specific derives. Interface layers
//! wrap these with their own derives and convert via `From`/accessors, so
//! core logic never depends on clap or any other frontend framework.

use serde::{Deserialize, Serialize};

use crate::calc::VisitationClass;
use crate::models::StepId;

/// Reference to a wizard session by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRef {
    /// The session identifier
    pub session: String,
}

/// JSON patch for one step's data slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepPatch {
    /// The session identifier
    pub session: String,

    /// The step whose slice is patched
    pub step: StepId,

    /// Patch to merge into the slice (objects merge, scalars replace)
    pub data: serde_json::Value,
}

/// Explicit route transition to a step by ordinal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goto {
    /// The session identifier
    pub session: String,

    /// 1-based ordinal of the target step
    pub ordinal: u32,
}

/// Inputs for a support estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateParams {
    /// The payer's gross annual income in whole kroner
    pub payer_income: u64,

    /// The receiver's gross annual income in whole kroner
    pub receiver_income: u64,

    /// Ages of the children the estimate covers
    pub child_ages: Vec<u8>,

    /// Visitation arrangement class
    pub visitation: VisitationClass,
}
