//! Aggregate form value and per-step data slices.
//!
//! [`FormValue`] is the union of all step slices and the single object the
//! combined schema validates against. Every field carries a serde default so
//! any partial or empty stored JSON deserializes into a well-formed value;
//! malformed session data is handled upstream by falling back to
//! `FormValue::default()`.
//!
//! Wire names are camelCase to match the session-stored JSON produced by the
//! original form bindings (`fulltNavn`, `fraDato`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::StepId;
use crate::error::{Result, WizardError};

/// The merged value of all wizard steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValue {
    /// Step 1: the two parties
    pub partene: PartiesData,

    /// Step 2: the children the agreement covers
    pub barna: ChildrenData,

    /// Step 3: the agreement period
    pub periode: PeriodData,

    /// Step 4: summary confirmation
    pub bekreftelse: ConfirmationData,
}

/// Data slice owned by the parties step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PartiesData {
    /// The party obliged to pay support
    pub bidragspliktig: PartyData,

    /// The party receiving support
    pub bidragsmottaker: PartyData,
}

/// One party of the agreement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyData {
    /// Full name as entered
    pub fullt_navn: String,

    /// National identity number (fødselsnummer), 11 digits
    pub ident: String,
}

/// Data slice owned by the children step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildrenData {
    /// Repeatable list of children covered by the agreement
    pub barn: Vec<ChildData>,
}

/// One child covered by the agreement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildData {
    /// Full name as entered
    pub fullt_navn: String,

    /// National identity number (fødselsnummer), 11 digits
    pub ident: String,

    /// Agreed monthly amount in whole kroner, as entered
    pub sum: String,
}

/// Data slice owned by the period step.
///
/// Dates are kept as entered; the schema layer parses them. An empty string
/// means the field has not been filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodData {
    /// Start date of the agreement (ISO format), required
    pub fra_dato: String,

    /// Optional end date of the agreement (ISO format)
    pub til_dato: String,
}

/// Data slice owned by the confirmation step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfirmationData {
    /// Whether the summary has been confirmed
    pub bekreftet: bool,
}

impl FormValue {
    /// Extract the slice owned by one step as a JSON value.
    pub fn slice(&self, step: StepId) -> Value {
        let value = match step {
            StepId::Partene => serde_json::to_value(&self.partene),
            StepId::Barna => serde_json::to_value(&self.barna),
            StepId::Periode => serde_json::to_value(&self.periode),
            StepId::Bekreftelse => serde_json::to_value(&self.bekreftelse),
        };
        value.unwrap_or_default()
    }

    /// Whether a step's slice still holds only default values.
    pub fn step_is_empty(&self, step: StepId) -> bool {
        match step {
            StepId::Partene => self.partene == PartiesData::default(),
            StepId::Barna => self.barna == ChildrenData::default(),
            StepId::Periode => self.periode == PeriodData::default(),
            StepId::Bekreftelse => self.bekreftelse == ConfirmationData::default(),
        }
    }

    /// Apply a JSON patch to one step's slice.
    ///
    /// Objects merge recursively with last-write-wins per field; arrays and
    /// scalars replace wholesale. Fields outside the step's slice cannot be
    /// touched since each field is owned by exactly one step.
    pub fn apply_patch(&mut self, step: StepId, patch: &Value) -> Result<()> {
        let mut slice = self.slice(step);
        merge_json(&mut slice, patch);

        match step {
            StepId::Partene => self.partene = from_slice(step, slice)?,
            StepId::Barna => self.barna = from_slice(step, slice)?,
            StepId::Periode => self.periode = from_slice(step, slice)?,
            StepId::Bekreftelse => self.bekreftelse = from_slice(step, slice)?,
        }
        Ok(())
    }
}

fn from_slice<T: serde::de::DeserializeOwned>(step: StepId, slice: Value) -> Result<T> {
    serde_json::from_value(slice)
        .map_err(|e| WizardError::invalid_input(step.token(), e.to_string()))
}

/// Recursive JSON merge: objects merge key by key, everything else replaces.
fn merge_json(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => merge_json(base_value, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}
