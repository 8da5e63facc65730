//! Step identity and registry entry definitions.

use serde::{Deserialize, Serialize};

use crate::i18n::{translate, Locale, Msg};

/// Typed identity of a wizard step.
///
/// Each variant owns exactly one data slice of the aggregate form value,
/// addressed by its path token (the leading segment of validation-issue
/// paths). The enumeration replaces stringly-typed prefix parsing: the only
/// place a token is interpreted is [`StepId::from_token`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepId {
    /// The two parties of the agreement
    Partene,

    /// The children the agreement covers
    Barna,

    /// The agreement period
    Periode,

    /// Summary confirmation
    Bekreftelse,
}

impl StepId {
    /// 1-based position of the step in the registry.
    pub fn ordinal(self) -> u32 {
        match self {
            StepId::Partene => 1,
            StepId::Barna => 2,
            StepId::Periode => 3,
            StepId::Bekreftelse => 4,
        }
    }

    /// Path token identifying the data slice this step owns.
    pub fn token(self) -> &'static str {
        match self {
            StepId::Partene => "partene",
            StepId::Barna => "barna",
            StepId::Periode => "periode",
            StepId::Bekreftelse => "bekreftelse",
        }
    }

    /// Resolve a path token to a step identity.
    ///
    /// Unrecognized tokens resolve to `None`; callers are expected to drop
    /// them rather than fail.
    pub fn from_token(token: &str) -> Option<StepId> {
        match token {
            "partene" => Some(StepId::Partene),
            "barna" => Some(StepId::Barna),
            "periode" => Some(StepId::Periode),
            "bekreftelse" => Some(StepId::Bekreftelse),
            _ => None,
        }
    }

    /// Resolve a 1-based ordinal to a step identity.
    pub fn from_ordinal(ordinal: u32) -> Option<StepId> {
        match ordinal {
            1 => Some(StepId::Partene),
            2 => Some(StepId::Barna),
            3 => Some(StepId::Periode),
            4 => Some(StepId::Bekreftelse),
            _ => None,
        }
    }
}

/// A registry entry describing one wizard step.
///
/// Steps are defined once in [`crate::registry`] and never mutated at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Typed identity of the step
    pub id: StepId,

    /// 1-based position in the registry (dense, unique)
    pub ordinal: u32,

    /// Route path owned by the step
    pub route: &'static str,

    /// Message key for the localized step title
    pub title_key: Msg,
}

impl Step {
    /// Localized display title of the step.
    pub fn title(&self, locale: Locale) -> &'static str {
        translate(locale, self.title_key)
    }

    /// Path token identifying the data slice this step owns.
    pub fn token(&self) -> &'static str {
        self.id.token()
    }
}
