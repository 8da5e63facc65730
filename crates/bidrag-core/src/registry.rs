//! Static registry of wizard steps.
//!
//! The registry is the single ordered source of truth for the wizard's
//! steps: ordinal, route path, localized title key and owned data slice.
//! It is defined once at compile time and never mutated.

use crate::i18n::Msg;
use crate::models::{Step, StepId};

/// All wizard steps, in ordinal order.
pub static STEPS: [Step; 4] = [
    Step {
        id: StepId::Partene,
        ordinal: 1,
        route: "/avtale/partene",
        title_key: Msg::StepPartene,
    },
    Step {
        id: StepId::Barna,
        ordinal: 2,
        route: "/avtale/barna",
        title_key: Msg::StepBarna,
    },
    Step {
        id: StepId::Periode,
        ordinal: 3,
        route: "/avtale/periode",
        title_key: Msg::StepPeriode,
    },
    Step {
        id: StepId::Bekreftelse,
        ordinal: 4,
        route: "/avtale/oppsummering",
        title_key: Msg::StepBekreftelse,
    },
];

/// All steps in ordinal order.
pub fn all() -> &'static [Step] {
    &STEPS
}

/// Registry entry for a step identity. Total: every identity has an entry.
pub fn by_id(id: StepId) -> &'static Step {
    match id {
        StepId::Partene => &STEPS[0],
        StepId::Barna => &STEPS[1],
        StepId::Periode => &STEPS[2],
        StepId::Bekreftelse => &STEPS[3],
    }
}

/// Registry entry for a 1-based ordinal, if one exists.
pub fn by_ordinal(ordinal: u32) -> Option<&'static Step> {
    StepId::from_ordinal(ordinal).map(by_id)
}

/// Registry entry for a path token, if the token is recognized.
pub fn by_token(token: &str) -> Option<&'static Step> {
    StepId::from_token(token).map(by_id)
}

/// The first step of the wizard.
pub fn first() -> &'static Step {
    &STEPS[0]
}

/// The last step of the wizard.
pub fn last() -> &'static Step {
    &STEPS[STEPS.len() - 1]
}
