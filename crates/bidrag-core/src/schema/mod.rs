//! Declarative validation of the aggregate form value.
//!
//! The schema exposes one validation routine per step plus a combined
//! routine over the whole [`FormValue`], including the cross-field rules
//! (date ordering, at-least-one-child). Validation is pure: given a form
//! value it returns an ordered list of [`ValidationIssue`]s and has no other
//! effect.
//!
//! Because validation messages are localized, the schema is a function of
//! the active locale. Construction resolves the message table once, and
//! [`Schema::for_locale`] memoizes one instance per locale so repeated
//! evaluations do not rebuild it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::i18n::{translate, Locale, Msg};
use crate::models::{FormValue, StepId, ValidationIssue};

pub mod ident;
mod rules;

/// Locale-bound validation rules for the wizard.
pub struct Schema {
    locale: Locale,
}

impl Schema {
    fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Memoized schema handle for a locale.
    pub fn for_locale(locale: Locale) -> Arc<Schema> {
        static CACHE: OnceLock<Mutex<HashMap<Locale, Arc<Schema>>>> = OnceLock::new();

        let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
        let mut guard = cache.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            guard
                .entry(locale)
                .or_insert_with(|| Arc::new(Schema::new(locale))),
        )
    }

    /// The locale this schema produces messages in.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Validate the whole aggregate form value.
    ///
    /// Issues are ordered by owning step, then by field order within the
    /// step. An empty vector means the form is complete.
    pub fn validate(&self, form: &FormValue) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        self.validate_partene(form, &mut issues);
        self.validate_barna(form, &mut issues);
        self.validate_periode(form, &mut issues);
        self.validate_bekreftelse(form, &mut issues);
        issues
    }

    /// Validate only the slice owned by one step.
    ///
    /// Cross-field rules that live entirely within the step (date ordering,
    /// party identity collision) are included; nothing outside the step is
    /// inspected.
    pub fn validate_step(&self, step: StepId, form: &FormValue) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        match step {
            StepId::Partene => self.validate_partene(form, &mut issues),
            StepId::Barna => self.validate_barna(form, &mut issues),
            StepId::Periode => self.validate_periode(form, &mut issues),
            StepId::Bekreftelse => self.validate_bekreftelse(form, &mut issues),
        }
        issues
    }

    pub(crate) fn msg(&self, msg: Msg) -> &'static str {
        translate(self.locale, msg)
    }
}
