//! Completeness evaluation: which steps still fail validation.
//!
//! The evaluator is total. It never errors or panics for any form value:
//! unknown issue paths are dropped, duplicates collapse, and an empty form
//! simply reports every step. "All steps incomplete" is the normal steady
//! state of a fresh session.

use std::collections::BTreeSet;

use crate::i18n::Locale;
use crate::models::{FormValue, Step, StepId, ValidationIssue};
use crate::registry;
use crate::schema::Schema;

/// Steps whose slice of the form currently fails validation, in registry
/// order.
pub fn incomplete_steps(form: &FormValue, locale: Locale) -> Vec<&'static Step> {
    let schema = Schema::for_locale(locale);
    steps_for_issues(&schema.validate(form))
}

/// Whether the whole form passes the combined schema.
pub fn is_complete(form: &FormValue, locale: Locale) -> bool {
    incomplete_steps(form, locale).is_empty()
}

/// Resolve validation issues to their owning steps.
///
/// Each issue's leading path segment is mapped through
/// [`StepId::from_token`]; unresolvable segments are dropped. The result is
/// deduplicated and ordered by the registry, not by issue discovery order,
/// so UI highlighting is deterministic regardless of how the schema orders
/// its findings.
pub fn steps_for_issues(issues: &[ValidationIssue]) -> Vec<&'static Step> {
    let incomplete: BTreeSet<StepId> = issues
        .iter()
        .filter_map(ValidationIssue::leading_token)
        .filter_map(StepId::from_token)
        .collect();

    registry::all()
        .iter()
        .filter(|step| incomplete.contains(&step.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordinals(steps: &[&Step]) -> Vec<u32> {
        steps.iter().map(|s| s.ordinal).collect()
    }

    #[test]
    fn test_empty_form_reports_all_steps_in_order() {
        let steps = incomplete_steps(&FormValue::default(), Locale::Nb);
        assert_eq!(ordinals(&steps), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_result_is_strictly_increasing_and_deduplicated() {
        // Many issues per step must still collapse to one entry each.
        let steps = incomplete_steps(&FormValue::default(), Locale::Nb);
        for pair in steps.windows(2) {
            assert!(pair[0].ordinal < pair[1].ordinal);
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let form = FormValue::default();
        let first = ordinals(&incomplete_steps(&form, Locale::Nb));
        let second = ordinals(&incomplete_steps(&form, Locale::Nb));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognized_leading_segment_is_ignored() {
        let issues = vec![
            ValidationIssue::new(&["foo", "bar"], "nonsense"),
            ValidationIssue::new(&["periode", "fraDato"], "missing"),
        ];
        assert_eq!(ordinals(&steps_for_issues(&issues)), vec![3]);
    }

    #[test]
    fn test_empty_path_is_ignored() {
        let issues = vec![ValidationIssue {
            path: Vec::new(),
            message: "pathless".to_string(),
        }];
        assert!(steps_for_issues(&issues).is_empty());
    }

    #[test]
    fn test_order_follows_registry_not_issue_discovery() {
        let issues = vec![
            ValidationIssue::new(&["bekreftelse", "bekreftet"], "m"),
            ValidationIssue::new(&["partene", "bidragspliktig", "ident"], "m"),
        ];
        assert_eq!(ordinals(&steps_for_issues(&issues)), vec![1, 4]);
    }
}
