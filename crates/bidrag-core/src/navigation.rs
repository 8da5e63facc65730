//! Route-based navigation over the step registry.
//!
//! Navigation never validates; gating belongs to the summary screen, which
//! layers on top of [`crate::evaluator`]. Out-of-range moves are no-ops:
//! the first step has no previous and the last has no next.

use crate::models::Step;
use crate::registry;

/// Resolve the active step from the current route path.
///
/// Matching is by substring so nested routes and locale prefixes still land
/// on their step. Unresolvable paths return `None`; callers typically fall
/// back to the first step.
pub fn active_step(path: &str) -> Option<&'static Step> {
    registry::all().iter().find(|step| path.contains(step.route))
}

/// The step after `step` in registry order, if any.
pub fn next(step: &Step) -> Option<&'static Step> {
    registry::by_ordinal(step.ordinal + 1)
}

/// The step before `step` in registry order, if any.
pub fn previous(step: &Step) -> Option<&'static Step> {
    step.ordinal.checked_sub(1).and_then(registry::by_ordinal)
}
