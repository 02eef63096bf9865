//! The per-cell decision procedure.

use crate::ruleset::RuleSet;
use loam_core::StateId;

/// Compute the successor of a cell in state `current`.
///
/// Transitions of `current`'s rule are tried in stored order and the
/// first satisfied one wins; if none holds the rule's default successor is
/// returned. The function is pure.
///
/// `neighbourhood` must be the cell's neighbourhood sampled with the rule
/// set's topology.
///
/// # Panics
///
/// Panics if `current` is not a state of `rules`.
#[inline]
pub fn next_state(current: StateId, neighbourhood: &[StateId], rules: &RuleSet) -> StateId {
    let rule = rules.state(current);
    rule.transitions
        .iter()
        .find(|t| t.matches(neighbourhood))
        .map_or(rule.default_next, |t| t.new_state())
}
