//! The two transition shapes: pattern templates and threshold counts.

use crate::mode::Mode;
use indexmap::IndexSet;
use loam_core::StateId;

// ── Pattern mode ────────────────────────────────────────────────

/// One position of a pattern template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternCell {
    /// Matches any neighbour state.
    Any,
    /// Matches exactly this state.
    Is(StateId),
}

impl PatternCell {
    /// Decode a raw rule-file entry: negative values are wildcards.
    pub fn from_raw(raw: i32) -> Self {
        match u32::try_from(raw) {
            Ok(v) => Self::Is(StateId(v)),
            Err(_) => Self::Any,
        }
    }

    /// Whether a neighbour in state `s` satisfies this position.
    #[inline]
    pub fn matches(self, s: StateId) -> bool {
        match self {
            Self::Any => true,
            Self::Is(want) => want == s,
        }
    }
}

/// A positional neighbourhood template.
///
/// Satisfied iff every non-wildcard position equals the neighbour emitted
/// at the same position. The template length must equal the topology's
/// neighbourhood size; [`RuleSet::builder`](crate::RuleSet::builder)
/// enforces this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternRule {
    cells: Vec<PatternCell>,
    new_state: StateId,
}

impl PatternRule {
    /// Build a template from decoded cells.
    pub fn new(cells: impl IntoIterator<Item = PatternCell>, new_state: StateId) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            new_state,
        }
    }

    /// Build a template from raw entries; negative entries are wildcards.
    pub fn from_raw(raw: &[i32], new_state: StateId) -> Self {
        Self::new(raw.iter().copied().map(PatternCell::from_raw), new_state)
    }

    /// Template positions, in neighbourhood order.
    pub fn cells(&self) -> &[PatternCell] {
        &self.cells
    }

    /// State produced when the template matches.
    pub fn new_state(&self) -> StateId {
        self.new_state
    }

    /// Test the template against a sampled neighbourhood.
    #[inline]
    pub fn matches(&self, neighbourhood: &[StateId]) -> bool {
        self.cells
            .iter()
            .zip(neighbourhood)
            .all(|(cell, &s)| cell.matches(s))
    }
}

// ── Threshold mode ──────────────────────────────────────────────

/// A neighbour-count condition.
///
/// Satisfied iff the number of neighbours whose state is in `states` is
/// an element of `counts`. An empty `counts` set never matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThresholdRule {
    states: IndexSet<StateId>,
    counts: IndexSet<u32>,
    /// Largest acceptable count; counting stops once it is exceeded.
    ceiling: Option<u32>,
    new_state: StateId,
}

impl ThresholdRule {
    /// Build a count condition.
    pub fn new(
        states: impl IntoIterator<Item = StateId>,
        counts: impl IntoIterator<Item = u32>,
        new_state: StateId,
    ) -> Self {
        let states: IndexSet<StateId> = states.into_iter().collect();
        let counts: IndexSet<u32> = counts.into_iter().collect();
        let ceiling = counts.iter().copied().max();
        Self {
            states,
            counts,
            ceiling,
            new_state,
        }
    }

    /// States counted among the neighbours.
    pub fn states(&self) -> &IndexSet<StateId> {
        &self.states
    }

    /// Acceptable neighbour counts.
    pub fn counts(&self) -> &IndexSet<u32> {
        &self.counts
    }

    /// State produced when the condition holds.
    pub fn new_state(&self) -> StateId {
        self.new_state
    }

    /// Number of neighbours in a state of interest.
    pub fn count(&self, neighbourhood: &[StateId]) -> u32 {
        neighbourhood
            .iter()
            .filter(|s| self.states.contains(*s))
            .count() as u32
    }

    /// Test the condition against a sampled neighbourhood.
    ///
    /// Counts only grow, so evaluation stops as soon as the running count
    /// passes the largest acceptable count.
    #[inline]
    pub fn matches(&self, neighbourhood: &[StateId]) -> bool {
        let Some(ceiling) = self.ceiling else {
            return false;
        };
        let mut count = 0u32;
        for s in neighbourhood {
            if self.states.contains(s) {
                count += 1;
                if count > ceiling {
                    return false;
                }
            }
        }
        self.counts.contains(&count)
    }
}

// ── TransitionRule ──────────────────────────────────────────────

/// A single transition of a [`StateRule`](crate::StateRule).
///
/// A rule set never mixes variants: all transitions share the variant
/// selected by its [`Mode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionRule {
    /// Pattern-mode transition.
    Pattern(PatternRule),
    /// Threshold-mode transition.
    Threshold(ThresholdRule),
}

impl TransitionRule {
    /// Shorthand for a pattern transition from raw entries.
    pub fn pattern(raw: &[i32], new_state: impl Into<StateId>) -> Self {
        Self::Pattern(PatternRule::from_raw(raw, new_state.into()))
    }

    /// Shorthand for a threshold transition.
    pub fn threshold(
        states: impl IntoIterator<Item = u32>,
        counts: impl IntoIterator<Item = u32>,
        new_state: impl Into<StateId>,
    ) -> Self {
        Self::Threshold(ThresholdRule::new(
            states.into_iter().map(StateId),
            counts,
            new_state.into(),
        ))
    }

    /// The mode this transition belongs to.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Pattern(_) => Mode::Pattern,
            Self::Threshold(_) => Mode::Threshold,
        }
    }

    /// State produced when the condition holds.
    pub fn new_state(&self) -> StateId {
        match self {
            Self::Pattern(p) => p.new_state(),
            Self::Threshold(t) => t.new_state(),
        }
    }

    /// Test the condition against a sampled neighbourhood.
    #[inline]
    pub fn matches(&self, neighbourhood: &[StateId]) -> bool {
        match self {
            Self::Pattern(p) => p.matches(neighbourhood),
            Self::Threshold(t) => t.matches(neighbourhood),
        }
    }
}

impl From<PatternRule> for TransitionRule {
    fn from(p: PatternRule) -> Self {
        Self::Pattern(p)
    }
}

impl From<ThresholdRule> for TransitionRule {
    fn from(t: ThresholdRule) -> Self {
        Self::Threshold(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(v: &[u32]) -> Vec<StateId> {
        v.iter().copied().map(StateId).collect()
    }

    #[test]
    fn negative_raw_entries_are_wildcards() {
        assert_eq!(PatternCell::from_raw(-1), PatternCell::Any);
        assert_eq!(PatternCell::from_raw(-7), PatternCell::Any);
        assert_eq!(PatternCell::from_raw(0), PatternCell::Is(StateId(0)));
        assert_eq!(PatternCell::from_raw(4), PatternCell::Is(StateId(4)));
    }

    #[test]
    fn pattern_matches_positionally() {
        let p = PatternRule::from_raw(&[1, -1, 0], StateId(1));
        assert!(p.matches(&ids(&[1, 0, 0])));
        assert!(p.matches(&ids(&[1, 5, 0])));
        assert!(!p.matches(&ids(&[0, 1, 1])));
        assert!(!p.matches(&ids(&[1, 1, 1])));
    }

    #[test]
    fn all_wildcards_match_anything() {
        let p = PatternRule::from_raw(&[-1, -1, -1, -1], StateId(2));
        assert!(p.matches(&ids(&[0, 1, 2, 3])));
        assert!(p.matches(&ids(&[9, 9, 9, 9])));
    }

    #[test]
    fn threshold_counts_states_of_interest() {
        let t = ThresholdRule::new(ids(&[1, 2]), [2, 3], StateId(1));
        assert_eq!(t.count(&ids(&[1, 2, 0, 0])), 2);
        assert!(t.matches(&ids(&[1, 2, 0, 0])));
        assert!(t.matches(&ids(&[1, 1, 2, 0])));
        assert!(!t.matches(&ids(&[1, 0, 0, 0])));
        assert!(!t.matches(&ids(&[1, 1, 2, 2])));
    }

    #[test]
    fn threshold_zero_count() {
        let t = ThresholdRule::new(ids(&[1]), [0], StateId(3));
        assert!(t.matches(&ids(&[0, 0, 2])));
        assert!(!t.matches(&ids(&[0, 1, 2])));
    }

    #[test]
    fn threshold_empty_counts_never_match() {
        let t = ThresholdRule::new(ids(&[1]), Vec::new(), StateId(1));
        assert!(!t.matches(&ids(&[])));
        assert!(!t.matches(&ids(&[1, 1])));
    }

    #[test]
    fn transition_rule_reports_mode_and_target() {
        let p = TransitionRule::pattern(&[0, 1], 3u32);
        let t = TransitionRule::threshold([1], [2], 4u32);
        assert_eq!(p.mode(), Mode::Pattern);
        assert_eq!(t.mode(), Mode::Threshold);
        assert_eq!(p.new_state(), StateId(3));
        assert_eq!(t.new_state(), StateId(4));
    }

    proptest! {
        /// The early exit never changes the verdict.
        #[test]
        fn early_exit_agrees_with_full_count(
            states in prop::collection::vec(0u32..4, 0..4),
            counts in prop::collection::vec(0u32..10, 0..4),
            neighbours in prop::collection::vec(0u32..4, 0..25),
        ) {
            let t = ThresholdRule::new(
                states.iter().copied().map(StateId),
                counts.iter().copied(),
                StateId(0),
            );
            let n = ids(&neighbours);
            let full = t.counts().contains(&t.count(&n));
            prop_assert_eq!(t.matches(&n), full);
        }
    }
}
