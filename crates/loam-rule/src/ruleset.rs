//! Validated, immutable rule sets.
//!
//! [`RuleSetBuilder`] is the only way to obtain a [`RuleSet`].
//! [`build()`](RuleSetBuilder::build) checks every structural invariant
//! before any generation runs, so evaluation never meets a malformed rule.

use crate::evaluate;
use crate::mode::Mode;
use crate::state::StateRule;
use crate::transition::TransitionRule;
use loam_core::{ConfigError, Rgb, StateId};
use loam_space::Topology;
use log::debug;

/// An immutable automaton description.
///
/// `StateId(n)` names `states[n]`; identifiers are dense and every
/// transition target is a valid identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    name: String,
    states: Vec<StateRule>,
    topology: Topology,
    mode: Mode,
    weighted: bool,
}

impl RuleSet {
    /// Start describing a rule set. Defaults: Moore topology, threshold
    /// mode, uniform initialisation.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder {
            name: String::new(),
            states: Vec::new(),
            topology: Topology::Moore,
            mode: Mode::Threshold,
            weighted: false,
            error: None,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbourhood topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Evaluation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether random initialisation is weighted.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of states. Always at least 1.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Neighbourhood size of the configured topology.
    pub fn neighbourhood_size(&self) -> usize {
        self.topology.size()
    }

    /// All state rules, indexed by state identifier.
    pub fn states(&self) -> &[StateRule] {
        &self.states
    }

    /// Whether `id` names a state of this rule set.
    pub fn contains(&self, id: StateId) -> bool {
        id.index() < self.states.len()
    }

    /// The rule for `id`, or `None` if out of range.
    pub fn get(&self, id: StateId) -> Option<&StateRule> {
        self.states.get(id.index())
    }

    /// The rule for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a state of this rule set. Grids built against
    /// this rule set only ever hold valid identifiers.
    pub fn state(&self, id: StateId) -> &StateRule {
        &self.states[id.index()]
    }

    /// Display colour of `id`, or black if out of range.
    pub fn color_of(&self, id: StateId) -> Rgb {
        self.get(id).map_or(Rgb::BLACK, |s| s.color)
    }

    /// Per-state initialisation weights, in identifier order.
    pub fn weights(&self) -> impl Iterator<Item = u32> + '_ {
        self.states.iter().map(|s| s.weight)
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.weights().map(u64::from).sum()
    }

    /// Successor of a cell in state `current` with the given neighbourhood.
    ///
    /// See [`evaluate::next_state`].
    #[inline]
    pub fn next_state(&self, current: StateId, neighbourhood: &[StateId]) -> StateId {
        evaluate::next_state(current, neighbourhood, self)
    }
}

/// Builder for [`RuleSet`].
///
/// Tag-parsing setters record the first error, which
/// [`build()`](Self::build) returns.
#[derive(Debug)]
pub struct RuleSetBuilder {
    name: String,
    states: Vec<StateRule>,
    topology: Topology,
    mode: Mode,
    weighted: bool,
    error: Option<ConfigError>,
}

impl RuleSetBuilder {
    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the neighbourhood topology.
    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Set the topology from a rule-file tag such as `"von neumann"`.
    pub fn topology_tag(mut self, tag: &str) -> Self {
        match tag.parse() {
            Ok(t) => self.topology = t,
            Err(e) => self.record(e),
        }
        self
    }

    /// Set the evaluation mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the evaluation mode from a tag such as `"pattern"`.
    pub fn mode_tag(mut self, tag: &str) -> Self {
        match tag.parse() {
            Ok(m) => self.mode = m,
            Err(e) => self.record(e),
        }
        self
    }

    /// Enable or disable weighted initialisation.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Append the next state. The n-th call defines `StateId(n)`.
    pub fn state(mut self, state: StateRule) -> Self {
        self.states.push(state);
        self
    }

    /// Append several states in identifier order.
    pub fn states(mut self, states: impl IntoIterator<Item = StateRule>) -> Self {
        self.states.extend(states);
        self
    }

    fn record(&mut self, e: ConfigError) {
        if self.error.is_none() {
            self.error = Some(e);
        }
    }

    /// Validate and freeze the rule set.
    ///
    /// # Errors
    ///
    /// Returns the first tag-parsing error, or:
    /// - [`ConfigError::NoStates`] if no state was added
    /// - [`ConfigError::TooManyStates`] if identifiers would overflow `u32`
    /// - [`ConfigError::DefaultOutOfRange`] / [`ConfigError::TargetOutOfRange`]
    ///   for successors that are not states
    /// - [`ConfigError::ModeMismatch`] for a transition of the other mode
    /// - [`ConfigError::PatternLength`] for a template whose length is not
    ///   the topology's neighbourhood size
    /// - [`ConfigError::ZeroTotalWeight`] if weighted and every weight is 0
    pub fn build(self) -> Result<RuleSet, ConfigError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let state_count = self.states.len();
        if state_count == 0 {
            return Err(ConfigError::NoStates);
        }
        if u32::try_from(state_count).is_err() {
            return Err(ConfigError::TooManyStates { count: state_count });
        }
        let in_range = |id: StateId| id.index() < state_count;
        let expected_len = self.topology.size();

        for (index, rule) in self.states.iter().enumerate() {
            let state = StateId(index as u32);
            if !in_range(rule.default_next) {
                return Err(ConfigError::DefaultOutOfRange {
                    state,
                    target: rule.default_next,
                    state_count,
                });
            }
            for (position, transition) in rule.transitions.iter().enumerate() {
                if transition.mode() != self.mode {
                    return Err(ConfigError::ModeMismatch {
                        state,
                        rule: position,
                        expected: self.mode.name(),
                    });
                }
                if let TransitionRule::Pattern(p) = transition {
                    if p.cells().len() != expected_len {
                        return Err(ConfigError::PatternLength {
                            state,
                            rule: position,
                            expected: expected_len,
                            actual: p.cells().len(),
                        });
                    }
                }
                let target = transition.new_state();
                if !in_range(target) {
                    return Err(ConfigError::TargetOutOfRange {
                        state,
                        rule: position,
                        target,
                        state_count,
                    });
                }
            }
        }

        if self.weighted && self.states.iter().all(|s| s.weight == 0) {
            return Err(ConfigError::ZeroTotalWeight);
        }

        debug!(
            "rule set '{}' accepted: {} states, {} topology, {} mode{}",
            self.name,
            state_count,
            self.topology,
            self.mode,
            if self.weighted { ", weighted" } else { "" },
        );

        Ok(RuleSet {
            name: self.name,
            states: self.states,
            topology: self.topology,
            mode: self.mode,
            weighted: self.weighted,
        })
    }
}
