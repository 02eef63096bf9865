//! Per-state transition tables.

use crate::transition::TransitionRule;
use loam_core::{Rgb, StateId};

/// Everything the engine knows about one state.
///
/// Transitions are evaluated in stored order and the first satisfied one
/// wins; `default_next` applies when none holds. `color` and `weight` are
/// carried for the renderer and for weighted initialisation respectively.
///
/// A `StateRule` becomes immutable once handed to
/// [`RuleSetBuilder::state`](crate::RuleSetBuilder::state).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRule {
    /// Display name, if any.
    pub name: Option<String>,
    /// Free-form note, ignored by the engine.
    pub note: Option<String>,
    /// Successor when no transition matches.
    pub default_next: StateId,
    /// Display colour.
    pub color: Rgb,
    /// Weighted-initialisation weight. Zero excludes the state from
    /// weighted draws.
    pub weight: u32,
    /// Transitions in evaluation order.
    pub transitions: Vec<TransitionRule>,
}

impl StateRule {
    /// A state with no transitions that always moves to `default_next`.
    ///
    /// Colour defaults to black and weight to 1.
    pub fn new(default_next: impl Into<StateId>) -> Self {
        Self {
            name: None,
            note: None,
            default_next: default_next.into(),
            color: Rgb::BLACK,
            weight: 1,
            transitions: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a free-form note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the display colour.
    pub fn with_color(mut self, color: impl Into<Rgb>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the initialisation weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Append a transition after the existing ones.
    pub fn with_transition(mut self, transition: impl Into<TransitionRule>) -> Self {
        self.transitions.push(transition.into());
        self
    }
}
