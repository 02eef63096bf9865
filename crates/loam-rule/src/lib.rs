//! Rule sets and transition evaluation for Loam automata.
//!
//! A [`RuleSet`] is the immutable description of an automaton: one
//! [`StateRule`] per state, a neighbourhood [`Topology`](loam_space::Topology),
//! and an evaluation [`Mode`]. Every transition in a rule set has the same
//! shape, selected by the mode:
//!
//! - [`Mode::Pattern`]: positional templates with wildcards ([`PatternRule`])
//! - [`Mode::Threshold`]: neighbour counts against an acceptable set
//!   ([`ThresholdRule`])
//!
//! Rule sets are built through [`RuleSet::builder`], which validates every
//! invariant up front. [`next_state`] is the pure per-cell decision
//! procedure: the first satisfied transition wins, otherwise the state's
//! default successor applies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod evaluate;
pub mod mode;
pub mod presets;
pub mod ruleset;
pub mod state;
pub mod transition;

pub use evaluate::next_state;
pub use mode::Mode;
pub use ruleset::{RuleSet, RuleSetBuilder};
pub use state::StateRule;
pub use transition::{PatternCell, PatternRule, ThresholdRule, TransitionRule};
