//! Error types for the Loam engine.
//!
//! Loam has exactly one fault class: a malformed rule set or grid
//! configuration, detected eagerly at construction time. Once a rule set
//! and a grid have been built, stepping the automaton cannot fail.

use crate::id::StateId;
use std::error::Error;
use std::fmt;

/// Errors detected while constructing a rule set or grid.
///
/// All variants are fatal: they are reported before any generation runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The rule set defines no states.
    NoStates,
    /// More states than a [`StateId`] can address.
    TooManyStates {
        /// Number of states supplied.
        count: usize,
    },
    /// A state's default successor is not a valid state identifier.
    DefaultOutOfRange {
        /// State whose default is invalid.
        state: StateId,
        /// The offending target.
        target: StateId,
        /// Number of states in the rule set.
        state_count: usize,
    },
    /// A transition targets a state that does not exist.
    TargetOutOfRange {
        /// State owning the transition.
        state: StateId,
        /// Position of the transition within the state's list.
        rule: usize,
        /// The offending target.
        target: StateId,
        /// Number of states in the rule set.
        state_count: usize,
    },
    /// A pattern's length differs from the topology's neighbourhood size.
    PatternLength {
        /// State owning the transition.
        state: StateId,
        /// Position of the transition within the state's list.
        rule: usize,
        /// Neighbourhood size of the configured topology.
        expected: usize,
        /// Length of the supplied pattern.
        actual: usize,
    },
    /// A transition's shape does not match the rule set's evaluation mode.
    ModeMismatch {
        /// State owning the transition.
        state: StateId,
        /// Position of the transition within the state's list.
        rule: usize,
        /// The rule set's mode, by name.
        expected: &'static str,
    },
    /// A neighbourhood topology tag was not recognised.
    UnknownTopology {
        /// The unrecognised tag.
        tag: String,
    },
    /// An evaluation mode tag was not recognised.
    UnknownMode {
        /// The unrecognised tag.
        tag: String,
    },
    /// Weighted initialisation was requested but every weight is zero.
    ZeroTotalWeight,
    /// The weighted state distribution could not be built.
    InvalidWeights {
        /// Why the distribution was rejected.
        reason: String,
    },
    /// A grid dimension is zero.
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A grid dimension exceeds what signed coordinates can address.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// Requested value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `width * height` does not fit in `usize`.
    CellCountOverflow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// An explicit cell buffer has the wrong length for the grid.
    InitialCellsLength {
        /// `width * height`.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
    /// An explicit cell buffer holds an identifier outside the rule set.
    InitialCellOutOfRange {
        /// Row-major index of the offending cell.
        index: usize,
        /// The offending state.
        state: StateId,
        /// Number of states in the rule set.
        state_count: usize,
    },
    /// The stepping thread pool could not be started.
    WorkerPool {
        /// Requested number of workers.
        workers: usize,
        /// Why the pool failed to start.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStates => write!(f, "rule set must define at least one state"),
            Self::TooManyStates { count } => {
                write!(f, "rule set defines {count} states, more than u32 can address")
            }
            Self::DefaultOutOfRange {
                state,
                target,
                state_count,
            } => write!(
                f,
                "state {state}: default successor {target} out of range (0..{state_count})"
            ),
            Self::TargetOutOfRange {
                state,
                rule,
                target,
                state_count,
            } => write!(
                f,
                "state {state}, transition {rule}: target {target} out of range (0..{state_count})"
            ),
            Self::PatternLength {
                state,
                rule,
                expected,
                actual,
            } => write!(
                f,
                "state {state}, transition {rule}: pattern has {actual} entries, \
                 neighbourhood has {expected}"
            ),
            Self::ModeMismatch {
                state,
                rule,
                expected,
            } => write!(
                f,
                "state {state}, transition {rule}: expected a {expected} transition"
            ),
            Self::UnknownTopology { tag } => write!(f, "unknown neighbourhood topology '{tag}'"),
            Self::UnknownMode { tag } => write!(f, "unknown evaluation mode '{tag}'"),
            Self::ZeroTotalWeight => {
                write!(f, "weighted initialisation requires a positive weight sum")
            }
            Self::InvalidWeights { reason } => {
                write!(f, "invalid initialisation weights: {reason}")
            }
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "grid {width}x{height} overflows the cell index range")
            }
            Self::InitialCellsLength { expected, actual } => {
                write!(f, "expected {expected} initial cells, got {actual}")
            }
            Self::InitialCellOutOfRange {
                index,
                state,
                state_count,
            } => write!(
                f,
                "initial cell {index} holds state {state}, out of range (0..{state_count})"
            ),
            Self::WorkerPool { workers, reason } => {
                write!(f, "failed to start {workers} stepping workers: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}
