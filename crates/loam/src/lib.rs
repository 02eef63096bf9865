//! Loam: a generalised two-dimensional cellular-automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // Conway's Game of Life, written out as a threshold rule set.
//! let rules = RuleSet::builder()
//!     .name("life")
//!     .topology(Topology::Moore)
//!     .mode(Mode::Threshold)
//!     .state(
//!         StateRule::new(0u32)
//!             .with_transition(TransitionRule::threshold([1], [3], 1u32)),
//!     )
//!     .state(
//!         StateRule::new(0u32)
//!             .with_color(Rgb::WHITE)
//!             .with_transition(TransitionRule::threshold([1], [2, 3], 1u32)),
//!     )
//!     .build()
//!     .unwrap();
//!
//! // A horizontal blinker on a bounded 3x3 grid.
//! let cells = [0, 0, 0, 1, 1, 1, 0, 0, 0].map(StateId).to_vec();
//! let grid = Grid::from_cells(&GridConfig::new(3, 3, false), cells, &rules).unwrap();
//!
//! let mut automaton = Automaton::with_grid(grid, rules).unwrap();
//! let next = automaton.step();
//! assert_eq!(next.get(1, 0), Some(StateId(1)));
//! assert_eq!(next.get(0, 1), Some(StateId(0)));
//! assert_eq!(automaton.generation(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loam-core` | State identifiers, colours, configuration errors |
//! | [`space`] | `loam-space` | Topologies, edge behaviour, neighbourhood sampling |
//! | [`rule`] | `loam-rule` | Rule sets, transitions, evaluation, presets |
//! | [`engine`] | `loam-engine` | Grids, stepping, random initialisation, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`loam-core`).
///
/// [`types::StateId`], [`types::Rgb`] and the single error type
/// [`types::ConfigError`].
pub use loam_core as types;

/// Neighbourhood shapes and sampling (`loam-space`).
///
/// [`space::Topology`] fixes the neighbour emission order;
/// [`space::sample`] reads a neighbourhood from any [`space::Lattice`].
pub use loam_space as space;

/// Rule sets and transition evaluation (`loam-rule`).
///
/// Build a [`rule::RuleSet`] with [`rule::RuleSet::builder`], or start
/// from one of the [`rule::presets`].
pub use loam_rule as rule;

/// Grids and the generation loop (`loam-engine`).
///
/// [`engine::Grid::step`] for one generation, [`engine::Automaton`] for
/// buffered lockstep stepping, [`engine::Generations`] as an iterator.
pub use loam_engine as engine;

/// Common imports for typical Loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use loam_core::{ConfigError, Rgb, StateId};

    // Space
    pub use loam_space::{EdgeBehavior, Lattice, Topology};

    // Rules
    pub use loam_rule::{presets, Mode, RuleSet, StateRule, TransitionRule};

    // Engine
    pub use loam_engine::{Automaton, Canvas, Generations, Grid, GridConfig, GridView};
}
