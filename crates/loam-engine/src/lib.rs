//! Grid stepping and the generation loop for Loam automata.
//!
//! A [`Grid`] holds one generation. [`Grid::step`] computes the next one
//! from the previous generation only: every cell samples its
//! neighbourhood from the frozen input and the results land in a separate
//! buffer, so no cell ever observes a neighbour's post-step value.
//!
//! [`Automaton`] is the lockstep driver: it owns the rule set, the
//! current grid and a scratch grid, and ping-pongs between them once per
//! [`step()`](Automaton::step). [`Generations`] offers the same loop as a
//! lazy, infinite iterator.
//!
//! Randomness enters only through [`Grid::random`], which is seeded from
//! [`GridConfig::seed`]; stepping is a pure function of its inputs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod config;
pub mod grid;
pub mod init;
pub mod view;

pub use automaton::{Automaton, Generations};
pub use config::GridConfig;
pub use grid::Grid;
pub use init::StateDraw;
pub use view::{Canvas, CellView, GridView};
