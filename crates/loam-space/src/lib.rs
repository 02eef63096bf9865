//! Neighbourhood sampling for Loam automata.
//!
//! This crate defines the [`Lattice`] trait — the read-only view of a
//! generation through which every neighbour lookup flows — along with the
//! fixed set of neighbourhood [`Topology`] shapes and the
//! [`EdgeBehavior`] that resolves lookups past the grid edge.
//!
//! # Topologies
//!
//! | Topology | Size | Emission order |
//! |----------|------|----------------|
//! | [`Topology::Moore`] | 8 | row-major by `dy`, then `dx` |
//! | [`Topology::VonNeumann`] | 4 | up, left, right, down |
//! | [`Topology::Hex`] | 6 | up-left, up, left, right, down, down-right |
//! | [`Topology::Elementary`] | 3 | up-left, up, up-right |
//! | [`Topology::Moost`] | 24 | row-major by `dy`, then `dx` (radius 2) |
//!
//! Pattern-mode rules match neighbourhoods positionally, so the emission
//! order is part of the public contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod lattice;
pub mod sample;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use lattice::Lattice;
pub use sample::{sample, sample_into, Neighbourhood, MAX_NEIGHBOURHOOD};
pub use topology::Topology;
