//! Neighbourhood sampling.

use crate::lattice::Lattice;
use crate::topology::Topology;
use loam_core::StateId;
use smallvec::SmallVec;

/// Largest neighbourhood of any topology ([`Topology::Moost`]).
pub const MAX_NEIGHBOURHOOD: usize = 24;

/// The ordered neighbour states of one cell.
///
/// Inline capacity covers every topology, so sampling never allocates.
pub type Neighbourhood = SmallVec<[StateId; MAX_NEIGHBOURHOOD]>;

/// Sample the neighbourhood of the in-range cell `(x, y)`.
///
/// The result has exactly [`topology.size()`](Topology::size) entries,
/// in [`topology.offsets()`](Topology::offsets) order, with every
/// coordinate resolved through [`Lattice::cell_at`].
pub fn sample<L: Lattice + ?Sized>(
    lattice: &L,
    topology: Topology,
    x: usize,
    y: usize,
) -> Neighbourhood {
    let mut out = Neighbourhood::new();
    sample_into(lattice, topology, x, y, &mut out);
    out
}

/// Like [`sample`], but refills a caller-owned buffer.
pub fn sample_into<L: Lattice + ?Sized>(
    lattice: &L,
    topology: Topology,
    x: usize,
    y: usize,
    out: &mut Neighbourhood,
) {
    out.clear();
    let (x, y) = (x as i64, y as i64);
    out.extend(
        topology
            .offsets()
            .iter()
            .map(|&(dx, dy)| lattice.cell_at(x + i64::from(dx), y + i64::from(dy))),
    );
}
