//! Lattice contract test helpers.
//!
//! These functions verify that a [`Lattice`] and the sampler built on it
//! satisfy the boundary and ordering invariants every topology relies on.

use crate::edge::EdgeBehavior;
use crate::lattice::Lattice;
use crate::sample::sample;
use crate::topology::Topology;
use loam_core::StateId;

/// Minimal row-major lattice for tests.
#[derive(Clone, Debug)]
pub struct VecLattice {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
    cells: Vec<StateId>,
}

impl VecLattice {
    pub fn new(width: u32, height: u32, edge: EdgeBehavior, cells: Vec<StateId>) -> Self {
        assert_eq!(cells.len(), (width * height) as usize);
        Self {
            width,
            height,
            edge,
            cells,
        }
    }
}

impl Lattice for VecLattice {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    fn cell(&self, x: usize, y: usize) -> StateId {
        self.cells[y * self.width as usize + x]
    }
}

/// Assert that in-range `cell_at` agrees with `cell`.
pub fn assert_in_range_lookup(l: &dyn Lattice) {
    for y in 0..l.height() as usize {
        for x in 0..l.width() as usize {
            assert_eq!(
                l.cell_at(x as i64, y as i64),
                l.cell(x, y),
                "cell_at({x}, {y}) disagrees with cell"
            );
        }
    }
}

/// Assert the one-cell ring around the lattice resolves per the edge policy.
pub fn assert_boundary_ring(l: &dyn Lattice) {
    let w = i64::from(l.width());
    let h = i64::from(l.height());
    for y in -1..=h {
        for x in -1..=w {
            if (0..w).contains(&x) && (0..h).contains(&y) {
                continue;
            }
            let got = l.cell_at(x, y);
            match l.edge() {
                EdgeBehavior::Sentinel => assert_eq!(
                    got,
                    StateId::SENTINEL,
                    "cell_at({x}, {y}) should be the sentinel"
                ),
                EdgeBehavior::Wrap => assert_eq!(
                    got,
                    l.cell_at(x.rem_euclid(w), y.rem_euclid(h)),
                    "cell_at({x}, {y}) should wrap"
                ),
            }
        }
    }
}

/// Assert every sample matches the offset table, entry by entry.
pub fn assert_sample_matches_offsets(l: &dyn Lattice) {
    for topology in Topology::ALL {
        for y in 0..l.height() as usize {
            for x in 0..l.width() as usize {
                let n = sample(l, topology, x, y);
                assert_eq!(n.len(), topology.size());
                for (i, &(dx, dy)) in topology.offsets().iter().enumerate() {
                    let expected = l.cell_at(x as i64 + i64::from(dx), y as i64 + i64::from(dy));
                    assert_eq!(
                        n[i], expected,
                        "{topology} sample at ({x}, {y}) position {i} mismatched"
                    );
                }
            }
        }
    }
}

/// Run every compliance check against `l`.
pub fn run_full_compliance(l: &dyn Lattice) {
    assert_in_range_lookup(l);
    assert_boundary_ring(l);
    assert_sample_matches_offsets(l);
}
