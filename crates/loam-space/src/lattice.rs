//! The read-only grid view consumed by neighbourhood sampling.

use crate::edge::EdgeBehavior;
use loam_core::StateId;

/// A rectangular generation of cell states.
///
/// Implementors supply in-range lookups through [`cell`](Self::cell);
/// the provided [`cell_at`](Self::cell_at) layers the boundary policy on
/// top, so every topology resolves edges the same way.
pub trait Lattice {
    /// Number of columns. Always non-zero.
    fn width(&self) -> u32;

    /// Number of rows. Always non-zero.
    fn height(&self) -> u32;

    /// Boundary policy for out-of-range lookups.
    fn edge(&self) -> EdgeBehavior;

    /// State of the in-range cell at column `x`, row `y`.
    ///
    /// Callers guarantee `x < width` and `y < height`.
    fn cell(&self, x: usize, y: usize) -> StateId;

    /// Boundary-resolved lookup.
    ///
    /// On a wrapping lattice each axis is reduced modulo its length; on a
    /// sentinel lattice any coordinate outside `[0, width) x [0, height)`
    /// yields [`StateId::SENTINEL`].
    #[inline]
    fn cell_at(&self, x: i64, y: i64) -> StateId {
        let edge = self.edge();
        match (
            edge.resolve_axis(x, self.width()),
            edge.resolve_axis(y, self.height()),
        ) {
            (Some(x), Some(y)) => self.cell(x, y),
            _ => StateId::SENTINEL,
        }
    }
}
