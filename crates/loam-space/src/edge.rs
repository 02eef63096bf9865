//! Boundary behaviour for lookups past the grid edge.

/// How a grid resolves neighbour coordinates that fall outside it.
///
/// # Examples
///
/// ```
/// use loam_space::EdgeBehavior;
///
/// // Wrap: the grid is a torus.
/// assert_eq!(EdgeBehavior::Wrap.resolve_axis(-1, 5), Some(4));
/// assert_eq!(EdgeBehavior::Wrap.resolve_axis(5, 5), Some(0));
///
/// // Sentinel: out-of-range lookups see a fixed state-0 cell.
/// assert_eq!(EdgeBehavior::Sentinel.resolve_axis(-1, 5), None);
/// assert_eq!(EdgeBehavior::Sentinel.resolve_axis(2, 5), Some(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range coordinates wrap to the opposite edge (toroidal).
    Wrap,
    /// Out-of-range coordinates resolve to the sentinel state-0 cell.
    Sentinel,
}

impl EdgeBehavior {
    /// `Wrap` for looping grids, `Sentinel` otherwise.
    pub fn from_loop(looping: bool) -> Self {
        if looping {
            Self::Wrap
        } else {
            Self::Sentinel
        }
    }

    /// Whether this is the toroidal behaviour.
    pub fn is_loop(self) -> bool {
        self == Self::Wrap
    }

    /// Resolve a single axis value against an axis of length `len`.
    ///
    /// Returns the in-range index, or `None` when the coordinate falls
    /// outside a [`Sentinel`](Self::Sentinel) grid. Wrapping uses Euclidean
    /// remainder, so offsets wider than the axis itself still land in range.
    /// `len` must be non-zero.
    #[inline]
    pub fn resolve_axis(self, val: i64, len: u32) -> Option<usize> {
        let n = i64::from(len);
        if (0..n).contains(&val) {
            return Some(val as usize);
        }
        match self {
            Self::Sentinel => None,
            Self::Wrap => Some(val.rem_euclid(n) as usize),
        }
    }
}
