//! Strongly-typed cell state identifiers.

use std::fmt;

/// Identifies a cell state within a rule set.
///
/// State identifiers are dense: `StateId(n)` is the n-th entry of the
/// rule set's state table, and a valid identifier is always an index
/// in `[0, state_count)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub u32);

impl StateId {
    /// The value substituted for out-of-range lookups on bounded grids.
    ///
    /// The sentinel is a genuine state-0 cell: it participates in counts
    /// and pattern matches like any real neighbour in state 0.
    pub const SENTINEL: StateId = StateId(0);

    /// This identifier as an index into the state table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
