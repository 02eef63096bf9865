//! Neighbourhood shapes and their fixed emission order.

use loam_core::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Moore neighbourhood: the 8 cells at Chebyshev distance 1.
#[rustfmt::skip]
const MOORE: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Von Neumann neighbourhood: up, left, right, down.
const VON_NEUMANN: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Hex neighbourhood on an offset square grid.
///
/// ```text
/// XX.
/// XOX
/// .XX
/// ```
const HEX: [(i32, i32); 6] = [(-1, -1), (0, -1), (-1, 0), (1, 0), (0, 1), (1, 1)];

/// Elementary neighbourhood: the three cells of the row above.
const ELEMENTARY: [(i32, i32); 3] = [(-1, -1), (0, -1), (1, -1)];

/// Extended Moore neighbourhood: the 24 cells at Chebyshev distance <= 2.
#[rustfmt::skip]
const MOOST: [(i32, i32); 24] = [
    (-2, -2), (-1, -2), (0, -2), (1, -2), (2, -2),
    (-2, -1), (-1, -1), (0, -1), (1, -1), (2, -1),
    (-2,  0), (-1,  0),          (1,  0), (2,  0),
    (-2,  1), (-1,  1), (0,  1), (1,  1), (2,  1),
    (-2,  2), (-1,  2), (0,  2), (1,  2), (2,  2),
];

/// The shape of the neighbourhood sampled around each cell.
///
/// Fixed for the lifetime of an automaton. Offsets are `(dx, dy)` with
/// `y` growing downwards, and [`offsets`](Self::offsets) lists them in
/// the order neighbours are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// 8 surrounding cells.
    Moore,
    /// 4 orthogonal cells.
    VonNeumann,
    /// 6 cells of a hexagonal tiling mapped onto the square grid.
    Hex,
    /// 3 cells of the row above (one-dimensional Wolfram-style rules).
    Elementary,
    /// 24 cells within Chebyshev radius 2.
    Moost,
}

impl Topology {
    /// Every topology, in declaration order.
    pub const ALL: [Topology; 5] = [
        Topology::Moore,
        Topology::VonNeumann,
        Topology::Hex,
        Topology::Elementary,
        Topology::Moost,
    ];

    /// Neighbour offsets `(dx, dy)` in emission order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Moore => &MOORE,
            Self::VonNeumann => &VON_NEUMANN,
            Self::Hex => &HEX,
            Self::Elementary => &ELEMENTARY,
            Self::Moost => &MOOST,
        }
    }

    /// Number of neighbours emitted per cell.
    pub fn size(self) -> usize {
        self.offsets().len()
    }

    /// Largest absolute offset on either axis.
    pub fn radius(self) -> u32 {
        match self {
            Self::Moost => 2,
            _ => 1,
        }
    }

    /// Canonical tag, as accepted by [`FromStr`].
    pub fn tag(self) -> &'static str {
        match self {
            Self::Moore => "moore",
            Self::VonNeumann => "von-neumann",
            Self::Hex => "hex",
            Self::Elementary => "elementary",
            Self::Moost => "moost",
        }
    }

    /// Parse a topology tag; see the [`FromStr`] impl for accepted spellings.
    pub fn parse(tag: &str) -> Result<Self, ConfigError> {
        tag.parse()
    }
}

impl FromStr for Topology {
    type Err = ConfigError;

    /// Accepts the canonical tags plus the spellings found in rule files
    /// (`"von neumann"`, `"von_neumann"`, `"vn"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moore" => Ok(Self::Moore),
            "von-neumann" | "von neumann" | "von_neumann" | "vonneumann" | "vn" => {
                Ok(Self::VonNeumann)
            }
            "hex" | "hexagonal" => Ok(Self::Hex),
            "elementary" => Ok(Self::Elementary),
            "moost" => Ok(Self::Moost),
            _ => Err(ConfigError::UnknownTopology { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
