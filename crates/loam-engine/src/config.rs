//! Grid configuration and validation.
//!
//! [`GridConfig`] carries the run settings that sit beside a rule set:
//! dimensions, boundary policy, RNG seed, and step parallelism.
//! [`validate()`](GridConfig::validate) checks them before any grid is
//! allocated.

use loam_core::ConfigError;
use loam_space::EdgeBehavior;

/// Settings for constructing a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns. Must be in `1..=i32::MAX`.
    pub width: u32,
    /// Number of rows. Must be in `1..=i32::MAX`.
    pub height: u32,
    /// Toroidal wraparound (`true`) or sentinel edges (`false`).
    pub loop_edges: bool,
    /// Seed for random initialisation.
    pub seed: u64,
    /// Worker threads used by [`Automaton::step`](crate::Automaton::step).
    /// `None` = auto-detect. Default: `Some(1)`.
    pub workers: Option<usize>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            loop_edges: true,
            seed: 0,
            workers: Some(1),
        }
    }
}

impl GridConfig {
    /// Largest accepted dimension: sampling uses signed coordinates.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// A config with the given shape and defaults elsewhere.
    pub fn new(width: u32, height: u32, loop_edges: bool) -> Self {
        Self {
            width,
            height,
            loop_edges,
            ..Self::default()
        }
    }

    /// Set the initialisation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the worker count (`None` = auto-detect).
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Boundary policy implied by `loop_edges`.
    pub fn edge(&self) -> EdgeBehavior {
        EdgeBehavior::from_loop(self.loop_edges)
    }

    /// `width * height`. Only meaningful after [`validate()`](Self::validate).
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Resolve the worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .clamp(1, 64),
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > Self::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        if (self.width as usize)
            .checked_mul(self.height as usize)
            .is_none()
        {
            return Err(ConfigError::CellCountOverflow {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
