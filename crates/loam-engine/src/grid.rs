//! One generation of cell states and the step that replaces it.

use crate::automaton::Generations;
use crate::config::GridConfig;
use crate::view::GridView;
use loam_core::{ConfigError, StateId};
use loam_rule::RuleSet;
use loam_space::{sample_into, EdgeBehavior, Lattice, Neighbourhood};
use rayon::prelude::*;
use std::sync::Arc;

/// A `width x height` generation of state identifiers, stored row-major.
///
/// Grids never change shape. Stepping produces a new generation (or
/// overwrites a separate scratch grid); the input is only ever read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
    cells: Vec<StateId>,
}

impl Grid {
    /// Assemble a grid from a validated config and a buffer of matching length.
    pub(crate) fn from_parts(config: &GridConfig, cells: Vec<StateId>) -> Self {
        debug_assert_eq!(cells.len(), config.cell_count());
        Self {
            width: config.width,
            height: config.height,
            edge: config.edge(),
            cells,
        }
    }

    /// A grid with every cell in state 0.
    pub fn blank(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(
            config,
            vec![StateId::SENTINEL; config.cell_count()],
        ))
    }

    /// A grid from an explicit row-major buffer.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid, the buffer length is not
    /// `width * height`, or a cell is not a state of `rules`.
    pub fn from_cells(
        config: &GridConfig,
        cells: Vec<StateId>,
        rules: &RuleSet,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if cells.len() != config.cell_count() {
            return Err(ConfigError::InitialCellsLength {
                expected: config.cell_count(),
                actual: cells.len(),
            });
        }
        let grid = Self::from_parts(config, cells);
        grid.check_states(rules)?;
        Ok(grid)
    }

    /// Confirm every cell names a state of `rules`.
    pub(crate) fn check_states(&self, rules: &RuleSet) -> Result<(), ConfigError> {
        match self.cells.iter().position(|&s| !rules.contains(s)) {
            Some(index) => Err(ConfigError::InitialCellOutOfRange {
                index,
                state: self.cells[index],
                state_count: rules.state_count(),
            }),
            None => Ok(()),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Boundary policy.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Whether the grid wraps toroidally.
    pub fn is_loop(&self) -> bool {
        self.edge.is_loop()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[StateId] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[StateId]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// The in-range cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<StateId> {
        (x < self.width && y < self.height).then(|| self.cell(x as usize, y as usize))
    }

    /// Boundary-resolved lookup: wraps on looping grids, returns
    /// [`StateId::SENTINEL`] outside bounded ones.
    pub fn cell_at(&self, x: i64, y: i64) -> StateId {
        Lattice::cell_at(self, x, y)
    }

    /// Number of cells in `state`.
    pub fn population(&self, state: StateId) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Cell count per state, indexed by state identifier.
    pub fn census(&self, state_count: usize) -> Vec<usize> {
        let mut counts = vec![0; state_count];
        for s in &self.cells {
            if let Some(c) = counts.get_mut(s.index()) {
                *c += 1;
            }
        }
        counts
    }

    /// Renderer-facing view pairing each cell with its colour.
    pub fn view<'a>(&'a self, rules: &'a RuleSet) -> GridView<'a> {
        GridView::new(self, rules)
    }

    /// Lazy, infinite sequence of the generations following this one.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InitialCellOutOfRange`] if a cell is not a state of
    /// `rules`.
    pub fn generations(self, rules: Arc<RuleSet>) -> Result<Generations, ConfigError> {
        self.check_states(&rules)?;
        Ok(Generations::new(self, rules))
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Compute the next generation.
    ///
    /// Every cell is evaluated against this (unchanged) generation, so the
    /// result is independent of evaluation order.
    ///
    /// # Panics
    ///
    /// If a cell is not a state of `rules`. Grids built with
    /// [`from_cells`](Self::from_cells) or [`random`](Self::random) against
    /// the same rule set never are.
    pub fn step(&self, rules: &RuleSet) -> Grid {
        let mut next = Grid {
            width: self.width,
            height: self.height,
            edge: self.edge,
            cells: Vec::new(),
        };
        self.step_into(rules, &mut next);
        next
    }

    /// Compute the next generation into `out`, reusing its allocation.
    ///
    /// `out` takes this grid's shape; its previous contents are never read.
    ///
    /// # Panics
    ///
    /// As [`step`](Self::step).
    pub fn step_into(&self, rules: &RuleSet, out: &mut Grid) {
        debug_assert!(
            self.check_states(rules).is_ok(),
            "grid holds states outside rule set '{}'",
            rules.name()
        );
        out.reshape_like(self);
        self.step_rows(rules, 0, &mut out.cells);
    }

    /// Like [`step_into`](Self::step_into), one row per rayon task.
    ///
    /// Runs on the current rayon pool; wrap the call in
    /// [`ThreadPool::install`](rayon::ThreadPool::install) to bound the
    /// worker count. Rows only read the frozen input and write disjoint
    /// slices of `out`, so the result is bit-identical to the serial step.
    ///
    /// # Panics
    ///
    /// As [`step`](Self::step).
    pub fn step_parallel_into(&self, rules: &RuleSet, out: &mut Grid) {
        debug_assert!(
            self.check_states(rules).is_ok(),
            "grid holds states outside rule set '{}'",
            rules.name()
        );
        out.reshape_like(self);
        let width = self.width as usize;
        out.cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| self.step_rows(rules, y, row));
    }

    /// Evaluate the cells of `out`, which start at row `first_row`.
    fn step_rows(&self, rules: &RuleSet, first_row: usize, out: &mut [StateId]) {
        let width = self.width as usize;
        let topology = rules.topology();
        let offset = first_row * width;
        let mut neighbourhood = Neighbourhood::new();
        for (i, slot) in out.iter_mut().enumerate() {
            let index = offset + i;
            let (x, y) = (index % width, index / width);
            sample_into(self, topology, x, y, &mut neighbourhood);
            *slot = rules.next_state(self.cells[index], &neighbourhood);
        }
    }

    fn reshape_like(&mut self, other: &Grid) {
        self.width = other.width;
        self.height = other.height;
        self.edge = other.edge;
        self.cells.resize(other.cells.len(), StateId::SENTINEL);
    }
}

impl Lattice for Grid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    #[inline]
    fn cell(&self, x: usize, y: usize) -> StateId {
        self.cells[y * self.width as usize + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_rule::presets;

    fn ids(v: &[u32]) -> Vec<StateId> {
        v.iter().copied().map(StateId).collect()
    }

    #[test]
    fn blank_is_all_zero() {
        let g = Grid::blank(&GridConfig::new(4, 3, false)).unwrap();
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.population(StateId(0)), 12);
        assert_eq!(g.rows().count(), 3);
    }

    #[test]
    fn from_cells_validates_length_and_range() {
        let rules = presets::life();
        let cfg = GridConfig::new(2, 2, true);
        assert_eq!(
            Grid::from_cells(&cfg, ids(&[0, 1, 0]), &rules),
            Err(ConfigError::InitialCellsLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Grid::from_cells(&cfg, ids(&[0, 1, 2, 0]), &rules),
            Err(ConfigError::InitialCellOutOfRange {
                index: 2,
                state: StateId(2),
                state_count: 2
            })
        );
        assert!(Grid::from_cells(&cfg, ids(&[0, 1, 1, 0]), &rules).is_ok());
    }

    #[test]
    fn get_and_cell_at() {
        let rules = presets::brians_brain();
        let g = Grid::from_cells(&GridConfig::new(3, 2, true), ids(&[0, 1, 2, 2, 1, 0]), &rules)
            .unwrap();
        assert_eq!(g.get(2, 0), Some(StateId(2)));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.cell_at(-1, 0), StateId(2));
        assert_eq!(g.cell_at(3, 1), StateId(2));
        assert_eq!(g.cell_at(0, -1), StateId(2));
        assert_eq!(g.census(3), vec![2, 2, 2]);
    }

    #[test]
    fn step_into_reshapes_scratch() {
        let rules = presets::life();
        let g = Grid::blank(&GridConfig::new(5, 4, false)).unwrap();
        let mut scratch = Grid::blank(&GridConfig::new(1, 1, true)).unwrap();
        g.step_into(&rules, &mut scratch);
        assert_eq!(scratch.width(), 5);
        assert_eq!(scratch.height(), 4);
        assert!(!scratch.is_loop());
        assert_eq!(scratch, g.step(&rules));
    }

    #[test]
    fn parallel_matches_serial_for_any_pool_size() {
        let rules = presets::life();
        let cfg = GridConfig::new(7, 11, true).with_seed(9);
        let g = Grid::random(&cfg, &rules).unwrap();
        let serial = g.step(&rules);
        for workers in [1, 2, 3, 4, 11, 40] {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .unwrap();
            let mut out = Grid::blank(&GridConfig::new(1, 1, false)).unwrap();
            pool.install(|| g.step_parallel_into(&rules, &mut out));
            assert_eq!(out, serial, "workers = {workers}");
        }
    }

    #[test]
    fn generations_rejects_foreign_states() {
        let grid = Grid::from_cells(
            &GridConfig::new(2, 1, true),
            ids(&[0, 2]),
            &presets::brians_brain(),
        )
        .unwrap();
        assert_eq!(
            grid.generations(Arc::new(presets::life())).err(),
            Some(ConfigError::InitialCellOutOfRange {
                index: 1,
                state: StateId(2),
                state_count: 2,
            })
        );
    }

    #[test]
    #[should_panic]
    fn step_with_foreign_rules_panics() {
        let grid = Grid::from_cells(
            &GridConfig::new(2, 1, true),
            ids(&[0, 2]),
            &presets::brians_brain(),
        )
        .unwrap();
        let _ = grid.step(&presets::life());
    }
}
