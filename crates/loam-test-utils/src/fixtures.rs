//! Grid and rule-set fixtures.
//!
//! - [`grid_from_rows`] builds a grid from rows of raw state numbers.
//! - [`rows_of`] turns a grid back into rows for comparison.
//! - [`single_seed`] is a one-row grid with a single live cell, the usual
//!   start for elementary rules.

use loam_core::StateId;
use loam_engine::{Grid, GridConfig};
use loam_rule::RuleSet;

/// Build a grid from `rows` (all the same length).
///
/// # Panics
///
/// If the rows are ragged or name a state `rules` does not define.
pub fn grid_from_rows(rows: &[&[u32]], loop_edges: bool, rules: &RuleSet) -> Grid {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    assert!(
        rows.iter().all(|r| r.len() == width as usize),
        "ragged fixture rows"
    );
    let cells = rows
        .iter()
        .flat_map(|r| r.iter().copied().map(StateId))
        .collect();
    Grid::from_cells(&GridConfig::new(width, height, loop_edges), cells, rules)
        .expect("fixture grid must be valid")
}

/// The grid's cells as rows of raw state numbers.
pub fn rows_of(grid: &Grid) -> Vec<Vec<u32>> {
    grid.rows()
        .map(|r| r.iter().map(|s| s.0).collect())
        .collect()
}

/// A `width x 1` looping grid with state 1 at `x` and 0 elsewhere.
pub fn single_seed(width: u32, x: u32, rules: &RuleSet) -> Grid {
    let cells = (0..width)
        .map(|i| StateId(u32::from(i == x)))
        .collect();
    Grid::from_cells(&GridConfig::new(width, 1, true), cells, rules)
        .expect("fixture grid must be valid")
}

/// Indices of the non-zero cells of a one-row grid.
pub fn live_columns(grid: &Grid) -> Vec<u32> {
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.0 != 0)
        .map(|(i, _)| i as u32)
        .collect()
}
