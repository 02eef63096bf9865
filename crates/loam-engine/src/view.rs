//! Renderer adapter.
//!
//! The engine never draws. A [`GridView`] exposes the grid's shape and a
//! per-cell `(state, colour)` accessor, and [`GridView::render`] drives any
//! [`Canvas`] with rectangle and present calls, skipping background
//! (black) cells.

use crate::grid::Grid;
use loam_core::{Rgb, StateId};
use loam_rule::RuleSet;

/// Drawing primitives a display surface provides.
pub trait Canvas {
    /// Clear the whole surface to `color`.
    fn clear(&mut self, color: Rgb);

    /// Fill the cell at column `x`, row `y`.
    fn fill_cell(&mut self, x: u32, y: u32, color: Rgb);

    /// Show the finished frame.
    fn present(&mut self);
}

/// One cell, resolved for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// Cell state.
    pub state: StateId,
    /// Colour of `state`.
    pub color: Rgb,
}

/// A grid paired with the rule set that colours it.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    grid: &'a Grid,
    rules: &'a RuleSet,
}

impl<'a> GridView<'a> {
    /// Pair `grid` with `rules`.
    pub fn new(grid: &'a Grid, rules: &'a RuleSet) -> Self {
        Self { grid, rules }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// State and colour at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<(StateId, Rgb)> {
        self.grid
            .get(x, y)
            .map(|s| (s, self.rules.color_of(s)))
    }

    /// Every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = CellView> + 'a {
        let width = self.grid.width();
        let rules = self.rules;
        self.grid
            .cells()
            .iter()
            .enumerate()
            .map(move |(i, &state)| CellView {
                x: (i % width as usize) as u32,
                y: (i / width as usize) as u32,
                state,
                color: rules.color_of(state),
            })
    }

    /// Cells whose colour is not the background.
    pub fn visible(&self) -> impl Iterator<Item = CellView> + 'a {
        self.iter().filter(|c| !c.color.is_background())
    }

    /// Draw one frame: clear to black, fill visible cells, present.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear(Rgb::BLACK);
        for cell in self.visible() {
            canvas.fill_cell(cell.x, cell.y, cell.color);
        }
        canvas.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use loam_rule::presets;

    #[derive(Default)]
    struct Recorder {
        clears: Vec<Rgb>,
        fills: Vec<(u32, u32, Rgb)>,
        frames: usize,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, color: Rgb) {
            self.clears.push(color);
        }
        fn fill_cell(&mut self, x: u32, y: u32, color: Rgb) {
            self.fills.push((x, y, color));
        }
        fn present(&mut self) {
            self.frames += 1;
        }
    }

    fn glider_corner() -> (Grid, RuleSet) {
        let rules = presets::life();
        let cells = [0, 1, 0, 0, 0, 1, 1, 1, 1]
            .into_iter()
            .map(StateId)
            .collect();
        let grid = Grid::from_cells(&GridConfig::new(3, 3, true), cells, &rules).unwrap();
        (grid, rules)
    }

    #[test]
    fn get_pairs_state_and_colour() {
        let (grid, rules) = glider_corner();
        let view = grid.view(&rules);
        assert_eq!(view.width(), 3);
        assert_eq!(view.height(), 3);
        assert_eq!(view.get(1, 0), Some((StateId(1), Rgb::new(0, 200, 0))));
        assert_eq!(view.get(0, 0), Some((StateId(0), Rgb::BLACK)));
        assert_eq!(view.get(3, 0), None);
    }

    #[test]
    fn iter_is_row_major() {
        let (grid, rules) = glider_corner();
        let cells: Vec<_> = grid.view(&rules).iter().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!((cells[5].x, cells[5].y), (2, 1));
        assert_eq!(cells[5].state, StateId(1));
    }

    #[test]
    fn render_skips_background() {
        let (grid, rules) = glider_corner();
        let mut canvas = Recorder::default();
        grid.view(&rules).render(&mut canvas);
        assert_eq!(canvas.clears, vec![Rgb::BLACK]);
        assert_eq!(canvas.frames, 1);
        let positions: Vec<_> = canvas.fills.iter().map(|&(x, y, _)| (x, y)).collect();
        assert_eq!(positions, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }
}
