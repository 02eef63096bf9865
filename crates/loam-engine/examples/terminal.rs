//! Loam in a terminal: Brian's Brain on a small torus, drawn as text.
//!
//! Demonstrates:
//!   1. Picking a preset rule set
//!   2. Building a GridConfig and a randomly seeded Automaton
//!   3. Implementing Canvas for a display surface
//!   4. Stepping and rendering each generation
//!
//! Run with:
//!   cargo run --example terminal [seed]

use loam_core::Rgb;
use loam_engine::{Automaton, Canvas, GridConfig};
use loam_rule::presets;
use log::info;

const WIDTH: u32 = 48;
const HEIGHT: u32 = 20;
const GENERATIONS: u64 = 12;

// ─── A character canvas ─────────────────────────────────────────

struct TextCanvas {
    width: usize,
    cells: Vec<char>,
}

impl TextCanvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as usize,
            cells: vec![' '; (width * height) as usize],
        }
    }

    fn glyph(color: Rgb) -> char {
        match color {
            Rgb::WHITE => '#',
            Rgb::BLACK => ' ',
            _ => '+',
        }
    }
}

impl Canvas for TextCanvas {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Self::glyph(color));
    }

    fn fill_cell(&mut self, x: u32, y: u32, color: Rgb) {
        self.cells[y as usize * self.width + x as usize] = Self::glyph(color);
    }

    fn present(&mut self) {
        for row in self.cells.chunks(self.width) {
            println!("|{}|", row.iter().collect::<String>());
        }
        println!();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 42,
    };
    let config = GridConfig::new(WIDTH, HEIGHT, true).with_seed(seed);
    let mut automaton = Automaton::new(&config, presets::brians_brain())?;
    let mut canvas = TextCanvas::new(WIDTH, HEIGHT);

    automaton.view().render(&mut canvas);
    for _ in 0..GENERATIONS {
        automaton.step();
        info!("generation {}", automaton.generation());
        automaton.view().render(&mut canvas);
    }

    let census = automaton.grid().census(automaton.rules().state_count());
    info!("final census: {census:?}");
    Ok(())
}
