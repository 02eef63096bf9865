//! Test fixtures and a recording canvas for Loam development.
//!
//! Grids are written as rows of raw state numbers so scenarios read like
//! the patterns they describe; [`RecordingCanvas`] captures every draw
//! call for assertions on rendering.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use loam_core::Rgb;
use loam_engine::Canvas;

/// One recorded [`Canvas`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Rgb),
    Fill { x: u32, y: u32, color: Rgb },
    Present,
}

/// A [`Canvas`] that remembers what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells filled since the last clear, in draw order.
    pub fn fills(&self) -> Vec<(u32, u32, Rgb)> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear(_)))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match *c {
                DrawCall::Fill { x, y, color } => Some((x, y, color)),
                _ => None,
            })
            .collect()
    }

    /// Number of presented frames.
    pub fn frames(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Present))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_cell(&mut self, x: u32, y: u32, color: Rgb) {
        self.calls.push(DrawCall::Fill { x, y, color });
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}
