//! # Rendering
//!
//! Serializes a `Grid` into printable lines, and wraps lines plus warnings
//! into a `Report` for machine-readable output.

use serde::Serialize;

use super::grid::Grid;
use super::record::Warning;

/// One string per row, top to bottom, glyphs joined with no separator.
pub fn render(grid: &Grid) -> Vec<String> {
    grid.rows().map(|row| row.concat()).collect()
}

/// JSON shape of a finished render (`--format json`).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl Report {
    pub fn new(grid: &Grid, warnings: Vec<Warning>) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            rows: render(grid),
            warnings,
        }
    }
}
