//! # Glyph Grid
//!
//! Dense row-major surface of glyphs. Sized once from the parsed maxima and
//! never resized.

use std::fmt;

use log::{debug, warn};

use super::record::{Record, Warning};

/// Glyph every cell starts with.
pub const BLANK: &str = " ";

/// Largest number of cells a grid may hold (a 1024 x 1024 picture).
pub const MAX_CELLS: usize = 1 << 20;

/// The grid a document asks for cannot be allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `width * height` overflows or exceeds `MAX_CELLS`.
    TooLarge { width: usize, height: usize },
    /// Memory for the cells could not be reserved.
    Alloc { cells: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::TooLarge { width, height } => write!(
                f,
                "grid of {width}x{height} cells exceeds the limit of {MAX_CELLS} cells"
            ),
            GridError::Alloc { cells } => write!(f, "could not allocate a grid of {cells} cells"),
        }
    }
}

impl std::error::Error for GridError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<String>,
}

impl Grid {
    /// A `width` x `height` grid of blanks, or `GridError` when that many
    /// cells overflow, exceed `MAX_CELLS`, or cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let count = width
            .checked_mul(height)
            .filter(|&count| count <= MAX_CELLS)
            .ok_or(GridError::TooLarge { width, height })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| GridError::Alloc { cells: count })?;
        cells.resize(count, BLANK.to_string());

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index for `(x, y)`, or `None` outside the grid.
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<&str> {
        self.index(x, y).map(|i| self.cells[i].as_str())
    }

    /// Writes `glyph` at `(x, y)`. Returns false, leaving the grid untouched,
    /// when the position is outside the grid.
    pub fn set(&mut self, x: i64, y: i64, glyph: &str) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = glyph.to_string();
                true
            }
            None => false,
        }
    }

    /// Rows top to bottom, each a slice of glyphs left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        // chunks() panics on 0, and a zero-width grid has no cells anyway.
        self.cells.chunks(self.width.max(1))
    }
}

/// Allocates a `(max_x + 1) x (max_y + 1)` grid and applies `records` in
/// order, so the last record for a position wins.
///
/// The bounds are expected to come from the same records, which makes an
/// out-of-bounds write impossible today. Every write is still checked: if
/// sizing and population ever drift apart the record is reported and skipped.
///
/// Fails without touching any record when the requested size is too large.
pub fn build_grid(
    records: &[Record],
    max_x: i64,
    max_y: i64,
) -> Result<(Grid, Vec<Warning>), GridError> {
    let width = usize::try_from(max_x.saturating_add(1)).unwrap_or(0);
    let height = usize::try_from(max_y.saturating_add(1)).unwrap_or(0);
    let mut grid = Grid::new(width, height)?;
    let mut warnings = Vec::new();

    for record in records {
        if !grid.set(record.x, record.y, &record.character) {
            let warning = Warning::OutOfBounds {
                character: record.character.clone(),
                x: record.x,
                y: record.y,
            };
            warn!("{warning}");
            warnings.push(warning);
        }
    }

    debug!("Built {}x{} grid from {} records", width, height, records.len());
    Ok((grid, warnings))
}
