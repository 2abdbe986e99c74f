//! # Rendering Pipeline
//!
//! Straight line, with an early exit on each fatal failure:
//!
//! ```text
//! fetch ──▶ parse ──▶ (no records? abort) ──▶ build_grid ──▶ render ──▶ print
//!   │                        │                       │
//!   └─ FetchError            └─ EmptyResult          └─ GridError
//! ```
//!
//! Line-level problems never abort. They are collected as `Warning`s,
//! logged, and reported next to the output.

use std::fmt;
use std::io::{self, Write};

use log::{info, warn};

use crate::core::{build_grid, parse, render, Grid, GridError, Warning};
use crate::fetch::{DocumentSource, FetchError};

#[derive(Debug)]
pub enum PipelineError {
    /// The document could not be retrieved.
    Fetch(FetchError),
    /// Parsing left no valid record to draw.
    EmptyResult,
    /// The document asks for a grid too large to allocate.
    Grid(GridError),
    /// Writing the output failed.
    Output(io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Fetch(e) => write!(f, "error fetching document: {e}"),
            PipelineError::EmptyResult => {
                write!(f, "no valid character data found in the document")
            }
            PipelineError::Grid(e) => write!(f, "error building grid: {e}"),
            PipelineError::Output(e) => write!(f, "error writing output: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<FetchError> for PipelineError {
    fn from(e: FetchError) -> Self {
        PipelineError::Fetch(e)
    }
}

impl From<GridError> for PipelineError {
    fn from(e: GridError) -> Self {
        PipelineError::Grid(e)
    }
}

impl From<io::Error> for PipelineError {
    fn from(e: io::Error) -> Self {
        PipelineError::Output(e)
    }
}

/// A finished grid plus everything that was skipped on the way.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub grid: Grid,
    /// Parse warnings first, then bounds warnings, each in input order.
    pub warnings: Vec<Warning>,
}

impl Rendering {
    pub fn lines(&self) -> Vec<String> {
        render(&self.grid)
    }
}

/// Runs the pipeline up to a built grid without printing the grid.
///
/// Warnings go to `err` as soon as they are known, even when the run later
/// aborts.
pub async fn render_document<E: Write>(
    source: &dyn DocumentSource,
    err: &mut E,
) -> Result<Rendering, PipelineError> {
    build_rendering(source, |warning| writeln!(err, "Warning: {warning}")).await
}

/// Fetches, parses, builds and prints a character grid.
///
/// Warnings are reported as in `render_document`. Grid rows go to `out` only
/// once the whole pipeline has succeeded, so a fatal error leaves `out`
/// untouched.
pub async fn print_character_grid<O: Write, E: Write>(
    source: &dyn DocumentSource,
    out: &mut O,
    err: &mut E,
) -> Result<Rendering, PipelineError> {
    let rendering = render_document(source, err).await?;

    for line in rendering.lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(rendering)
}

/// fetch → parse → build_grid, handing every warning to `on_warning`.
async fn build_rendering<F>(
    source: &dyn DocumentSource,
    mut on_warning: F,
) -> Result<Rendering, PipelineError>
where
    F: FnMut(&Warning) -> io::Result<()>,
{
    let text = source.fetch().await?;

    let parsed = parse(&text);
    for warning in &parsed.warnings {
        warn!("{warning}");
        on_warning(warning)?;
    }
    if parsed.records.is_empty() {
        warn!("No valid records in document from {}", source.name());
        return Err(PipelineError::EmptyResult);
    }

    let (grid, bounds_warnings) = build_grid(&parsed.records, parsed.max_x, parsed.max_y)?;
    for warning in &bounds_warnings {
        on_warning(warning)?;
    }
    let mut warnings = parsed.warnings;
    warnings.extend(bounds_warnings);

    info!(
        "Rendered {}x{} grid from {} ({} records, {} warnings)",
        grid.width(),
        grid.height(),
        source.name(),
        parsed.records.len(),
        warnings.len()
    );
    Ok(Rendering { grid, warnings })
}
