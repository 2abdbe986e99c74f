//! Glyphgrid library exports: parse `glyph,x,y` documents and render them
//! as character grids.

use clap::ValueEnum;

pub mod core;
pub mod fetch;
pub mod pipeline;

#[cfg(test)]
pub mod test_support;

pub use pipeline::{print_character_grid, render_document, PipelineError, Rendering};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grid rows on stdout, warnings on stderr
    #[default]
    Text,
    /// One JSON report with rows and warnings
    Json,
}
