//! # Core Grid Logic
//!
//! Everything between "raw text" and "printable lines". Knows nothing about
//! where the text came from or where the lines go.
//!
//! ```text
//!   text ──▶ parse() ──▶ ParseOutcome ──▶ build_grid() ──▶ Grid ──▶ render() ──▶ lines
//!                │                              │
//!                └──────── Warning ─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`]: `Record` and the `Warning` taxonomy
//! - [`parse`]: tolerant line parser
//! - [`grid`]: the dense glyph surface and `build_grid()`
//! - [`render`]: grid → lines, and the JSON `Report`
//! - [`config`]: config file / env / CLI resolution

pub mod config;
pub mod grid;
pub mod parse;
pub mod record;
pub mod render;

pub use grid::{build_grid, Grid, GridError};
pub use parse::{parse, parse_line, LineOutcome, ParseOutcome};
pub use record::{Record, Warning};
pub use render::{render, Report};
