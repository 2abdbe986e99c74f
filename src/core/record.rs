//! # Records and Warnings
//!
//! A `Record` is one accepted `glyph,x,y` line. A `Warning` is one line-level
//! (or write-level) problem that was recovered from. Neither ever aborts a run.

use serde::Serialize;
use std::fmt;

/// One positioned glyph parsed from an input line.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The whole first field, verbatim.
    pub character: String,
    pub x: i64,
    pub y: i64,
}

/// Recovered problems. Each carries the offending line or record.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Field count was not exactly 3.
    MalformedLine { line: String },
    /// x or y was not a base-10 integer.
    InvalidCoordinate { line: String },
    /// The record points outside the allocated grid.
    OutOfBounds { character: String, x: i64, y: i64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MalformedLine { line } => {
                write!(f, "skipping malformed line '{line}' - expected 'char,x,y' format")
            }
            Warning::InvalidCoordinate { line } => {
                write!(f, "skipping line '{line}' - x or y coordinate is not a valid integer")
            }
            Warning::OutOfBounds { character, x, y } => {
                write!(f, "character '{character}' at ({x},{y}) is out of grid bounds, skipping")
            }
        }
    }
}
