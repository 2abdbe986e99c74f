//! # Record Parser
//!
//! Turns raw document text into `Record`s. Parsing is tolerant: every bad
//! line becomes a `Warning` and is skipped, nothing aborts the parse.
//!
//! ```text
//! "A,0,0"     → Record { "A", 0, 0 }
//! "bad_line"  → Warning::MalformedLine
//! "A,x,0"     → Warning::InvalidCoordinate
//! "   "       → (ignored)
//! ```

use log::debug;

use super::record::{Record, Warning};

/// Result of looking at a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Record(Record),
    Warning(Warning),
    /// Empty or whitespace-only. Ignored without a warning.
    Blank,
}

/// Everything `parse` learned from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Accepted records, in input line order.
    pub records: Vec<Record>,
    pub warnings: Vec<Warning>,
    /// Largest x among accepted records (0 if none is larger).
    pub max_x: i64,
    /// Largest y among accepted records (0 if none is larger).
    pub max_y: i64,
}

/// Classifies one line. The line is trimmed before anything else.
pub fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let fields: Vec<&str> = line.split(',').collect();
    let [character, x, y] = fields[..] else {
        return LineOutcome::Warning(Warning::MalformedLine { line: line.to_string() });
    };

    match (x.trim().parse::<i64>(), y.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => LineOutcome::Record(Record {
            character: character.to_string(),
            x,
            y,
        }),
        _ => LineOutcome::Warning(Warning::InvalidCoordinate { line: line.to_string() }),
    }
}

/// Parses a whole document, tracking the running coordinate maxima.
pub fn parse(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for line in text.lines() {
        match parse_line(line) {
            LineOutcome::Record(record) => {
                outcome.max_x = outcome.max_x.max(record.x);
                outcome.max_y = outcome.max_y.max(record.y);
                outcome.records.push(record);
            }
            LineOutcome::Warning(warning) => outcome.warnings.push(warning),
            LineOutcome::Blank => {}
        }
    }

    debug!(
        "Parsed {} records, {} warnings, max=({}, {})",
        outcome.records.len(),
        outcome.warnings.len(),
        outcome.max_x,
        outcome.max_y
    );
    outcome
}
