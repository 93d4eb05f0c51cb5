//! Resolved source positions.
//!
//! Offsets throughout this crate are byte offsets into UTF-8 source text, the
//! same unit `&str` indexing uses. Columns are counted in bytes from the start
//! of the line, so a position always satisfies `offset == line_start + column`.

use std::fmt;

/// A zero-based byte offset into source text.
pub type Offset = usize;

/// A line/column pair for a location in source text.
///
/// Lines start at 1, columns start at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    line: usize,
    column: usize,
}

impl Position {
    /// Create a position from a 1-based line and a 0-based byte column.
    ///
    /// Lines are 1-based; a `line` of 0 panics in debug builds and is
    /// treated as line 1 in release builds.
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line >= 1, "line numbers start at 1, got {line}");
        Self {
            line: line.max(1),
            column,
        }
    }

    /// The 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 0-based byte column within the line.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
