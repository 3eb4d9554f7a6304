//! Source location tracking

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source position (line, column, and character offset within the line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Character offset from the start of the line
    pub offset: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            line,
            column,
            offset: column.saturating_sub(1),
        }
    }

    /// Create a new position with offset
    #[inline]
    pub fn with_offset(
        line: usize,
        column: usize,
        offset: usize,
    ) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Position of the character at `offset` on `line`
    #[inline]
    pub fn at(
        line: usize,
        offset: usize,
    ) -> Self {
        Self {
            line,
            column: offset + 1,
            offset,
        }
    }

    /// Create a dummy position
    #[inline]
    pub fn dummy() -> Self {
        Self {
            line: 0,
            column: 0,
            offset: 0,
        }
    }

    /// Check if this is a dummy position
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }

    /// Shift this position right by `columns` characters on the same line
    #[inline]
    pub fn shifted(
        self,
        columns: usize,
    ) -> Self {
        Self {
            line: self.line,
            column: self.column + columns,
            offset: self.offset + columns,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
