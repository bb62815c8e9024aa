//! Cursor over the characters of a document.

use std::fmt;

const LINE_BREAK: char = '\n';

/// Position of a character in a document.
///
/// `line` and `column` are 1-based, `index` counts characters (Unicode scalar
/// values, not bytes) from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Number of characters preceding this location.
    pub index: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl Location {
    /// Creates a location from its raw parts.
    pub const fn new(index: usize, line: usize, column: usize) -> Self {
        Location { index, line, column }
    }

    /// Location of the first character of a document.
    pub const fn start() -> Self {
        Location { index: 0, line: 1, column: 1 }
    }

    /// Moves the location past a single character.
    pub fn advance(&mut self, ch: char) {
        self.index += 1;

        if ch == LINE_BREAK {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Returns the location after `ch`, leaving `self` untouched.
    pub fn advanced(mut self, ch: char) -> Self {
        self.advance(ch);
        self
    }

    /// Translates a location relative to a substring starting at `self` into
    /// the coordinates of the enclosing document.
    ///
    /// Both lines and columns start at 1, so the relative location `1:1` maps
    /// onto `self`.
    pub fn nested(&self, relative: Location) -> Location {
        Location {
            index: self.index + relative.index,
            line: self.line + relative.line - 1,
            column: self.column + relative.column - 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
