// tokscan/src/token.rs

//! Tokens and source positions.

use serde::Serialize;
use std::fmt;

/// A location in the scanner's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number in characters (1-based)
    pub column: usize,
    /// Bytes consumed since the scanner was created
    pub offset: usize,
}

impl Position {
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Advance past `bytes`, counting characters rather than bytes for the column.
    pub(crate) fn advance(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.offset += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else if b & 0xC0 != 0x80 {
                self.column += 1;
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A maximal run of non-whitespace characters read from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The raw text of the token
    pub text: String,
    /// Where the first character of the token was read
    pub position: Position,
}

impl Token {
    pub fn new(text: String, position: Position) -> Self {
        Self { text, position }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}
