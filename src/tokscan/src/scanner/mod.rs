// tokscan/src/scanner/mod.rs

//! Whitespace-delimited token scanning.
//!
//! Two modes are available:
//! 1. Word mode (`scan`): newlines are ordinary whitespace
//! 2. Line mode (`scan_line`): a newline ends the scan, and the line must end
//!    after the last destination is filled

pub mod lexer;
pub mod scanner;

pub use lexer::is_space;
pub use scanner::{ScanOptions, Scanner, Tokens, DEFAULT_MAX_TOKEN_LEN};

use crate::outcome::ScanOutcome;
use crate::slot::Destination;
use std::io::BufRead;

/// Fill `destinations` from `reader`, treating newlines as whitespace.
///
/// The byte that terminates the last token is left in the reader, so a later
/// call picks up exactly where this one stopped.
///
/// # Examples
///
/// ```
/// let mut input = "hello world".as_bytes();
/// let mut first = String::new();
/// let mut second = String::new();
/// let outcome = tokscan::scan(&mut input, &mut [&mut first, &mut second]);
/// assert_eq!(outcome.filled, 2);
/// assert!(outcome.error.is_none());
/// assert_eq!(first, "hello");
/// ```
pub fn scan<R: BufRead>(reader: &mut R, destinations: &mut [&mut dyn Destination]) -> ScanOutcome {
    Scanner::new(reader).scan(destinations)
}

/// Fill `destinations` from a single line of `reader`.
pub fn scan_line<R: BufRead>(
    reader: &mut R,
    destinations: &mut [&mut dyn Destination],
) -> ScanOutcome {
    Scanner::new(reader).scan_line(destinations)
}

/// Convenience function to scan from a string.
pub fn scan_str(input: &str, destinations: &mut [&mut dyn Destination]) -> ScanOutcome {
    scan(&mut input.as_bytes(), destinations)
}

/// Convenience function to scan one line from a string.
pub fn scan_line_str(input: &str, destinations: &mut [&mut dyn Destination]) -> ScanOutcome {
    scan_line(&mut input.as_bytes(), destinations)
}
