// tokscan/src/lib.rs

//! Read whitespace-separated tokens into typed, caller-owned destinations.
//!
//! This library provides functionality to:
//! - Fill a fixed list of destinations from any `BufRead`, stopping at the
//!   first conversion failure or at end of input
//! - Report how many destinations were filled alongside the error that
//!   stopped the scan
//! - Scan line by line, where a newline ends the input for that call
//! - Iterate over tokens with their line, column and byte offset
//!
//! Any `T: FromStr` is a destination, so strings, numbers and addresses can
//! be mixed in one call:
//!
//! ```
//! let mut name = String::new();
//! let mut age: u32 = 0;
//! let outcome = tokscan::scan!(&mut "ada 36".as_bytes(), name, age);
//! assert!(outcome.is_complete());
//! assert_eq!((name.as_str(), age), ("ada", 36));
//! ```
//!
//! # Stream position
//!
//! The scanner stops in front of the whitespace that ends the last token, and
//! after an error it stops wherever reading stopped. A token rejected by a
//! failed conversion has already been consumed and is not pushed back.

pub mod error;
pub mod outcome;
pub mod scanner;
pub mod slot;
pub mod token;

pub use error::{Result, ScanError};
pub use outcome::ScanOutcome;
pub use scanner::{scan, scan_line, scan_line_str, scan_str, ScanOptions, Scanner};
pub use slot::Destination;
pub use token::{Position, Token};

/// Scan into a list of places, newlines counting as whitespace.
///
/// `scan!(reader, a, b)` is shorthand for
/// `scan(reader, &mut [&mut a, &mut b])`.
#[macro_export]
macro_rules! scan {
    ($reader:expr $(, $dest:expr)* $(,)?) => {{
        let destinations: &mut [&mut dyn $crate::Destination] = &mut [$(&mut $dest),*];
        $crate::scan($reader, destinations)
    }};
}

/// Line-mode counterpart of [`scan!`].
#[macro_export]
macro_rules! scan_line {
    ($reader:expr $(, $dest:expr)* $(,)?) => {{
        let destinations: &mut [&mut dyn $crate::Destination] = &mut [$(&mut $dest),*];
        $crate::scan_line($reader, destinations)
    }};
}
