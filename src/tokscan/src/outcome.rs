// tokscan/src/outcome.rs

//! The result of one scan call.

use crate::error::{Result, ScanError};

/// How many destinations a scan filled and what, if anything, stopped it.
///
/// `filled` is always within `0..=destinations.len()`. `error` is `None`
/// only when every destination was filled (and, in line mode, the line ended
/// right after the last token).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ScanOutcome {
    pub filled: usize,
    pub error: Option<ScanError>,
}

impl ScanOutcome {
    pub fn complete(filled: usize) -> Self {
        Self {
            filled,
            error: None,
        }
    }

    pub fn partial(filled: usize, error: ScanError) -> Self {
        Self {
            filled,
            error: Some(error),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }

    /// Collapse into a `Result`, dropping the partial count on failure.
    pub fn into_result(self) -> Result<usize> {
        match self.error {
            None => Ok(self.filled),
            Some(err) => Err(err),
        }
    }
}
