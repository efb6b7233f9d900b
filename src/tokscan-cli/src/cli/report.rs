// tokscan-cli/src/cli/report.rs

use serde::Serialize;
use tokscan::ScanOutcome;

/// What one run scanned, in a form that can be printed or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub filled: usize,
    pub values: Vec<String>,
    pub error: Option<ErrorReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
}

impl Report {
    pub fn new(values: Vec<String>, outcome: ScanOutcome) -> Self {
        let error = outcome.error.map(|e| ErrorReport {
            kind: e.category(),
            message: e.to_string(),
        });
        Self {
            filled: outcome.filled,
            values,
            error,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// `Number of args: 2 String 1: hello String 2: world`
    pub fn summary_line(&self) -> String {
        let mut line = format!("Number of args: {}", self.filled);
        for (i, value) in self.values.iter().enumerate() {
            line.push_str(&format!(" String {}: {}", i + 1, value));
        }
        line
    }
}
