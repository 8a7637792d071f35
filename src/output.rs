//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::calculator::CalcError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a successful add operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AddResult {
    /// The computed sum
    pub sum: i32,
}

impl AddResult {
    /// Render the result based on output mode
    pub fn render(self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.sum),
            OutputMode::Json => render_json(&self),
        }
    }
}

/// A validation failure in machine-readable form
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResult {
    /// Error kind string (`INVALID_ARGUMENT` or `OUT_OF_RANGE`)
    pub kind: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResult {
    /// Render the failure based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                eprintln!("{} {}", "rejected:".red().bold(), self.message);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl From<&CalcError> for ErrorResult {
    fn from(err: &CalcError) -> Self {
        Self {
            kind: err.kind().as_str().to_string(),
            message: err.to_string(),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
