//! Error handling for the insight engine.

use serde::Serialize;
use std::fmt;

/// Specialized error type for insight-engine operations
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    /// Error parsing an ingested report document
    #[error("Ingest error: {0}")]
    Ingest(String),
}

/// Result type for insight-engine operations
pub type Result<T> = std::result::Result<T, InsightError>;

/// A validation problem with a single reported value.
///
/// Issues are collected and surfaced alongside the findings rather than
/// aborting the evaluation; a partially valid report still yields
/// partial insights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueIssue {
    /// External name of the biomarker as it appeared in the input
    pub name: String,
    /// Offending value, rendered for display
    pub value: String,
    /// Why the value was rejected
    pub reason: String,
}

impl ValueIssue {
    /// Create a new issue for a named value
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValueIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.value, self.reason)
    }
}
