//! Findings produced by individual checks.

use serde::{Deserialize, Serialize};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A recommendation; the curve is still valid.
    Warning,
    /// A violation of the format.
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// One problem found in a curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Severity level.
    pub severity: Severity,
    /// Name of the check that produced this finding.
    pub check: String,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    pub fn error(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            check: check.into(),
            message: message.into(),
        }
    }

    pub fn warning(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            check: check.into(),
            message: message.into(),
        }
    }
}
