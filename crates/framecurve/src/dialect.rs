//! Format constants and configuration.

use serde::{Deserialize, Serialize};

/// Double extension every framecurve file name must carry.
pub const EXTENSION: &str = ".framecurve.txt";

/// URL of the format specification, written into the preamble.
pub const SPEC_URL: &str = "http://framecurve.org/specification-v1";

/// Column header text, written as the second preamble line.
pub const COLUMN_HEADER: &str = "at_frame\tuse_frame_of_source";

/// The fixed strings a framecurve document is checked against.
///
/// Older documents reference `http://framecurve.org/specification` without a
/// version suffix; point `spec_url` at that string to accept them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    /// Required file name suffix.
    pub extension: String,
    /// URL expected in the first preamble comment.
    pub spec_url: String,
    /// Header expected in the second preamble comment.
    pub column_header: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            extension: EXTENSION.to_string(),
            spec_url: SPEC_URL.to_string(),
            column_header: COLUMN_HEADER.to_string(),
        }
    }
}

impl Dialect {
    /// Use a different specification URL.
    pub fn with_spec_url(mut self, url: impl Into<String>) -> Self {
        self.spec_url = url.into();
        self
    }
}

/// How correlation values are rendered on output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Five decimal places (`123.00000`).
    #[default]
    Fixed,
    /// Shortest form, no trailing zeros or dot (`123`, `2.4`).
    Trimmed,
}

impl ValueFormat {
    /// Render a source frame value.
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Fixed => format!("{:.5}", value),
            // f64's Display never adds trailing zeros or an exponent.
            ValueFormat::Trimmed => format!("{}", value),
        }
    }
}

/// Configuration for the [`crate::Framecurve`] facade.
#[derive(Debug, Clone, Default)]
pub struct FramecurveConfig {
    /// Format constants.
    pub dialect: Dialect,
    /// Value rendering on output.
    pub value_format: ValueFormat,
}
