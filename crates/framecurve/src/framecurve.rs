//! Main Framecurve struct and public API.

use std::io::Write;
use std::path::Path;

use crate::curve::Curve;
use crate::dialect::FramecurveConfig;
use crate::error::Result;
use crate::input::{FileSource, LineSource, Parser};
use crate::output::{Serializer, SerializerConfig};
use crate::validation::{ValidationReport, ValidationRequest, Validator};

/// Parser, validator and serializer sharing one configuration.
pub struct Framecurve {
    config: FramecurveConfig,
    parser: Parser,
    validator: Validator,
    serializer: Serializer,
}

impl Framecurve {
    /// Create an instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(FramecurveConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: FramecurveConfig) -> Self {
        let validator = Validator::with_dialect(config.dialect.clone());
        let serializer = Serializer::with_config(SerializerConfig {
            dialect: config.dialect.clone(),
            value_format: config.value_format,
        });

        Self {
            config,
            parser: Parser::new(),
            validator,
            serializer,
        }
    }

    pub fn config(&self) -> &FramecurveConfig {
        &self.config
    }

    pub fn parse<S: LineSource + ?Sized>(&self, source: &mut S) -> Result<Curve> {
        self.parser.parse(source)
    }

    pub fn parse_str(&self, text: &str) -> Result<Curve> {
        self.parser.parse_str(text)
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Curve> {
        self.parser.parse_file(path)
    }

    pub fn validate(&self, request: ValidationRequest<'_>) -> Result<ValidationReport> {
        self.validator.validate(request)
    }

    pub fn validate_curve(&self, curve: &Curve) -> ValidationReport {
        self.validator.validate_curve(curve)
    }

    pub fn validate_str(&self, text: &str) -> Result<ValidationReport> {
        self.validator.validate_str(text)
    }

    /// Validate a file on disk. The extension check sees the file's name.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<ValidationReport> {
        let mut source = FileSource::open(path)?;
        self.validator.validate_source(&mut source)
    }

    pub fn serialize<W: Write + ?Sized>(&self, sink: &mut W, curve: &Curve) -> Result<()> {
        self.serializer.serialize(sink, curve)
    }

    pub fn serialize_str(&self, curve: &Curve) -> String {
        self.serializer.serialize_to_string(curve)
    }

    pub fn validate_and_serialize<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        curve: &Curve,
    ) -> Result<()> {
        self.serializer.validate_and_serialize(sink, curve)
    }
}

impl Default for Framecurve {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a line source with the default configuration.
pub fn parse<S: LineSource + ?Sized>(source: &mut S) -> Result<Curve> {
    Parser::new().parse(source)
}

/// Parse a string containing a framecurve.
pub fn parse_str(text: &str) -> Result<Curve> {
    Parser::new().parse_str(text)
}

/// Open and parse a framecurve file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Curve> {
    Parser::new().parse_file(path)
}

/// Validate a line source or a curve.
pub fn validate(request: ValidationRequest<'_>) -> Result<ValidationReport> {
    Validator::new().validate(request)
}

/// Validate a string containing a framecurve.
///
/// ```
/// let report = framecurve::validate_str("10\t23.2").unwrap();
/// assert!(report.ok());
/// assert!(!report.perfect());
/// assert_eq!(report.warnings.len(), 2);
/// ```
pub fn validate_str(text: &str) -> Result<ValidationReport> {
    Validator::new().validate_str(text)
}

/// Validate a framecurve file on disk.
pub fn validate_file(path: impl AsRef<Path>) -> Result<ValidationReport> {
    Framecurve::new().validate_file(path)
}

/// Validate an in-memory curve.
pub fn validate_curve(curve: &Curve) -> ValidationReport {
    Validator::new().validate_curve(curve)
}

/// Write `curve` to `sink`, prepending the preamble when it is missing.
pub fn serialize<W: Write + ?Sized>(sink: &mut W, curve: &Curve) -> Result<()> {
    Serializer::new().serialize(sink, curve)
}

/// Render `curve` to a string.
pub fn serialize_str(curve: &Curve) -> String {
    Serializer::new().serialize_to_string(curve)
}

/// Validate `curve` and write it only if it has no errors.
pub fn validate_and_serialize<W: Write + ?Sized>(sink: &mut W, curve: &Curve) -> Result<()> {
    Serializer::new().validate_and_serialize(sink, curve)
}
