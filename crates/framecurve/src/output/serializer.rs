//! Canonical framecurve writer.

use std::io::Write;

use crate::curve::{Comment, Curve, Record};
use crate::dialect::{Dialect, ValueFormat};
use crate::error::{FramecurveError, Result};
use crate::validation::Validator;

/// Line terminator used for every emitted line, regardless of platform.
pub const LINE_ENDING: &str = "\r\n";

/// Serializer configuration.
#[derive(Debug, Clone, Default)]
pub struct SerializerConfig {
    /// Preamble strings and the dialect used by `validate_and_serialize`.
    pub dialect: Dialect,
    /// How correlation values are rendered.
    pub value_format: ValueFormat,
}

/// Writes a [`Curve`] as canonical framecurve text.
///
/// The preamble is all-or-nothing: a curve whose first two entries are
/// comments containing the specification URL and the column header is
/// written as is. Any other curve gets both preamble lines prepended, even
/// when it already starts with one of them.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    config: SerializerConfig,
}

impl Serializer {
    /// Create a serializer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with custom configuration.
    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// True when `curve` already opens with the URL comment followed by the
    /// column header comment.
    pub fn has_preamble(&self, curve: &Curve) -> bool {
        let dialect = &self.config.dialect;
        let comment_at = |idx: usize| curve.get(idx).and_then(Record::as_comment);

        match (comment_at(0), comment_at(1)) {
            (Some(first), Some(second)) => {
                first.text().contains(dialect.spec_url.as_str())
                    && second.text().contains(dialect.column_header.as_str())
            }
            _ => false,
        }
    }

    /// The two canonical preamble comments.
    pub fn preamble(&self) -> [Comment; 2] {
        [
            Comment::new(self.config.dialect.spec_url.as_str()),
            Comment::new(self.config.dialect.column_header.as_str()),
        ]
    }

    /// Every output line, without terminators.
    pub fn lines(&self, curve: &Curve) -> Vec<String> {
        let mut lines = Vec::with_capacity(curve.len() + 2);

        if !self.has_preamble(curve) {
            tracing::debug!("prepending preamble");
            lines.extend(self.preamble().iter().map(Comment::to_line));
        }
        lines.extend(
            curve
                .iter()
                .map(|record| record.to_line(self.config.value_format)),
        );

        lines
    }

    /// Write `curve` to `sink`, CRLF-terminated.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn serialize<W: Write + ?Sized>(&self, sink: &mut W, curve: &Curve) -> Result<()> {
        for line in self.lines(curve) {
            sink.write_all(line.as_bytes())?;
            sink.write_all(LINE_ENDING.as_bytes())?;
        }
        sink.flush()?;
        Ok(())
    }

    /// Render `curve` to a string.
    pub fn serialize_to_string(&self, curve: &Curve) -> String {
        let mut out = String::new();
        for line in self.lines(curve) {
            out.push_str(&line);
            out.push_str(LINE_ENDING);
        }
        out
    }

    /// Validate `curve` first and write it only if it has no errors.
    ///
    /// Nothing is written on failure. Warnings never block.
    pub fn validate_and_serialize<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        curve: &Curve,
    ) -> Result<()> {
        self.ensure_valid(curve)?;
        self.serialize(sink, curve)
    }

    /// String form of [`Serializer::validate_and_serialize`].
    pub fn validate_and_serialize_to_string(&self, curve: &Curve) -> Result<String> {
        self.ensure_valid(curve)?;
        Ok(self.serialize_to_string(curve))
    }

    fn ensure_valid(&self, curve: &Curve) -> Result<()> {
        let report = Validator::with_dialect(self.config.dialect.clone()).validate_curve(curve);
        if !report.ok() {
            return Err(FramecurveError::Malformed(format!(
                "Will not serialize a malformed curve: {}",
                report.errors.join(", ")
            )));
        }
        Ok(())
    }
}
