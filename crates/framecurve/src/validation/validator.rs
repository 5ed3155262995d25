//! Runs the check table and collects a report.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::dialect::Dialect;
use crate::error::{FramecurveError, Result};
use crate::input::{LineSource, Parser, TextSource};

use super::checks::{default_checks, Check};
use super::finding::{Finding, Severity};

/// Outcome of validating one curve.
///
/// Validation problems are data, not errors: inspect `errors` and
/// `warnings` rather than matching on a `Result`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Name of the validated file, when known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filename: Option<String>,
    /// Violations of the format, in check order.
    pub errors: Vec<String>,
    /// Recommendations, in check order.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// No errors. Warnings are allowed.
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// No errors and no warnings.
    pub fn perfect(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// File a finding under errors or warnings.
    pub fn record(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding.message),
            Severity::Warning => self.warnings.push(finding.message),
        }
    }

    /// "N errors, M warnings".
    pub fn summary(&self) -> String {
        format!(
            "{} errors, {} warnings",
            self.errors.len(),
            self.warnings.len()
        )
    }
}

/// What to validate: a line source, a curve, or (as a caller mistake)
/// neither.
///
/// When both are given the source is parsed and the curve ignored.
#[derive(Default)]
pub struct ValidationRequest<'a> {
    source: Option<&'a mut dyn LineSource>,
    curve: Option<&'a Curve>,
}

impl<'a> ValidationRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: &'a mut dyn LineSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_curve(mut self, curve: &'a Curve) -> Self {
        self.curve = Some(curve);
        self
    }
}

/// Validates framecurves against a fixed, ordered table of checks.
///
/// ```
/// use framecurve::{Comment, Curve, FrameCorrelation, Validator};
///
/// let curve = Curve::from_records(vec![
///     Comment::new("...").into(),
///     FrameCorrelation::new(-22, 4.5).into(),
/// ]);
/// let report = Validator::new().validate_curve(&curve);
/// assert!(!report.ok());
/// assert!(!report.errors.is_empty());
/// assert!(!report.warnings.is_empty());
/// ```
pub struct Validator {
    dialect: Dialect,
    parser: Parser,
    checks: Vec<Box<dyn Check + Send + Sync>>,
}

impl Validator {
    /// Create a validator with the default dialect.
    pub fn new() -> Self {
        Self::with_dialect(Dialect::default())
    }

    /// Create a validator checking against a custom dialect.
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            parser: Parser::new(),
            checks: default_checks(),
        }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Run every check against `curve`. Checks never short-circuit.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn validate_curve(&self, curve: &Curve) -> ValidationReport {
        let mut report = ValidationReport {
            filename: curve.filename.clone(),
            ..ValidationReport::default()
        };

        for check in &self.checks {
            let findings = check.check(curve, &self.dialect);
            tracing::trace!(check = check.name(), findings = findings.len(), "ran check");
            for finding in findings {
                report.record(finding);
            }
        }

        tracing::debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validated framecurve"
        );
        report
    }

    /// Parse `source` and validate the result.
    ///
    /// A malformed line becomes the report's single error and no checks
    /// run. I/O failures while reading are returned as errors.
    pub fn validate_source<S: LineSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<ValidationReport> {
        let filename = source
            .name()
            .and_then(|name| Path::new(name).file_name())
            .map(|base| base.to_string_lossy().into_owned());
        match self.parser.parse(source) {
            Ok(curve) => Ok(self.validate_curve(&curve)),
            Err(FramecurveError::Malformed(msg)) => Ok(ValidationReport {
                filename,
                errors: vec![msg],
                warnings: Vec::new(),
            }),
            Err(e) => Err(e),
        }
    }

    /// Validate a string.
    ///
    /// ```
    /// use framecurve::Validator;
    ///
    /// let report = Validator::new().validate_str("foobar").unwrap();
    /// assert_eq!(report.errors, vec!["Malformed line 1: 'foobar'"]);
    /// assert!(report.warnings.is_empty());
    /// ```
    pub fn validate_str(&self, text: &str) -> Result<ValidationReport> {
        self.validate_source(&mut TextSource::new(text))
    }

    /// Validate whatever the request carries.
    pub fn validate(&self, request: ValidationRequest<'_>) -> Result<ValidationReport> {
        match (request.source, request.curve) {
            (Some(source), _) => self.validate_source(source),
            (None, Some(curve)) => Ok(self.validate_curve(curve)),
            (None, None) => Err(FramecurveError::invalid_argument(
                "Must supply either a line source or a curve",
            )),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Comment, FrameCorrelation, Record};
    use crate::dialect::{COLUMN_HEADER, SPEC_URL};

    fn curve_of(records: Vec<Record>) -> Curve {
        Curve::from_records(records)
    }

    #[test]
    fn test_malformed_input() {
        let report = Validator::new().validate_str("foobar").unwrap();
        assert_eq!(report.errors, vec!["Malformed line 1: 'foobar'"]);
        assert!(report.warnings.is_empty());
        assert!(!report.ok());
    }

    #[test]
    fn test_good_input_has_no_errors() {
        let report = Validator::new()
            .validate_str("# Nice framecurve\r\n1\t146.0")
            .unwrap();
        assert!(report.errors.is_empty());
        assert!(report.ok());
        assert!(!report.perfect());
    }

    #[test]
    fn test_empty_text() {
        let report = Validator::new().validate_str("").unwrap();
        assert_eq!(
            report.errors,
            vec![
                "The framecurve did not contain any lines at all",
                "The framecurve did not contain any frame correlation records",
            ]
        );
    }

    #[test]
    fn test_comments_only() {
        let c = curve_of(vec![Comment::new("Only text").into()]);
        let report = Validator::new().validate_curve(&c);
        assert_eq!(
            report.errors,
            vec!["The framecurve did not contain any frame correlation records"]
        );
    }

    #[test]
    fn test_duplicate_frames() {
        let c = curve_of(vec![
            FrameCorrelation::new(10, 123.4).into(),
            FrameCorrelation::new(10, 123.4).into(),
        ]);
        let report = Validator::new().validate_curve(&c);
        assert_eq!(
            report.errors,
            vec!["The framecurve contains the same frame (10) twice or more (2 times)"]
        );
    }

    #[test]
    fn test_negative_source_and_destination() {
        let c = curve_of(vec![
            FrameCorrelation::new(-10, 123.4).into(),
            FrameCorrelation::new(1, -345.67).into(),
        ]);
        let report = Validator::new().validate_curve(&c);
        assert!(!report.ok());
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("at_frame value (-10)"));
        assert!(report.errors[1].contains("use_frame_of_source value (-345.67000)"));
    }

    #[test]
    fn test_errors_follow_check_order() {
        let c = curve_of(vec![
            FrameCorrelation::new(5, 1.0).into(),
            FrameCorrelation::new(-1, 1.0).into(),
            FrameCorrelation::new(5, 1.0).into(),
        ])
        .with_filename("bad.txt");
        let report = Validator::new().validate_curve(&c);

        assert_eq!(report.errors.len(), 4);
        assert!(report.errors[0].contains("double extension"));
        assert!(report.errors[1].contains("same frame (5)"));
        assert!(report.errors[2].contains("out of order"));
        assert!(report.errors[3].contains("The line 2 "));
        assert_eq!(report.filename.as_deref(), Some("bad.txt"));
    }

    #[test]
    fn test_missing_preamble_url_is_warning_only() {
        let c = curve_of(vec![FrameCorrelation::new(10, 123.4).into()]);
        let report = Validator::new().validate_curve(&c);
        assert!(report.ok());
        assert!(!report.perfect());
        assert!(report.warnings.contains(&format!(
            "It is recommended that a framecurve starts with a comment with the specification URL, {}",
            SPEC_URL
        )));
    }

    #[test]
    fn test_missing_column_header_is_warning_only() {
        let c = curve_of(vec![
            Comment::new(SPEC_URL).into(),
            FrameCorrelation::new(10, 123.4).into(),
        ]);
        let report = Validator::new().validate_curve(&c);
        assert!(report.ok());
        assert_eq!(
            report.warnings,
            vec!["It is recommended for the second comment to provide a column header"]
        );
    }

    #[test]
    fn test_perfect_curve() {
        let c = curve_of(vec![
            Comment::new(SPEC_URL).into(),
            Comment::new(COLUMN_HEADER).into(),
            FrameCorrelation::new(10, 123.4).into(),
        ]);
        let report = Validator::new().validate_curve(&c);
        assert!(report.perfect());
        assert_eq!(report.summary(), "0 errors, 0 warnings");
    }

    #[test]
    fn test_unversioned_url_with_custom_dialect() {
        let c = curve_of(vec![
            Comment::new("http://framecurve.org/specification").into(),
            Comment::new(COLUMN_HEADER).into(),
            FrameCorrelation::new(1, 1.0).into(),
        ]);
        assert!(!Validator::new().validate_curve(&c).perfect());

        let dialect = Dialect::default().with_spec_url("http://framecurve.org/specification");
        assert!(Validator::with_dialect(dialect).validate_curve(&c).perfect());
    }

    #[test]
    fn test_request_without_input_is_invalid_argument() {
        let err = Validator::new().validate(ValidationRequest::new()).unwrap_err();
        assert!(matches!(err, FramecurveError::InvalidArgument(_)));
    }

    #[test]
    fn test_request_prefers_source() {
        let curve = curve_of(vec![FrameCorrelation::new(1, 1.0).into()]);
        let mut source = TextSource::new("garbage");
        let report = Validator::new()
            .validate(
                ValidationRequest::new()
                    .with_curve(&curve)
                    .with_source(&mut source),
            )
            .unwrap();
        assert_eq!(report.errors, vec!["Malformed line 1: 'garbage'"]);

        let report = Validator::new()
            .validate(ValidationRequest::new().with_curve(&curve))
            .unwrap();
        assert!(report.ok());
    }

    #[test]
    fn test_source_name_reaches_extension_check() {
        let mut source = TextSource::new("# This might have been\r\n1\t123.45")
            .with_name("/somewhere/wrong.extension");
        let report = Validator::new().validate_source(&mut source).unwrap();
        assert_eq!(
            report.errors,
            vec!["The framecurve file must have the .framecurve.txt double extension, but was named 'wrong.extension'"]
        );
    }
}
