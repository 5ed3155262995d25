//! Structural checks run against a parsed curve.

use std::collections::BTreeMap;

use crate::curve::{Curve, Record};
use crate::dialect::Dialect;
use crate::repr;

use super::finding::Finding;

/// A single structural check.
pub trait Check {
    /// Short identifier, recorded on every finding.
    fn name(&self) -> &'static str;

    /// Inspect the curve and return any findings.
    fn check(&self, curve: &Curve, dialect: &Dialect) -> Vec<Finding>;
}

/// The curve has at least one line.
pub struct AtLeastOneLine;

impl Check for AtLeastOneLine {
    fn name(&self) -> &'static str {
        "at_least_one_line"
    }

    fn check(&self, curve: &Curve, _dialect: &Dialect) -> Vec<Finding> {
        if curve.is_empty() {
            return vec![Finding::error(
                self.name(),
                "The framecurve did not contain any lines at all",
            )];
        }
        Vec::new()
    }
}

/// The curve has at least one frame correlation.
pub struct AtLeastOneCorrelation;

impl Check for AtLeastOneCorrelation {
    fn name(&self) -> &'static str {
        "at_least_one_correlation"
    }

    fn check(&self, curve: &Curve, _dialect: &Dialect) -> Vec<Finding> {
        if curve.frames().next().is_none() {
            return vec![Finding::error(
                self.name(),
                "The framecurve did not contain any frame correlation records",
            )];
        }
        Vec::new()
    }
}

/// A named curve carries the double extension. Unnamed curves (read from
/// memory or a stream) are not checked.
pub struct FilenameExtension;

impl Check for FilenameExtension {
    fn name(&self) -> &'static str {
        "filename_extension"
    }

    fn check(&self, curve: &Curve, dialect: &Dialect) -> Vec<Finding> {
        match &curve.filename {
            Some(filename) if !filename.ends_with(&dialect.extension) => vec![Finding::error(
                self.name(),
                format!(
                    "The framecurve file must have the {} double extension, but was named {}",
                    dialect.extension,
                    repr::quote(filename)
                ),
            )],
            _ => Vec::new(),
        }
    }
}

/// No destination frame appears twice.
pub struct NoDuplicateFrames;

impl Check for NoDuplicateFrames {
    fn name(&self) -> &'static str {
        "no_duplicate_frames"
    }

    fn check(&self, curve: &Curve, _dialect: &Dialect) -> Vec<Finding> {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for fc in curve.frames() {
            *counts.entry(fc.at).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(at, count)| {
                Finding::error(
                    self.name(),
                    format!(
                        "The framecurve contains the same frame ({}) twice or more ({} times)",
                        at, count
                    ),
                )
            })
            .collect()
    }
}

/// Destination frames are recorded in ascending order.
pub struct ProperSequencing;

impl Check for ProperSequencing {
    fn name(&self) -> &'static str {
        "proper_sequencing"
    }

    fn check(&self, curve: &Curve, _dialect: &Dialect) -> Vec<Finding> {
        let frame_numbers: Vec<i64> = curve.frames().map(|fc| fc.at).collect();
        let mut proper_sequence = frame_numbers.clone();
        proper_sequence.sort_unstable();

        if frame_numbers != proper_sequence {
            return vec![Finding::error(
                self.name(),
                format!(
                    "The frame sequencing is out of order (expected {:?} but got {:?}). \
                     The framecurve spec mandates that frames are recorded sequentially",
                    proper_sequence, frame_numbers
                ),
            )];
        }
        Vec::new()
    }
}

/// Destination frames are >= 1 and source frames >= 0. Only the first
/// failing condition is reported per record.
pub struct NonNegativeFrames;

impl Check for NonNegativeFrames {
    fn name(&self) -> &'static str {
        "non_negative_frames"
    }

    fn check(&self, curve: &Curve, _dialect: &Dialect) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (idx, record) in curve.iter().enumerate() {
            let Record::Correlation(fc) = record else {
                continue;
            };
            let line_no = idx + 1;

            if fc.at < 1 {
                findings.push(Finding::error(
                    self.name(),
                    format!(
                        "The line {} had it's at_frame value ({}) below 1. \
                         The spec mandates at_frame >= 1.",
                        line_no, fc.at
                    ),
                ));
            } else if fc.value < 0.0 {
                findings.push(Finding::error(
                    self.name(),
                    format!(
                        "The line {} had a use_frame_of_source value ({:.5}) below 0. \
                         The spec mandates use_frame_of_source >= 0.",
                        line_no, fc.value
                    ),
                ));
            }
        }

        findings
    }
}

/// The first line is a comment naming the specification URL.
pub struct PreambleUrl;

impl Check for PreambleUrl {
    fn name(&self) -> &'static str {
        "preamble_url"
    }

    fn check(&self, curve: &Curve, dialect: &Dialect) -> Vec<Finding> {
        let has_url = curve
            .get(0)
            .and_then(Record::as_comment)
            .is_some_and(|c| c.text().contains(dialect.spec_url.as_str()));

        if has_url {
            return Vec::new();
        }
        vec![Finding::warning(
            self.name(),
            format!(
                "It is recommended that a framecurve starts with a comment with the specification URL, {}",
                dialect.spec_url
            ),
        )]
    }
}

/// The second line is a comment holding the column header.
pub struct ColumnHeader;

impl Check for ColumnHeader {
    fn name(&self) -> &'static str {
        "column_header"
    }

    fn check(&self, curve: &Curve, dialect: &Dialect) -> Vec<Finding> {
        let has_header = curve
            .get(1)
            .and_then(Record::as_comment)
            .is_some_and(|c| c.text().trim() == dialect.column_header);

        if has_header {
            return Vec::new();
        }
        vec![Finding::warning(
            self.name(),
            "It is recommended for the second comment to provide a column header",
        )]
    }
}

/// The full set of checks, in reporting order.
pub fn default_checks() -> Vec<Box<dyn Check + Send + Sync>> {
    vec![
        Box::new(AtLeastOneLine),
        Box::new(AtLeastOneCorrelation),
        Box::new(FilenameExtension),
        Box::new(NoDuplicateFrames),
        Box::new(ProperSequencing),
        Box::new(NonNegativeFrames),
        Box::new(PreambleUrl),
        Box::new(ColumnHeader),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Comment, FrameCorrelation};
    use crate::dialect::SPEC_URL;

    fn frames(pairs: &[(i64, f64)]) -> Curve {
        pairs
            .iter()
            .map(|&(at, value)| Record::from(FrameCorrelation::new(at, value)))
            .collect()
    }

    fn messages(findings: Vec<Finding>) -> Vec<String> {
        findings.into_iter().map(|f| f.message).collect()
    }

    #[test]
    fn test_empty_curve() {
        let d = Dialect::default();
        let c = Curve::new();
        assert_eq!(AtLeastOneLine.check(&c, &d).len(), 1);
        assert_eq!(AtLeastOneCorrelation.check(&c, &d).len(), 1);
        assert!(NoDuplicateFrames.check(&c, &d).is_empty());
        assert!(ProperSequencing.check(&c, &d).is_empty());
    }

    #[test]
    fn test_filename_extension() {
        let d = Dialect::default();
        let good = frames(&[(1, 1.0)]).with_filename("shot.framecurve.txt");
        let bad = frames(&[(1, 1.0)]).with_filename("wrong.extension");
        let upper = frames(&[(1, 1.0)]).with_filename("shot.FRAMECURVE.TXT");

        assert!(FilenameExtension.check(&good, &d).is_empty());
        assert!(FilenameExtension.check(&frames(&[(1, 1.0)]), &d).is_empty());
        assert_eq!(
            messages(FilenameExtension.check(&bad, &d)),
            vec!["The framecurve file must have the .framecurve.txt double extension, but was named 'wrong.extension'"]
        );
        assert_eq!(FilenameExtension.check(&upper, &d).len(), 1);
    }

    #[test]
    fn test_duplicates_one_finding_per_value() {
        let d = Dialect::default();
        let c = frames(&[(10, 1.0), (3, 1.0), (10, 2.0), (3, 2.0), (10, 3.0), (4, 1.0)]);
        assert_eq!(
            messages(NoDuplicateFrames.check(&c, &d)),
            vec![
                "The framecurve contains the same frame (3) twice or more (2 times)",
                "The framecurve contains the same frame (10) twice or more (3 times)",
            ]
        );
    }

    #[test]
    fn test_sequencing_message() {
        let d = Dialect::default();
        let c = frames(&[(10, 123.4), (1, 123.4)]);
        assert_eq!(
            messages(ProperSequencing.check(&c, &d)),
            vec!["The frame sequencing is out of order (expected [1, 10] but got [10, 1]). \
                  The framecurve spec mandates that frames are recorded sequentially"]
        );
    }

    #[test]
    fn test_non_negative_first_condition_only() {
        let d = Dialect::default();
        let c = frames(&[(-10, 123.4), (1, -345.67), (0, -1.0)]);
        assert_eq!(
            messages(NonNegativeFrames.check(&c, &d)),
            vec![
                "The line 1 had it's at_frame value (-10) below 1. The spec mandates at_frame >= 1.",
                "The line 2 had a use_frame_of_source value (-345.67000) below 0. The spec mandates use_frame_of_source >= 0.",
                "The line 3 had it's at_frame value (0) below 1. The spec mandates at_frame >= 1.",
            ]
        );
    }

    #[test]
    fn test_non_negative_counts_comment_lines() {
        let d = Dialect::default();
        let c = Curve::from_records(vec![
            Comment::new("head").into(),
            Comment::new("more").into(),
            FrameCorrelation::new(-1, 2.0).into(),
        ]);
        let found = NonNegativeFrames.check(&c, &d);
        assert!(found[0].message.starts_with("The line 3 "));
    }

    #[test]
    fn test_preamble_checks() {
        let d = Dialect::default();
        let good = Curve::from_records(vec![
            Comment::new(SPEC_URL).into(),
            Comment::new("at_frame\tuse_frame_of_source").into(),
            FrameCorrelation::new(1, 1.0).into(),
        ]);
        assert!(PreambleUrl.check(&good, &d).is_empty());
        assert!(ColumnHeader.check(&good, &d).is_empty());

        let only_url = Curve::from_records(vec![Comment::new(SPEC_URL).into()]);
        assert!(PreambleUrl.check(&only_url, &d).is_empty());
        assert_eq!(ColumnHeader.check(&only_url, &d).len(), 1);

        let no_comments = frames(&[(1, 1.0), (2, 1.0)]);
        assert_eq!(PreambleUrl.check(&no_comments, &d).len(), 1);
        assert_eq!(ColumnHeader.check(&no_comments, &d).len(), 1);
    }

    #[test]
    fn test_default_checks_order() {
        let names: Vec<&str> = default_checks().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "at_least_one_line",
                "at_least_one_correlation",
                "filename_extension",
                "no_duplicate_frames",
                "proper_sequencing",
                "non_negative_frames",
                "preamble_url",
                "column_header",
            ]
        );
    }
}
