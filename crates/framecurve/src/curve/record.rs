//! The two kinds of line a framecurve document is made of.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dialect::ValueFormat;

/// A comment line.
///
/// A comment is a line starting with a hashmark (`#`). The stored text does
/// not include the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
    text: String,
}

impl Comment {
    /// Create a comment. `text` should not include the leading `#`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The comment text as stored.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render as a single framecurve line, without the line terminator.
    ///
    /// Embedded CR and LF characters are dropped so the comment cannot
    /// break out of its line. A blank comment renders as `"# "`, which reads
    /// back as a bare `#` and is rejected by the parser.
    pub fn to_line(&self) -> String {
        let body: String = self
            .text
            .chars()
            .filter(|c| *c != '\r' && *c != '\n')
            .collect();
        format!("# {}", body)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// A frame correlation record: one correlation point in time.
///
/// On disk it is `[destination_frame_integer][TAB][source_frame_float]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameCorrelation {
    /// Destination frame number.
    pub at: i64,
    /// Fractional source frame used at `at`.
    pub value: f64,
}

impl FrameCorrelation {
    pub fn new(at: i64, value: f64) -> Self {
        Self { at, value }
    }

    /// Render as a single framecurve line, without the line terminator.
    pub fn to_line(&self, format: ValueFormat) -> String {
        format!("{}\t{}", self.at, format.format(self.value))
    }
}

impl fmt::Display for FrameCorrelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line(ValueFormat::Fixed))
    }
}

/// One entry of a [`Curve`](super::Curve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Comment(Comment),
    Correlation(FrameCorrelation),
}

impl Record {
    pub fn is_comment(&self) -> bool {
        matches!(self, Record::Comment(_))
    }

    pub fn is_correlation(&self) -> bool {
        matches!(self, Record::Correlation(_))
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Record::Comment(c) => Some(c),
            Record::Correlation(_) => None,
        }
    }

    pub fn as_correlation(&self) -> Option<&FrameCorrelation> {
        match self {
            Record::Correlation(fc) => Some(fc),
            Record::Comment(_) => None,
        }
    }

    /// Render as a single framecurve line, without the line terminator.
    pub fn to_line(&self, format: ValueFormat) -> String {
        match self {
            Record::Comment(c) => c.to_line(),
            Record::Correlation(fc) => fc.to_line(format),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line(ValueFormat::Fixed))
    }
}

impl From<Comment> for Record {
    fn from(comment: Comment) -> Self {
        Record::Comment(comment)
    }
}

impl From<FrameCorrelation> for Record {
    fn from(correlation: FrameCorrelation) -> Self {
        Record::Correlation(correlation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_keeps_newlines_in_memory() {
        let c = Comment::new("Very interesting \r\n comment");
        assert_eq!(c.text(), "Very interesting \r\n comment");
        assert_eq!(c.to_string(), "# Very interesting  comment");
    }

    #[test]
    fn test_blank_comment_renders_bare_hash() {
        assert_eq!(Comment::new("").to_line(), "# ");
        assert_eq!(Comment::new("\r\n").to_line(), "# ");
    }

    #[test]
    fn test_comment_equality() {
        assert_eq!(Comment::new("a"), Comment::new("a"));
        assert_ne!(Comment::new("a"), Comment::new("b"));
    }

    #[test]
    fn test_correlation_equality() {
        let a = FrameCorrelation::new(1, 2.0);
        assert_eq!(a, FrameCorrelation::new(1, 2.0));
        assert_ne!(a, FrameCorrelation::new(1, 2.5));
        assert_ne!(a, FrameCorrelation::new(2, 2.0));
    }

    #[test]
    fn test_correlation_display() {
        assert_eq!(FrameCorrelation::new(1, 2.4).to_string(), "1\t2.40000");
        assert_eq!(
            FrameCorrelation::new(1, 2.4).to_line(ValueFormat::Trimmed),
            "1\t2.4"
        );
    }

    #[test]
    fn test_record_accessors() {
        let r: Record = Comment::new("x").into();
        assert!(r.is_comment());
        assert!(r.as_correlation().is_none());
        assert_eq!(r.as_comment().map(Comment::text), Some("x"));

        let r: Record = FrameCorrelation::new(3, 1.5).into();
        assert!(r.is_correlation());
        assert_eq!(r.as_correlation().map(|fc| fc.at), Some(3));
    }

    #[test]
    fn test_record_json_is_tagged() {
        let r = Record::Correlation(FrameCorrelation::new(2, 4.5));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["kind"], "correlation");
        assert_eq!(json["at"], 2);

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
