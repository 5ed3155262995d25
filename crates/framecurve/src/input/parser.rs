//! Line-by-line framecurve parser.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::curve::{Comment, Curve, FrameCorrelation, Record};
use crate::error::{FramecurveError, Result};
use crate::repr;
use super::source::{FileSource, LineSource, TextSource};

/// `#` followed by at least one character.
static COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(.+)$").unwrap()
});

/// `[destination_frame_integer][TAB][source_frame_float]`.
///
/// The float accepts `1`, `-1`, `1.`, `1.0`, `.2` and an optional exponent
/// (`1.2e3`, `1.2e-3`, `1.2E+3`). Digits are ASCII only.
static CORRELATION_RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^(-?[0-9]+)                   # -42 or 42
        \t
        (
            -?
            (?: [0-9]+ (?:\.[0-9]*)?  # 1, 1. or 1.0
              | \.[0-9]+              # .2
            )
            (?: [eE][+-]?[0-9]+ )?    # exponent
        )$",
    )
    .unwrap()
});

/// Parses framecurve text into a [`Curve`].
///
/// Parsing is eager and whole-document: the first malformed line aborts the
/// parse and no partial curve is returned.
#[derive(Debug, Clone, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every line of `source`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse<S: LineSource + ?Sized>(&self, source: &mut S) -> Result<Curve> {
        let filename = source
            .name()
            .and_then(|name| Path::new(name).file_name())
            .map(|base| base.to_string_lossy().into_owned());

        let mut records = Vec::new();
        for (idx, line) in source.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();

            match parse_line(line) {
                Some(record) => records.push(record),
                None => {
                    tracing::debug!(line = idx + 1, "malformed line");
                    return Err(FramecurveError::Malformed(format!(
                        "Malformed line {}: {}",
                        idx + 1,
                        repr::quote(line)
                    )));
                }
            }
        }

        let mut curve = Curve::from_records(records);
        curve.filename = filename;

        tracing::debug!(
            records = curve.len(),
            frames = curve.frames().count(),
            filename = curve.filename.as_deref().unwrap_or("-"),
            "parsed framecurve"
        );

        Ok(curve)
    }

    /// Parse a string.
    ///
    /// ```
    /// use framecurve::{Comment, FrameCorrelation, Parser, Record};
    ///
    /// let curve = Parser::new().parse_str("# A comment\r\n2\t3.5\r\n").unwrap();
    /// assert_eq!(curve[0], Record::Comment(Comment::new("A comment")));
    /// assert_eq!(curve[1], Record::Correlation(FrameCorrelation::new(2, 3.5)));
    /// ```
    pub fn parse_str(&self, text: &str) -> Result<Curve> {
        self.parse(&mut TextSource::new(text))
    }

    /// Open and parse a file. The curve's filename is the file's base name.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Curve> {
        let mut source = FileSource::open(path)?;
        self.parse(&mut source)
    }
}

/// Classify a single line with its trailing whitespace already removed.
///
/// Returns `None` when the line is neither a comment nor a correlation
/// record, including a correlation whose frame number overflows `i64` or
/// whose value overflows to infinity.
pub fn parse_line(line: &str) -> Option<Record> {
    if let Some(caps) = COMMENT.captures(line) {
        return Some(Record::Comment(Comment::new(caps[1].trim())));
    }

    let caps = CORRELATION_RECORD.captures(line)?;
    let at = caps[1].parse::<i64>().ok()?;
    let value = caps[2].parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(Record::Correlation(FrameCorrelation::new(at, value)))
}
