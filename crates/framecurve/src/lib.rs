//! Framecurve: reading, validating and writing variable-speed timewarps.
//!
//! A framecurve is a plain text table of correlation points. Each record maps
//! an integer destination frame to a fractional source frame; comment lines
//! carry a two-line preamble and free text. See
//! <http://framecurve.org/> for the format.
//!
//! # Example
//!
//! ```
//! use framecurve::{Curve, FrameCorrelation, Record};
//!
//! let curve: Curve = vec![
//!     Record::from(FrameCorrelation::new(1, 1.0)),
//!     Record::from(FrameCorrelation::new(2, 1.5)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = framecurve::validate_curve(&curve);
//! assert!(report.ok());
//!
//! let text = framecurve::serialize_str(&curve);
//! assert_eq!(framecurve::parse_str(&text).unwrap().frames().count(), 2);
//! ```

pub mod curve;
pub mod dialect;
pub mod error;
pub mod input;
pub mod output;
pub mod repr;
pub mod validation;

mod framecurve;

pub use crate::framecurve::{
    parse, parse_file, parse_str, serialize, serialize_str, validate, validate_and_serialize,
    validate_curve, validate_file, validate_str, Framecurve,
};
pub use curve::{Comment, Curve, FrameCorrelation, Record};
pub use dialect::{Dialect, FramecurveConfig, ValueFormat, COLUMN_HEADER, EXTENSION, SPEC_URL};
pub use error::{FramecurveError, Result};
pub use input::{FileSource, LineSource, Parser, ReaderSource, TextSource};
pub use output::{Serializer, SerializerConfig};
pub use validation::{Finding, Severity, ValidationReport, ValidationRequest, Validator};
