//! Structural validation of framecurves.

mod checks;
mod finding;
mod validator;

pub use checks::{
    default_checks, AtLeastOneCorrelation, AtLeastOneLine, Check, ColumnHeader,
    FilenameExtension, NoDuplicateFrames, NonNegativeFrames, PreambleUrl, ProperSequencing,
};
pub use finding::{Finding, Severity};
pub use validator::{ValidationReport, ValidationRequest, Validator};
