//! Reading framecurve text.

mod parser;
mod source;

pub use parser::{parse_line, Parser};
pub use source::{FileSource, LineSource, ReaderSource, TextSource};
