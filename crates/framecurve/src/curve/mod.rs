//! In-memory model of a framecurve document.

mod document;
mod record;

pub use document::Curve;
pub use record::{Comment, FrameCorrelation, Record};
