//! Writing framecurve text.

mod serializer;

pub use serializer::{Serializer, SerializerConfig, LINE_ENDING};
