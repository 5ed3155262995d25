//! Line sources the parser reads from.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{FramecurveError, Result};

/// A readable sequence of text lines with an optional name.
///
/// Opening files and decoding bytes belong to the source: invalid UTF-8
/// surfaces as an `io::Error` from [`LineSource::lines`], never as a
/// malformed line.
pub trait LineSource {
    /// Name or path of the source, if it has one.
    fn name(&self) -> Option<&str>;

    /// The lines of the source, in order. Line terminators may or may not be
    /// included; the parser strips trailing whitespace either way.
    fn lines(&mut self) -> Box<dyn Iterator<Item = io::Result<String>> + '_>;
}

/// In-memory text.
#[derive(Debug, Clone)]
pub struct TextSource {
    name: Option<String>,
    text: String,
}

impl TextSource {
    /// Wrap text without a name.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: None,
            text: text.into(),
        }
    }

    /// Attach a name, as if the text had been read from that file.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl LineSource for TextSource {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn lines(&mut self) -> Box<dyn Iterator<Item = io::Result<String>> + '_> {
        Box::new(self.text.lines().map(|l| Ok(l.to_string())))
    }
}

/// Any buffered reader, e.g. stdin or a socket.
#[derive(Debug)]
pub struct ReaderSource<R> {
    name: Option<String>,
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { name: None, reader }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn lines(&mut self) -> Box<dyn Iterator<Item = io::Result<String>> + '_> {
        Box::new((&mut self.reader).lines())
    }
}

/// A file on disk, named by its path.
pub type FileSource = ReaderSource<BufReader<File>>;

impl FileSource {
    /// Open a file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FramecurveError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(ReaderSource::new(BufReader::new(file)).with_name(path.to_string_lossy()))
    }
}
