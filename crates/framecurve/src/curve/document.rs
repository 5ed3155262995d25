//! The ordered framecurve document.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::record::{Comment, FrameCorrelation, Record};

/// A framecurve: comments and frame correlations in document order.
///
/// Order is significant and kept exactly as read or constructed. Sequencing
/// of the correlations is checked by the validator, never enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Curve {
    /// Base name of the file this curve was read from, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filename: Option<String>,
    records: Vec<Record>,
}

impl Curve {
    /// Create an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a curve from records, without a filename.
    ///
    /// ```
    /// use framecurve::{Comment, Curve, FrameCorrelation};
    ///
    /// let curve = Curve::from_records(vec![
    ///     Comment::new("...").into(),
    ///     FrameCorrelation::new(2, 4.5).into(),
    /// ]);
    /// assert_eq!(curve.len(), 2);
    /// ```
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            filename: None,
            records,
        }
    }

    /// Set the filename this curve represents.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn push(&mut self, record: impl Into<Record>) {
        self.records.push(record.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Frame correlations only, in document order.
    pub fn frames(&self) -> impl Iterator<Item = &FrameCorrelation> + '_ {
        self.records.iter().filter_map(Record::as_correlation)
    }

    /// Comments only, in document order.
    pub fn comments(&self) -> impl Iterator<Item = &Comment> + '_ {
        self.records.iter().filter_map(Record::as_comment)
    }

    /// Consume the curve, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Two curves are equal when their records are; the filename is metadata.
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Index<usize> for Curve {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl FromIterator<Record> for Curve {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl Extend<Record> for Curve {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Curve {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
