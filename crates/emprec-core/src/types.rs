//! Canonical record types for emprec.
//!
//! Every adapter, whatever its source format, ends up producing these types
//! through the [`normalizer`](crate::normalizer). Nothing downstream of the
//! normalizer ever sees a format-specific representation.

use serde::{Deserialize, Serialize};

/// One entry in a person's work-history notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub year: i64,
    pub working_months: i64,
    pub satisfied: bool,
}

/// A canonical employee record.
///
/// `notes` and `hobbies` are always present; a source that omits them yields
/// empty vectors. `id` is not checked for uniqueness across a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: i64,
    pub id: i64,
    pub salary: i64,
    pub working_years: Vec<i64>,
    pub is_working: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

/// Ordered records of one source file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCollection {
    pub records: Vec<Record>,
}

impl RecordCollection {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Index of the first record that differs from `other`, or the shorter
    /// length when one collection is a prefix of the other. `None` when equal.
    pub fn first_difference(&self, other: &RecordCollection) -> Option<usize> {
        let common = self.records.len().min(other.records.len());
        (0..common)
            .find(|&i| self.records[i] != other.records[i])
            .or_else(|| (self.records.len() != other.records.len()).then_some(common))
    }
}

impl From<Vec<Record>> for RecordCollection {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
