//! Fetched rows and row sets.
//!
//! A [`Row`] is an immutable named-column record; a [`RowSet`] is an
//! ordered sequence of rows sharing one column header. Both are snapshots
//! owned by whoever requested them and are never write-back targets.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::datatype::Value;
use crate::error::MappingError;
use crate::vocabulary::Column;

// ------------- Row -------------
#[derive(Clone, Debug)]
pub struct Row {
    columns: Arc<Vec<String>>,
    values: Vec<Value>,
}

impl Row {
    pub(crate) fn new(columns: Arc<Vec<String>>, values: Vec<Value>) -> Row {
        debug_assert_eq!(columns.len(), values.len());
        Row { columns, values }
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn get(&self, column: impl Column) -> Option<&Value> {
        self.get_named(column.column())
    }
    /// Column names compare case-insensitively, the way the backing
    /// engine treats them.
    pub fn get_named(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(column))
            .map(|position| &self.values[position])
    }
    /// The explicit form of [`Row::get`] for callers that treat an absent
    /// column as a schema fault rather than missing data.
    pub fn require(&self, column: impl Column) -> std::result::Result<&Value, MappingError> {
        let name = column.column();
        self.get_named(name).ok_or_else(|| MappingError {
            column: name.to_owned(),
        })
    }
    /// Lossless view as a plain name→value mapping, in column order.
    pub fn to_map(&self) -> IndexMap<String, Value> {
        self.columns
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect()
    }
    /// Rebuilds a row from a plain mapping. The mapping's insertion order
    /// becomes the column order; equality does not depend on it.
    pub fn from_map(map: IndexMap<String, Value>) -> Row {
        let (columns, values) = map.into_iter().unzip();
        Row {
            columns: Arc::new(columns),
            values,
        }
    }
}

// Rows are equal when they carry the same name→value mapping, regardless
// of column order.
impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .columns
                .iter()
                .zip(&self.values)
                .all(|(column, value)| {
                    other
                        .get_named(column)
                        .is_some_and(|theirs| theirs == value)
                })
    }
}

// ------------- RowSet -------------
/// Zero rows is a successful, empty set; only a failed fetch is an error,
/// and that is expressed through `Result`, never through the set itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
    pub(crate) fn push(&mut self, row: Row) {
        self.rows.push(row);
    }
}

impl IntoIterator for RowSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<Row> for RowSet {
    fn from_iter<I: IntoIterator<Item = Row>>(rows: I) -> RowSet {
        RowSet {
            rows: rows.into_iter().collect(),
        }
    }
}
