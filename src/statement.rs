//! Criteria maps and the statement builder.
//!
//! A [`Criteria`] is an insertion-ordered column→value map; rendering
//! follows that order exactly, so equal criteria always yield
//! byte-identical statement text and binding lists. Values are never
//! interpolated into the text: every value travels as a `?n` binding.

use std::fmt;

use indexmap::IndexMap;

use crate::datatype::Value;
use crate::error::ValidationError;
use crate::vocabulary::{Column, Source, column_named};

// ------------- Operation -------------
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

impl Operation {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Operation::Select)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Operation::Select => "SELECT",
            Operation::Insert => "INSERT",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

// ------------- Criteria -------------
/// Ordered filter map. Empty criteria mean "no filter"; entries are
/// combined by AND. Keys are vocabulary tags, so an undefined column
/// cannot be referenced; text-keyed callers go through [`Criteria::push_named`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Criteria {
    filters: IndexMap<&'static str, Value>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with(mut self, column: impl Column, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }
    /// Repeated pushes of the same column keep its original position and
    /// replace the value.
    pub fn push(&mut self, column: impl Column, value: impl Into<Value>) {
        self.filters.insert(column.column(), value.into());
    }
    /// Boundary for text arriving from outside the vocabulary, such as a
    /// filter typed into a grid header.
    pub fn push_named(
        &mut self,
        column: &str,
        value: impl Into<Value>,
    ) -> std::result::Result<(), ValidationError> {
        match column_named(column) {
            Some(canonical) => {
                self.filters.insert(canonical, value.into());
                Ok(())
            }
            None => Err(ValidationError::UnknownColumn(column.to_owned())),
        }
    }
    pub fn len(&self) -> usize {
        self.filters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.filters.iter().map(|(column, value)| (*column, value))
    }
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.filters.values()
    }
}

// ------------- Statement -------------
/// Rendered query text plus its ordered bindings, deterministically
/// derived from an operation and criteria. Building never fails; shapes
/// the store would reject (a mutation with no criteria) are refused by
/// the record builder before a statement is ever built.
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    text: String,
    bindings: Vec<Value>,
}

impl Statement {
    pub fn build(operation: Operation, source: Source, criteria: &Criteria) -> Statement {
        let text = match operation {
            Operation::Select => select_text(source, criteria),
            Operation::Insert => insert_text(source, criteria),
            Operation::Update => update_text(source, criteria),
            Operation::Delete => delete_text(source, criteria),
        };
        Statement {
            text,
            bindings: criteria.values().cloned().collect(),
        }
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn bindings(&self) -> &[Value] {
        &self.bindings
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn predicate(criteria: &Criteria) -> String {
    criteria
        .iter()
        .enumerate()
        .map(|(position, (column, _))| format!("{} = ?{}", column, position + 1))
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn select_text(source: Source, criteria: &Criteria) -> String {
    if criteria.is_empty() {
        format!("SELECT * FROM {}", source.table())
    } else {
        format!("SELECT * FROM {} WHERE {}", source.table(), predicate(criteria))
    }
}

fn insert_text(source: Source, criteria: &Criteria) -> String {
    let columns = criteria
        .iter()
        .map(|(column, _)| column)
        .collect::<Vec<_>>()
        .join(", ");
    let marks = (1..=criteria.len())
        .map(|position| format!("?{}", position))
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO {} ({}) VALUES ({})", source.table(), columns, marks)
}

fn update_text(source: Source, criteria: &Criteria) -> String {
    let assignments = criteria
        .iter()
        .enumerate()
        .map(|(position, (column, _))| format!("{} = ?{}", column, position + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {} SET {}", source.table(), assignments)
}

fn delete_text(source: Source, criteria: &Criteria) -> String {
    if criteria.is_empty() {
        format!("DELETE FROM {}", source.table())
    } else {
        format!("DELETE FROM {} WHERE {}", source.table(), predicate(criteria))
    }
}
