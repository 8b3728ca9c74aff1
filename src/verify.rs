//! Boundary predicates.
//!
//! Every cross-entity navigation checks one of these before issuing a
//! dependent query, so a chain of lookups never fires on garbage input:
//! an account with a blank activity code simply does not look its
//! activity up. All predicates are pure; none touches the store.

use chrono::NaiveDateTime;

use crate::accessor::{Amount, Element, Key, Time};
use crate::datatype::Value;
use crate::record::{Row, RowSet};
use crate::statement::Criteria;
use crate::vocabulary::{EventDate, Field, Numeric, PrimaryKey, Provider, Source, column_named};

// ------------- Verify -------------
/// Answers "usable and non-sentinel" for values about to be trusted or
/// used to build a new query.
pub struct Verify;

impl Verify {
    pub fn input(value: &str) -> bool {
        !value.trim().is_empty()
    }
    pub fn value(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Text(text) => !text.trim().is_empty(),
            _ => true,
        }
    }
    /// A criteria map worth sending: at least one entry, every value usable.
    pub fn map(criteria: &Criteria) -> bool {
        !criteria.is_empty() && criteria.iter().all(|(_, value)| Self::value(value))
    }
    pub fn row(row: &Row) -> bool {
        !row.is_empty()
    }
    pub fn rows(rows: &RowSet) -> bool {
        !rows.is_empty()
    }
    pub fn element(element: &Element) -> bool {
        !element.get_value().is_empty()
    }
    pub fn key(key: &Key) -> bool {
        key.get_value() > 0
    }
    pub fn amount(amount: &Amount) -> bool {
        amount.get_value() >= 0.0
    }
    pub fn time(time: &Time) -> bool {
        time.get_value() != NaiveDateTime::default()
    }
}

// ------------- Validate -------------
/// Vocabulary membership checks for names arriving as text from outside
/// the core.
pub struct Validate;

impl Validate {
    pub fn source(name: &str) -> bool {
        Source::from_name(name).is_some()
    }
    pub fn provider(name: &str) -> bool {
        Provider::from_name(name).is_some()
    }
    pub fn field(name: &str) -> bool {
        Field::from_name(name).is_some()
    }
    pub fn numeric(name: &str) -> bool {
        Numeric::from_name(name).is_some()
    }
    pub fn primary_key(name: &str) -> bool {
        PrimaryKey::from_name(name).is_some()
    }
    pub fn event_date(name: &str) -> bool {
        EventDate::from_name(name).is_some()
    }
    /// Membership in any of the four column vocabularies.
    pub fn column(name: &str) -> bool {
        column_named(name).is_some()
    }
}
