// used for binding criteria values and reading fetched columns
use rusqlite::types::{Null, ToSql, ToSqlOutput, ValueRef};

// used for event timestamps
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

// used to print out readable forms of a value
use std::fmt;

/// Rendering used whenever a date crosses the provider boundary, so that
/// stored text and bound parameters agree.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ------------- Value -------------
/// One scalar flowing through criteria, statement bindings and fetched
/// rows. Values are immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Real(f64),
    Date(NaiveDateTime),
}

impl Value {
    /// Reads one fetched column. Absence maps to [`Value::Null`]; the
    /// typed accessors decide what absence means for their column kind.
    pub fn read(value: ValueRef<'_>) -> Value {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Text(String::from_utf8_lossy(b).into_owned()),
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::from(Null),
            Value::Text(text) => ToSqlOutput::from(text.as_str()),
            Value::Integer(integer) => ToSqlOutput::from(*integer),
            Value::Real(real) => ToSqlOutput::from(*real),
            Value::Date(date) => ToSqlOutput::from(date.format(DATE_FORMAT).to_string()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, ""),
            Value::Text(text) => write!(f, "{}", text),
            Value::Integer(integer) => write!(f, "{}", integer),
            Value::Real(real) => write!(f, "{}", real),
            Value::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Value {
        Value::Text(text.to_owned())
    }
}
impl From<String> for Value {
    fn from(text: String) -> Value {
        Value::Text(text)
    }
}
impl From<i64> for Value {
    fn from(integer: i64) -> Value {
        Value::Integer(integer)
    }
}
impl From<f64> for Value {
    fn from(real: f64) -> Value {
        Value::Real(real)
    }
}
impl From<NaiveDateTime> for Value {
    fn from(date: NaiveDateTime) -> Value {
        Value::Date(date)
    }
}
impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Value {
        Value::Date(date.and_time(NaiveTime::MIN))
    }
}
