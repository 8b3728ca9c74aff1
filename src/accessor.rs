//! Typed, sentinel-aware views of one column in one fetched row.
//!
//! Each accessor is constructed from a row and a vocabulary tag and owns
//! a fixed default instance standing in for "absent": the empty string
//! for [`Element`], index -1 for [`Key`], negative funding for
//! [`Amount`], the Unix epoch for [`Time`]. Absence covers a missing
//! column, a stored NULL and any stored value failing the type's
//! validity rule. Accessors never re-query the store.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::datatype::{DATE_FORMAT, Value};
use crate::record::Row;
use crate::vocabulary::{Column, EventDate, Field, Numeric, PrimaryKey};

// ------------- Element -------------
/// A text column: a code, name or title.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Element {
    column: &'static str,
    value: String,
}

impl Element {
    pub fn new(row: &Row, field: Field) -> Element {
        let value = match row.get(field) {
            Some(Value::Text(text)) => text.clone(),
            Some(Value::Integer(integer)) => integer.to_string(),
            _ => String::new(),
        };
        if value.is_empty() {
            Element::default()
        } else {
            Element {
                column: field.column(),
                value,
            }
        }
    }
    pub fn column(&self) -> &str {
        self.column
    }
    pub fn get_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ------------- Key -------------
/// A row identity. Identities are positive; -1 means "no identity".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    column: &'static str,
    index: i64,
}

impl Key {
    pub fn new(row: &Row, primary_key: PrimaryKey) -> Key {
        match row.get(primary_key) {
            Some(Value::Integer(index)) if *index > 0 => Key {
                column: primary_key.column(),
                index: *index,
            },
            _ => Key::default(),
        }
    }
    pub fn column(&self) -> &str {
        self.column
    }
    pub fn get_value(&self) -> i64 {
        self.index
    }
}

impl Default for Key {
    fn default() -> Self {
        Self {
            column: "",
            index: -1,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

// ------------- Amount -------------
/// A funding measure. Only non-negative funding is present; the schema's
/// stored negative markers mean "not applicable" and collapse into the
/// default. Zero funding is present and distinct from absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Amount {
    column: &'static str,
    funding: f64,
}

impl Amount {
    pub fn new(row: &Row, numeric: Numeric) -> Amount {
        match row.get(numeric) {
            Some(Value::Real(funding)) if *funding >= 0.0 => Amount {
                column: numeric.column(),
                funding: *funding,
            },
            Some(Value::Integer(funding)) if *funding >= 0 => Amount {
                column: numeric.column(),
                funding: *funding as f64,
            },
            _ => Amount::default(),
        }
    }
    pub fn column(&self) -> &str {
        self.column
    }
    pub fn get_value(&self) -> f64 {
        self.funding
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self {
            column: "",
            funding: -1.0,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.funding)
    }
}

// ------------- Time -------------
/// An event timestamp. The default is the Unix epoch, standing for "no
/// recorded moment"; stored text parses as `%Y-%m-%d %H:%M:%S` or a bare
/// `%Y-%m-%d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Time {
    column: &'static str,
    moment: NaiveDateTime,
}

impl Time {
    pub fn new(row: &Row, event: EventDate) -> Time {
        let moment = match row.get(event) {
            Some(Value::Date(moment)) => Some(*moment),
            Some(Value::Text(text)) => parse_moment(text),
            _ => None,
        };
        match moment {
            Some(moment) => Time {
                column: event.column(),
                moment,
            },
            None => Time::default(),
        }
    }
    pub fn column(&self) -> &str {
        self.column
    }
    pub fn get_value(&self) -> NaiveDateTime {
        self.moment
    }
}

fn parse_moment(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

impl Default for Time {
    fn default() -> Self {
        Self {
            column: "",
            moment: NaiveDateTime::default(),
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.moment.format(DATE_FORMAT))
    }
}
