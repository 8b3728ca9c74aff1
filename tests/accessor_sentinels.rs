use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

use fiscus::accessor::{Amount, Element, Key, Time};
use fiscus::datatype::Value;
use fiscus::record::Row;
use fiscus::verify::Verify;
use fiscus::vocabulary::{EventDate, Field, Numeric, PrimaryKey};

fn row_of(pairs: &[(&str, Value)]) -> Row {
    let map: IndexMap<String, Value> = pairs
        .iter()
        .map(|(column, value)| (column.to_string(), value.clone()))
        .collect();
    Row::from_map(map)
}

#[test]
fn negative_funding_is_absent() {
    let row = row_of(&[("Amount", Value::Real(-1.0))]);
    let amount = Amount::new(&row, Numeric::Amount);
    assert_eq!(amount, Amount::default(), "-1.0 is the stored 'not applicable' marker");
    assert_eq!(amount.get_value(), -1.0);
    assert!(!Verify::amount(&amount));
}

#[test]
fn zero_funding_is_present_and_distinct_from_absent() {
    let row = row_of(&[("Amount", Value::Real(0.0))]);
    let amount = Amount::new(&row, Numeric::Amount);
    assert_eq!(amount.get_value(), 0.0);
    assert_ne!(amount, Amount::default(), "zero funding is data, not absence");
    assert!(Verify::amount(&amount));
}

#[test]
fn integer_backed_funding_is_read_as_funding() {
    let row = row_of(&[("Budgeted", Value::Integer(250000))]);
    let amount = Amount::new(&row, Numeric::Budgeted);
    assert_eq!(amount.get_value(), 250000.0);
    assert!(Verify::amount(&amount));
}

#[test]
fn empty_element_collapses_to_default() {
    let row = row_of(&[("Code", Value::Text(String::new()))]);
    let element = Element::new(&row, Field::Code);
    assert_eq!(element, Element::default());
    assert_eq!(element.get_value(), "");
    assert!(!Verify::element(&element));
}

#[test]
fn nonpositive_key_has_no_identity() {
    for stored in [0i64, -5] {
        let row = row_of(&[("AccountsId", Value::Integer(stored))]);
        let key = Key::new(&row, PrimaryKey::AccountsId);
        assert_eq!(key.get_value(), -1, "{stored} is not an identity");
        assert!(!Verify::key(&key));
    }
    let row = row_of(&[("AccountsId", Value::Integer(42))]);
    let key = Key::new(&row, PrimaryKey::AccountsId);
    assert_eq!(key.get_value(), 42);
    assert!(Verify::key(&key));
}

#[test]
fn unparsable_time_is_the_epoch_default() {
    let row = row_of(&[("ProcessedDate", Value::Text("not a date".into()))]);
    let time = Time::new(&row, EventDate::ProcessedDate);
    assert_eq!(time, Time::default());
    assert_eq!(time.get_value(), NaiveDateTime::default());
    assert!(!Verify::time(&time));
}

#[test]
fn stored_date_text_parses_in_both_shapes() {
    let expected = NaiveDate::from_ymd_opt(2023, 10, 1)
        .expect("valid date")
        .and_hms_opt(8, 30, 0)
        .expect("valid time");
    let row = row_of(&[("ProcessedDate", Value::Text("2023-10-01 08:30:00".into()))]);
    let time = Time::new(&row, EventDate::ProcessedDate);
    assert_eq!(time.get_value(), expected);
    assert!(Verify::time(&time));

    let row = row_of(&[("LastUpdate", Value::Text("2023-10-01".into()))]);
    let time = Time::new(&row, EventDate::LastUpdate);
    assert_eq!(
        time.get_value(),
        NaiveDate::from_ymd_opt(2023, 10, 1)
            .expect("valid date")
            .and_hms_opt(0, 0, 0)
            .expect("valid time"),
        "a bare date lands on midnight"
    );
}

#[test]
fn absent_column_is_default_for_every_accessor() {
    let row = row_of(&[("Code", Value::Text("0108".into()))]);
    assert_eq!(Element::new(&row, Field::FundCode), Element::default());
    assert_eq!(Key::new(&row, PrimaryKey::FundsId), Key::default());
    assert_eq!(Amount::new(&row, Numeric::Outlays), Amount::default());
    assert_eq!(Time::new(&row, EventDate::ClosedDate), Time::default());
}

#[test]
fn stored_null_is_default() {
    let row = row_of(&[("Amount", Value::Null), ("Code", Value::Null)]);
    assert_eq!(Amount::new(&row, Numeric::Amount), Amount::default());
    assert_eq!(Element::new(&row, Field::Code), Element::default());
}
