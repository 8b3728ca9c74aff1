use fiscus::accessor::{Amount, Element, Key};
use fiscus::builder::DataBuilder;
use fiscus::datatype::Value;
use fiscus::settings::Settings;
use fiscus::statement::Criteria;
use fiscus::vocabulary::{Field, Numeric, PrimaryKey, Source};

fn setup(name: &str, batch: &str) -> (DataBuilder, std::path::PathBuf) {
    let dir = std::env::temp_dir();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    let conn = rusqlite::Connection::open(&path).expect("open fixture catalog");
    conn.execute_batch(batch).expect("seed fixtures");
    (DataBuilder::new(Settings::at(&dir, name)), path)
}

const ACCOUNTS: &str = "
    create table Accounts (
        AccountsId integer primary key,
        Code text,
        Name text,
        BFY text,
        Amount real,
        ProcessedDate text
    );
    insert into Accounts values (1, '0108', 'Science and Technology', '2023', 1500000.0, '2023-10-01 00:00:00');
    insert into Accounts values (2, '0208', 'Environmental Programs', '2023', 250000.0, '2023-10-02 00:00:00');
";

const FUNDS: &str = "
    create table Funds (FundsId integer primary key, Code text, Name text);
    insert into Funds values (1, 'B', 'General Fund');
    insert into Funds values (2, 'T', 'Trust Fund');
    insert into Funds values (3, 'F', 'Revolving Fund');
";

#[test]
fn single_match_returns_the_fixture_row() {
    let (builder, path) = setup("fiscus_record_single.db", ACCOUNTS);
    let criteria = Criteria::new().with(Field::Code, "0108");
    let record = builder
        .get_record(Source::Accounts, &criteria)
        .expect("fetch ok");
    let row = record.expect("one matching row");
    assert_eq!(Element::new(&row, Field::Code).get_value(), "0108");
    assert_eq!(
        Element::new(&row, Field::Name).get_value(),
        "Science and Technology"
    );
    assert_eq!(Key::new(&row, PrimaryKey::AccountsId).get_value(), 1);
    assert_eq!(Amount::new(&row, Numeric::Amount).get_value(), 1500000.0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn fetched_columns_equal_the_fixture_exactly() {
    let (builder, path) = setup("fiscus_record_columns.db", ACCOUNTS);
    let criteria = Criteria::new().with(Field::Code, "0208");
    let row = builder
        .get_record(Source::Accounts, &criteria)
        .expect("fetch ok")
        .expect("one matching row");
    assert_eq!(row.get(PrimaryKey::AccountsId), Some(&Value::Integer(2)));
    assert_eq!(
        row.get(Field::Name),
        Some(&Value::Text("Environmental Programs".into()))
    );
    assert_eq!(row.get(Field::BFY), Some(&Value::Text("2023".into())));
    assert_eq!(row.get(Numeric::Amount), Some(&Value::Real(250000.0)));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn zero_matches_is_none_not_an_error() {
    let (builder, path) = setup("fiscus_record_zero.db", ACCOUNTS);
    let criteria = Criteria::new().with(Field::Code, "9999");
    let record = builder
        .get_record(Source::Accounts, &criteria)
        .expect("zero rows is still a successful fetch");
    assert!(record.is_none());
    let data = builder
        .get_data(Source::Accounts, &criteria)
        .expect("zero rows is still a successful fetch");
    assert!(data.is_empty(), "no matches should yield an empty set");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn empty_criteria_read_the_whole_dataset() {
    let (builder, path) = setup("fiscus_record_full_scan.db", FUNDS);
    let data = builder
        .get_data(Source::Funds, &Criteria::new())
        .expect("fetch ok");
    assert_eq!(data.len(), 3, "unfiltered read should return every fund");
    let codes: Vec<&str> = data
        .iter()
        .map(|row| match row.get(Field::Code) {
            Some(Value::Text(code)) => code.as_str(),
            other => panic!("unexpected code value: {:?}", other),
        })
        .collect();
    assert_eq!(codes, vec!["B", "T", "F"], "rows keep their stored order");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn multiple_criteria_combine_by_and() {
    let (builder, path) = setup("fiscus_record_and.db", ACCOUNTS);
    let criteria = Criteria::new()
        .with(Field::BFY, "2023")
        .with(Field::Code, "0108");
    let data = builder
        .get_data(Source::Accounts, &criteria)
        .expect("fetch ok");
    assert_eq!(data.len(), 1, "both filters must hold");
    let _ = std::fs::remove_file(&path);
}
