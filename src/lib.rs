//! Fiscus – the data access core of a federal budget execution browser.
//!
//! The browsing layer above this crate consists of hundreds of thin
//! domain classes (Account, Fund, Organization, ProgramProject, Outlay,
//! Obligation, …) that each wrap one relational row and expose typed
//! getters. All of them construct themselves through the same small
//! core, which is what this crate implements:
//!
//! * A [`vocabulary::Source`] names a logical dataset and a
//!   [`vocabulary::Provider`] names a backing engine, while
//!   [`vocabulary::Field`], [`vocabulary::Numeric`],
//!   [`vocabulary::PrimaryKey`] and [`vocabulary::EventDate`] are closed
//!   column vocabularies, so neither criteria nor accessors can
//!   reference an undefined column.
//! * A [`statement::Criteria`] is an insertion-ordered filter map and
//!   [`statement::Statement`] renders it into deterministic SQL with
//!   every value carried as a bound parameter.
//! * A [`connect::Connection`] is resolved eagerly per call and
//!   [`query::fetch`] executes one statement scoped to that call.
//! * A [`builder::DataBuilder`] ties those together behind
//!   `get_record`/`get_data`, the only surface the domain classes see.
//! * [`accessor::Element`], [`accessor::Key`], [`accessor::Amount`] and
//!   [`accessor::Time`] are sentinel-aware typed views of one fetched
//!   column, gated by the [`verify::Verify`] and [`verify::Validate`]
//!   predicates before anything is trusted or chained into a new query.
//!
//! ## Modules
//! * [`vocabulary`] – datasets, providers and column names as closed enumerations.
//! * [`datatype`] – the scalar [`datatype::Value`] crossing the provider boundary.
//! * [`settings`] – configuration (`fiscus.toml` + `FISCUS_*`) and the tracing bootstrap.
//! * [`connect`] – eager (source, provider) resolution over the embedded catalog.
//! * [`statement`] – criteria maps and the deterministic statement builder.
//! * [`record`] – fetched rows and row sets, with a lossless mapping round trip.
//! * [`query`] – single-use, scoped statement execution.
//! * [`builder`] – the record builder used by every domain class.
//! * [`accessor`] – typed, sentinel-aware column views.
//! * [`verify`] – boundary predicates gating accessors and dependent lookups.
//! * [`error`] – the typed failure taxonomy; "no data" is never an error.
//!
//! ## Quick Start
//! ```
//! use fiscus::statement::{Criteria, Operation, Statement};
//! use fiscus::vocabulary::{Field, Source};
//!
//! let criteria = Criteria::new()
//!     .with(Field::Code, "0108")
//!     .with(Field::BFY, "2023");
//! let statement = Statement::build(Operation::Select, Source::Accounts, &criteria);
//! assert_eq!(
//!     statement.text(),
//!     "SELECT * FROM Accounts WHERE Code = ?1 AND BFY = ?2"
//! );
//! ```
//!
//! Fetching goes through the record builder and stays explicit about
//! failure versus absence:
//! ```no_run
//! use fiscus::accessor::Element;
//! use fiscus::builder::DataBuilder;
//! use fiscus::settings::Settings;
//! use fiscus::statement::Criteria;
//! use fiscus::vocabulary::{Field, Source};
//!
//! # fn main() -> fiscus::error::Result<()> {
//! let builder = DataBuilder::new(Settings::load()?);
//! let criteria = Criteria::new().with(Field::Code, "0108");
//! if let Some(account) = builder.get_record(Source::Accounts, &criteria)? {
//!     let code = Element::new(&account, Field::Code);
//!     assert_eq!(code.get_value(), "0108");
//! }
//! # Ok(())
//! # }
//! ```

pub mod accessor;
pub mod builder;
pub mod connect;
pub mod datatype;
pub mod error;
pub mod query;
pub mod record;
pub mod settings;
pub mod statement;
pub mod verify;
pub mod vocabulary;
