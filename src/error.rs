use thiserror::Error;

use crate::statement::Operation;
use crate::vocabulary::{Provider, Source};

/// Resolution failures: the target is unreachable, misconfigured or does
/// not carry the requested dataset.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("provider {provider} is not supported for {source}")]
    Unsupported { source: Source, provider: Provider },
    #[error("no catalog file at {path}")]
    MissingCatalog { path: String },
    #[error("could not open {path}: {reason}")]
    Open { path: String, reason: String },
    #[error("catalog {path} has no {source} dataset")]
    MissingDataset { source: Source, path: String },
}

/// Execution or read failures on the provider side.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("could not prepare statement: {0}")]
    Prepare(String),
    #[error("could not execute statement: {0}")]
    Execute(String),
    #[error("could not read column {column}: {reason}")]
    Read { column: String, reason: String },
}

impl From<rusqlite::Error> for QueryError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Execute(e.to_string())
    }
}

/// A requested column is absent from the fetched schema.
#[derive(Error, Debug)]
#[error("column {column} is absent from the fetched row")]
pub struct MappingError {
    pub column: String,
}

/// Input referencing something outside the defined vocabulary, or an
/// operation shape the builder refuses to run.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("'{0}' does not name a known dataset")]
    UnknownSource(String),
    #[error("'{0}' does not name a known provider")]
    UnknownProvider(String),
    #[error("'{0}' does not name a known column")]
    UnknownColumn(String),
    #[error("{operation} requires at least one criterion")]
    EmptyCriteria { operation: Operation },
    #[error("{operation} is not a mutation")]
    NotMutation { operation: Operation },
}

#[derive(Error, Debug)]
pub enum FiscusError {
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("query error: {0}")]
    Query(#[from] QueryError),
    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FiscusError>;

impl From<config::ConfigError> for FiscusError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
