//! The record builder, the single construction path shared by every
//! domain class: resolve a connection, build a statement, run it, hand
//! back rows. Nothing is cached between calls; a caller wanting the same
//! lookup twice caches at its own layer.

use tracing::debug;

use crate::connect::Connection;
use crate::error::{Result, ValidationError};
use crate::query;
use crate::record::{Row, RowSet};
use crate::settings::Settings;
use crate::statement::{Criteria, Operation, Statement};
use crate::vocabulary::{Provider, Source};

// ------------- DataBuilder -------------
pub struct DataBuilder {
    settings: Settings,
    provider: Provider,
}

impl DataBuilder {
    /// A builder over the embedded file database, the provider the
    /// browsing layer runs against.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            provider: Provider::SQLite,
        }
    }
    pub fn with_provider(settings: Settings, provider: Provider) -> Self {
        Self { settings, provider }
    }
    pub fn provider(&self) -> Provider {
        self.provider
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// First or only match. Zero rows is `Ok(None)`, not an error; a
    /// resolution or execution failure propagates as `Err` and is never
    /// replaced with a default here.
    pub fn get_record(&self, source: Source, criteria: &Criteria) -> Result<Option<Row>> {
        let data = self.get_data(source, criteria)?;
        Ok(data.into_iter().next())
    }

    /// Full result set; empty criteria read the whole dataset.
    pub fn get_data(&self, source: Source, criteria: &Criteria) -> Result<RowSet> {
        let connection = Connection::resolve(source, self.provider, &self.settings)?;
        let statement = Statement::build(Operation::Select, source, criteria);
        let fetched = query::fetch(&connection, &statement)?;
        debug!(source = %source, criteria = criteria.len(), rows = fetched.len(), "fetched");
        Ok(fetched)
    }

    /// Insert, update or delete. A mutation with empty criteria is
    /// refused before any connection is resolved.
    pub fn modify(&self, operation: Operation, source: Source, criteria: &Criteria) -> Result<usize> {
        if !operation.is_mutation() {
            return Err(ValidationError::NotMutation { operation }.into());
        }
        if criteria.is_empty() {
            return Err(ValidationError::EmptyCriteria { operation }.into());
        }
        let connection = Connection::resolve(source, self.provider, &self.settings)?;
        let statement = Statement::build(operation, source, criteria);
        let affected = query::execute(&connection, &statement)?;
        debug!(operation = %operation, source = %source, affected, "modified");
        Ok(affected)
    }
}
