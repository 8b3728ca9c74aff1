//! Single-use, scoped execution of one statement against one connection.
//!
//! Synchronous and single-attempt: no retry, no timeout. The prepared
//! statement and the row cursor live on this function's stack, so they
//! are released on every exit path, error or not, regardless of how many
//! rows were consumed.

use std::sync::Arc;

use rusqlite::params_from_iter;

use crate::connect::Connection;
use crate::datatype::Value;
use crate::error::QueryError;
use crate::record::{Row, RowSet};
use crate::statement::Statement;

/// Runs a row-bearing statement. Zero matching rows is a successful,
/// empty [`RowSet`]; any provider-side failure propagates unretried.
pub fn fetch(
    connection: &Connection,
    statement: &Statement,
) -> std::result::Result<RowSet, QueryError> {
    let mut prepared = connection
        .handle()
        .prepare(statement.text())
        .map_err(|e| QueryError::Prepare(e.to_string()))?;
    let columns: Arc<Vec<String>> = Arc::new(
        prepared
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    );
    let mut rows = prepared.query(params_from_iter(statement.bindings()))?;
    let mut fetched = RowSet::default();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            let cell = row.get_ref(position).map_err(|e| QueryError::Read {
                column: column.clone(),
                reason: e.to_string(),
            })?;
            values.push(Value::read(cell));
        }
        fetched.push(Row::new(Arc::clone(&columns), values));
    }
    Ok(fetched)
}

/// Runs a mutation statement, yielding the affected row count.
pub fn execute(
    connection: &Connection,
    statement: &Statement,
) -> std::result::Result<usize, QueryError> {
    let mut prepared = connection
        .handle()
        .prepare(statement.text())
        .map_err(|e| QueryError::Prepare(e.to_string()))?;
    let affected = prepared.execute(params_from_iter(statement.bindings()))?;
    Ok(affected)
}
