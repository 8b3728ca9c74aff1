//! Connection resolution.
//!
//! A [`Connection`] binds one live handle to one (source, provider)
//! resolution. The target is derived from [`Settings`] alone, so a given
//! pair resolves to the same physical target for the life of the process.
//! Resolution is eager: a missing catalog file, an unopenable file and a
//! catalog without the requested dataset all surface here, not at fetch
//! time. Connections are scoped to one fetch and are not pooled; every
//! call site resolves afresh.

use tracing::debug;

use crate::error::ConnectionError;
use crate::settings::Settings;
use crate::vocabulary::{Provider, Source};

// ------------- Connection -------------
pub struct Connection {
    source: Source,
    provider: Provider,
    handle: rusqlite::Connection,
}

impl Connection {
    /// Resolves a provider-specific target for `source`. Pairs outside
    /// the wired-up providers fail with [`ConnectionError::Unsupported`]
    /// before any backing store is contacted.
    pub fn resolve(
        source: Source,
        provider: Provider,
        settings: &Settings,
    ) -> std::result::Result<Connection, ConnectionError> {
        match provider {
            Provider::SQLite => Self::resolve_sqlite(source, settings),
            _ => Err(ConnectionError::Unsupported { source, provider }),
        }
    }

    fn resolve_sqlite(
        source: Source,
        settings: &Settings,
    ) -> std::result::Result<Connection, ConnectionError> {
        let path = settings.catalog_path();
        if !path.is_file() {
            return Err(ConnectionError::MissingCatalog {
                path: path.display().to_string(),
            });
        }
        let handle = rusqlite::Connection::open(&path).map_err(|e| ConnectionError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        // The dataset's table must already be present in the catalog.
        let probe = format!("SELECT * FROM {} LIMIT 1", source.table());
        if handle.prepare(&probe).is_err() {
            return Err(ConnectionError::MissingDataset {
                source,
                path: path.display().to_string(),
            });
        }
        debug!(source = %source, path = %path.display(), "resolved connection");
        Ok(Connection {
            source,
            provider: Provider::SQLite,
            handle,
        })
    }

    pub fn source(&self) -> Source {
        self.source
    }
    pub fn provider(&self) -> Provider {
        self.provider
    }
    pub(crate) fn handle(&self) -> &rusqlite::Connection {
        &self.handle
    }
}
