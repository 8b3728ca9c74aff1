//! Runtime configuration for the data access core.
//!
//! Settings come from an optional `fiscus.toml` next to the executable,
//! overridden by `FISCUS_*` environment variables. The application shell
//! owning the user interface decides when to load them; every resolver
//! call takes the loaded value, so the core itself never reads files or
//! the environment implicitly.

use std::path::{Path, PathBuf};

use config::Config;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

// ------------- Settings -------------
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Settings {
    /// Directory holding the embedded catalog file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// File name of the embedded database catalog inside `data_dir`.
    /// Every dataset lives as one table in this catalog.
    #[serde(default = "default_catalog")]
    pub catalog: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_catalog() -> String {
    String::from("fiscus.db")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog: default_catalog(),
        }
    }
}

impl Settings {
    /// Reads `fiscus.toml` (optional) and `FISCUS_*` overrides.
    pub fn load() -> Result<Settings> {
        let settings = Config::builder()
            .add_source(config::File::with_name("fiscus").required(false))
            .add_source(config::Environment::with_prefix("FISCUS"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Points the catalog at an explicit directory, as tests and embedded
    /// callers do instead of reading a config file.
    pub fn at(data_dir: impl AsRef<Path>, catalog: impl Into<String>) -> Settings {
        Settings {
            data_dir: data_dir.as_ref().to_path_buf(),
            catalog: catalog.into(),
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog)
    }
}

/// Installs a formatted `tracing` subscriber honoring `RUST_LOG`. Meant
/// for the application shell; calling it twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
