use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::StoreError;

const DEFAULT_DB_PATH: &str = "serialtrack.redb";

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

fn default_seed_on_empty() -> bool {
    true
}

/// Store configuration.
///
/// Loadable from an optional `serialtrack` config file plus `SERIALTRACK_`
/// environment overrides; all fields have defaults.
#[derive(Clone, Debug, Deserialize)]
pub struct StoreConfig {
    /// Path of the durable store database file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Seed the snapshot with the fixed default dataset when no persisted
    /// state exists.
    #[serde(default = "default_seed_on_empty")]
    pub seed_on_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            seed_on_empty: default_seed_on_empty(),
        }
    }
}

impl StoreConfig {
    pub fn load() -> Result<Self, StoreError> {
        let config = Config::builder()
            .add_source(File::with_name("serialtrack").required(false))
            .add_source(Environment::with_prefix("SERIALTRACK"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Config pointing at `db_path`, with defaults for everything else.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }
}
