//! Command implementations for the farmboard CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use farmboard_server::DatabaseConfig;

/// Connection settings from `--database-url`, or the environment.
pub(crate) fn database_config(database_url: Option<String>) -> Result<DatabaseConfig> {
    match database_url {
        Some(url) => Ok(DatabaseConfig::Url(url)),
        None => DatabaseConfig::from_env().context(
            "database not configured. Set --database-url, DATABASE_URL, or DB_HOST/DB_NAME/DB_USER/DB_PASSWORD",
        ),
    }
}
