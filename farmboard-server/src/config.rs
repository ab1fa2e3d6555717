//! Database connection settings
//!
//! Loaded from environment variables:
//! - `DATABASE_URL`: full connection string, takes precedence when set
//! - `DB_HOST`, `DB_PORT` (default 5432), `DB_NAME`, `DB_USER`, `DB_PASSWORD`
//! - `DB_SSLMODE`: optional (`disable`, `prefer`, `require`, ...)

use std::fmt;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Default PostgreSQL port
const DEFAULT_PORT: u16 = 5432;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0} (or set DATABASE_URL)")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Where to find the database
#[derive(Debug, Clone)]
pub enum DatabaseConfig {
    /// A `postgres://` connection string
    Url(String),
    /// Discrete connection settings
    Parts(DatabaseParts),
}

/// Discrete connection settings
#[derive(Clone)]
pub struct DatabaseParts {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
    pub ssl_mode: Option<String>,
}

impl fmt::Debug for DatabaseParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseParts")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source (for testing)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup("DATABASE_URL") {
            return Ok(Self::Url(url));
        }

        let port = match lookup("DB_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "DB_PORT",
                reason: format!("'{}' is not a port number", raw),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self::Parts(DatabaseParts {
            host: lookup("DB_HOST").ok_or(ConfigError::Missing("DB_HOST"))?,
            port,
            database: lookup("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
            user: lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
            password: lookup("DB_PASSWORD"),
            ssl_mode: lookup("DB_SSLMODE"),
        }))
    }

    /// Build sqlx connect options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match self {
            Self::Url(url) => PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
                name: "DATABASE_URL",
                reason: e.to_string(),
            }),
            Self::Parts(parts) => {
                let mut options = PgConnectOptions::new()
                    .host(&parts.host)
                    .port(parts.port)
                    .database(&parts.database)
                    .username(&parts.user);

                if let Some(password) = &parts.password {
                    options = options.password(password);
                }

                if let Some(mode) = &parts.ssl_mode {
                    let mode = PgSslMode::from_str(mode).map_err(|e| ConfigError::Invalid {
                        name: "DB_SSLMODE",
                        reason: e.to_string(),
                    })?;
                    options = options.ssl_mode(mode);
                }

                Ok(options)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn url_takes_precedence() {
        let config = DatabaseConfig::from_lookup(vars(&[
            ("DATABASE_URL", "postgres://u:p@db/farm"),
            ("DB_HOST", "ignored"),
        ]))
        .unwrap();

        assert!(matches!(config, DatabaseConfig::Url(ref url) if url == "postgres://u:p@db/farm"));
        assert!(config.connect_options().is_ok());
    }

    #[test]
    fn parts_with_default_port() {
        let config = DatabaseConfig::from_lookup(vars(&[
            ("DB_HOST", "localhost"),
            ("DB_NAME", "farm"),
            ("DB_USER", "farmer"),
            ("DB_PASSWORD", "secret"),
        ]))
        .unwrap();

        let DatabaseConfig::Parts(parts) = &config else {
            panic!("expected parts, got {:?}", config);
        };
        assert_eq!(parts.port, 5432);
        assert_eq!(parts.password.as_deref(), Some("secret"));

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
    }

    #[test]
    fn missing_host_is_reported() {
        let err = DatabaseConfig::from_lookup(vars(&[("DB_NAME", "farm")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DB_HOST")));
    }

    #[test]
    fn bad_port_is_reported() {
        let err = DatabaseConfig::from_lookup(vars(&[
            ("DB_HOST", "localhost"),
            ("DB_PORT", "fifty"),
            ("DB_NAME", "farm"),
            ("DB_USER", "farmer"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "DB_PORT", .. }));
    }

    #[test]
    fn bad_ssl_mode_is_reported() {
        let config = DatabaseConfig::from_lookup(vars(&[
            ("DB_HOST", "localhost"),
            ("DB_NAME", "farm"),
            ("DB_USER", "farmer"),
            ("DB_SSLMODE", "sometimes"),
        ]))
        .unwrap();
        assert!(config.connect_options().is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let config = DatabaseConfig::from_lookup(vars(&[
            ("DB_HOST", "localhost"),
            ("DB_NAME", "farm"),
            ("DB_USER", "farmer"),
            ("DB_PASSWORD", "hunter2"),
        ]))
        .unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
