use std::str::FromStr;

use itemstore_db::{normalize_database_url, DbConfig, UnsupportedDatabaseUrl, DEFAULT_DATABASE_URL};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development against a
/// SQLite file. CI overrides `DATABASE_URL` with a PostgreSQL service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Version reported by `/health` (default: `0.1.0`).
    pub app_version: String,
    /// Normalized database connection string.
    pub database_url: String,
    /// Maximum pooled connections (default: `10`).
    pub db_max_connections: u32,
    /// Log every SQL statement (default: `false`).
    pub sql_echo: bool,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error(transparent)]
    DatabaseUrl(#[from] UnsupportedDatabaseUrl),
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `127.0.0.1`                |
    /// | `PORT`                 | `8000`                     |
    /// | `APP_VERSION`          | `0.1.0`                    |
    /// | `DATABASE_URL`         | `sqlite://app.db?mode=rwc` |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `SQL_ECHO`             | `false`                    |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port = parse_var(&lookup, "PORT", 8000)?;
        let app_version = lookup("APP_VERSION").unwrap_or_else(|| "0.1.0".into());

        let database_url = normalize_database_url(
            &lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
        )?;
        let db_max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", 10)?;
        let sql_echo = lookup("SQL_ECHO").is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        Ok(Self {
            host,
            port,
            app_version,
            database_url,
            db_max_connections,
            sql_echo,
            cors_origins,
            request_timeout_secs,
        })
    }

    /// Pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.database_url.clone(),
            max_connections: self.db_max_connections,
            log_statements: self.sql_echo,
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
