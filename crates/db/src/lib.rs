//! Storage layer: connection pool, per-request sessions, schema bootstrap
//! and the `items` repository.
//!
//! Everything goes through sqlx's `Any` driver so the same queries run
//! against a local SQLite file and against PostgreSQL.

use std::str::FromStr;

use sqlx::any::{AnyConnectOptions, AnyPoolOptions};
use sqlx::ConnectOptions;

pub mod models;
pub mod repositories;
pub mod schema;
pub mod session;

pub use schema::init_schema;
pub use session::Session;

pub type DbPool = sqlx::AnyPool;

/// Connection string used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";

/// Backends the `items` schema is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    /// Detect the backend from a connection string's scheme.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else {
            None
        }
    }

    /// Map `AnyConnection::backend_name()` to a [`Backend`].
    pub fn from_backend_name(name: &str) -> Option<Self> {
        match name {
            "SQLite" => Some(Self::Sqlite),
            "PostgreSQL" => Some(Self::Postgres),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported database URL scheme: {0}")]
pub struct UnsupportedDatabaseUrl(pub String);

/// Rewrite the `postgres://` alias to the canonical `postgresql://` scheme
/// and reject schemes with no matching [`Backend`].
pub fn normalize_database_url(url: &str) -> Result<String, UnsupportedDatabaseUrl> {
    let normalized = match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    };

    match Backend::from_url(&normalized) {
        Some(_) => Ok(normalized),
        None => Err(UnsupportedDatabaseUrl(
            url.split("://").next().unwrap_or(url).to_string(),
        )),
    }
}

/// Pool settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Normalized connection string.
    pub url: String,
    pub max_connections: u32,
    /// Log every SQL statement at INFO (`SQL_ECHO=true`).
    pub log_statements: bool,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            log_statements: false,
        }
    }
}

/// Create a connection pool from a [`DbConfig`].
///
/// Connections are pinged before being handed out so a restarted database
/// does not surface as a failed request.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let mut options = AnyConnectOptions::from_str(&config.url)?;
    options = if config.log_statements {
        options.log_statements(log::LevelFilter::Info)
    } else {
        options.disable_statement_logging()
    };

    AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .test_before_acquire(true)
        .connect_with(options)
        .await
}

/// Check that the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn postgres_alias_is_rewritten() {
        assert_eq!(
            normalize_database_url("postgres://u:p@localhost:5432/app").unwrap(),
            "postgresql://u:p@localhost:5432/app"
        );
    }

    #[test]
    fn only_the_scheme_is_rewritten() {
        assert_eq!(
            normalize_database_url("postgres://postgres://x/db").unwrap(),
            "postgresql://postgres://x/db"
        );
    }

    #[test]
    fn canonical_urls_are_unchanged() {
        assert_eq!(
            normalize_database_url("postgresql://localhost/app").unwrap(),
            "postgresql://localhost/app"
        );
        assert_eq!(
            normalize_database_url(DEFAULT_DATABASE_URL).unwrap(),
            DEFAULT_DATABASE_URL
        );
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert_matches!(
            normalize_database_url("mysql://localhost/app"),
            Err(UnsupportedDatabaseUrl(scheme)) if scheme == "mysql"
        );
    }

    #[test]
    fn backend_detection() {
        assert_eq!(Backend::from_url("sqlite::memory:"), Some(Backend::Sqlite));
        assert_eq!(
            Backend::from_url("postgresql://localhost/app"),
            Some(Backend::Postgres)
        );
        assert_eq!(Backend::from_backend_name("SQLite"), Some(Backend::Sqlite));
        assert_eq!(Backend::from_backend_name("MySQL"), None);
    }
}
