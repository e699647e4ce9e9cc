//! Idempotent bootstrap of the `items` table.
//!
//! The DDL is picked per backend; the column set and types seen by the
//! repository are identical on both.

use sqlx::Connection;

use crate::{Backend, DbPool};

const SQLITE_CREATE_ITEMS: &str = "CREATE TABLE IF NOT EXISTS items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT,
    price       REAL NOT NULL DEFAULT 0.0,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
)";

const POSTGRES_CREATE_ITEMS: &str = "CREATE TABLE IF NOT EXISTS items (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT,
    price       DOUBLE PRECISION NOT NULL DEFAULT 0.0,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
)";

const CREATE_NAME_INDEX: &str = "CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)";

/// Create the `items` table and its name index if they do not exist.
///
/// Safe to call on every startup.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let backend = Backend::from_backend_name(conn.backend_name()).ok_or_else(|| {
        sqlx::Error::Configuration(
            format!("no items schema for backend {}", conn.backend_name()).into(),
        )
    })?;

    let create_items = match backend {
        Backend::Sqlite => SQLITE_CREATE_ITEMS,
        Backend::Postgres => POSTGRES_CREATE_ITEMS,
    };

    let mut tx = conn.begin().await?;
    sqlx::query(create_items).execute(&mut *tx).await?;
    sqlx::query(CREATE_NAME_INDEX).execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::debug!(?backend, "items schema ready");
    Ok(())
}
