//! Repository for the `items` table.

use chrono::Utc;
use itemstore_core::types::DbId;
use sqlx::AnyConnection;

use crate::models::item::{
    format_timestamp, CreateItem, Item, ItemRow, UpdateItem, DEFAULT_PRICE,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, created_at, updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// If `price` is `None` in the input, stores [`DEFAULT_PRICE`].
    pub async fn create(conn: &mut AnyConnection, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let now = format_timestamp(&Utc::now());
        let query = format!(
            "INSERT INTO items (name, description, price, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price.unwrap_or(DEFAULT_PRICE))
            .bind(now)
            .fetch_one(&mut *conn)
            .await?
            .try_into()
    }

    /// Find an item by its ID.
    pub async fn find_by_id(conn: &mut AnyConnection, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .map(Item::try_from)
            .transpose()
    }

    /// List items in insertion (`id`) order, skipping `skip` rows and
    /// returning at most `limit`.
    pub async fn list(
        conn: &mut AnyConnection,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(&mut *conn)
            .await?
            .into_iter()
            .map(Item::try_from)
            .collect()
    }

    /// Update an item. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed even when nothing else changes, and never
    /// moves below `created_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut AnyConnection,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let now = format_timestamp(&Utc::now());
        let query = format!(
            "UPDATE items SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                updated_at = CASE WHEN $5 > created_at THEN $5 ELSE created_at END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(now)
            .fetch_optional(&mut *conn)
            .await?
            .map(Item::try_from)
            .transpose()
    }

    /// Permanently delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut AnyConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored items.
    pub async fn count(conn: &mut AnyConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(&mut *conn)
            .await
    }
}
