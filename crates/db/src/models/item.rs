//! Item entity model and DTOs.

use chrono::{DateTime, SecondsFormat, Utc};
use itemstore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Price stored when a create request omits one.
pub const DEFAULT_PRICE: f64 = 0.0;

/// An item as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Raw `items` row. Timestamps are stored as RFC 3339 text so the schema
/// is portable across backends.
#[derive(Debug, FromRow)]
pub(crate) struct ItemRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<ItemRow> for Item {
    type Error = sqlx::Error;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(Item {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

/// DTO for creating a new item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to [`DEFAULT_PRICE`] if omitted.
    pub price: Option<f64>,
}

/// DTO for updating an existing item. All fields are optional; `None`
/// leaves the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Fixed-width UTC form (`YYYY-MM-DDTHH:MM:SS.ffffffZ`); lexical order
/// matches chronological order.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(raw: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
