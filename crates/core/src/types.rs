/// Item primary keys: `INTEGER` on SQLite, `BIGSERIAL` on PostgreSQL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
