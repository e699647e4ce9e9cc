use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted, config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers never touch it directly; they
    /// take a [`DbSession`](crate::extract::DbSession).
    pub pool: itemstore_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
