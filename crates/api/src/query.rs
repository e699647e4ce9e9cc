//! Query parameter types for API handlers.

use serde::Deserialize;

/// Offset pagination parameters (`?skip=&limit=`).
///
/// Bounds are checked by [`itemstore_core::pagination::Pagination::new`].
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /api/greet`.
#[derive(Debug, Deserialize)]
pub struct GreetParams {
    pub name: Option<String>,
}
