pub mod greet;
pub mod health;
pub mod item;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /greet                 greeting
///
/// /items                 list, create
/// /items/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(greet::router())
        .nest("/items", item::router())
}
