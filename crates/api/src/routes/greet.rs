use axum::{routing::get, Json, Router};
use itemstore_core::greeting::greeting;
use serde::Serialize;

use crate::extract::ValidQuery;
use crate::query::GreetParams;
use crate::state::AppState;

#[derive(Serialize)]
pub struct GreetResponse {
    pub message: String,
}

/// GET /api/greet?name=
async fn greet(ValidQuery(params): ValidQuery<GreetParams>) -> Json<GreetResponse> {
    Json(GreetResponse {
        message: greeting(params.name.as_deref()),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/greet", get(greet))
}
