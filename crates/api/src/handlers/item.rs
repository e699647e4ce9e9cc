//! Handlers for the `/items` resource.

use axum::http::StatusCode;
use axum::Json;
use itemstore_core::error::CoreError;
use itemstore_core::pagination::Pagination;
use itemstore_core::types::DbId;
use itemstore_db::models::item::{CreateItem, Item, UpdateItem};
use itemstore_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{DbSession, ValidPath, ValidQuery, ValidatedJson};
use crate::query::ListParams;

fn not_found() -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item" })
}

/// POST /api/items
pub async fn create(
    mut session: DbSession,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = ItemRepo::create(&mut session, &input).await?;
    session.commit().await?;

    tracing::info!(item_id = item.id, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items
///
/// Items in insertion order; `skip` defaults to 0, `limit` to 100 (max 1000).
pub async fn list(
    ValidQuery(params): ValidQuery<ListParams>,
    mut session: DbSession,
) -> AppResult<Json<Vec<Item>>> {
    let page = Pagination::new(params.skip, params.limit)?;
    let items = ItemRepo::list(&mut session, page.skip, page.limit).await?;
    Ok(Json(items))
}

/// GET /api/items/{id}
pub async fn get_by_id(
    ValidPath(id): ValidPath<DbId>,
    mut session: DbSession,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::find_by_id(&mut session, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(item))
}

/// PUT /api/items/{id}
///
/// Applies only the fields present in the body. An empty body still
/// refreshes `updated_at`.
pub async fn update(
    ValidPath(id): ValidPath<DbId>,
    mut session: DbSession,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::update(&mut session, id, &input)
        .await?
        .ok_or_else(not_found)?;
    session.commit().await?;

    tracing::info!(item_id = id, "Item updated");

    Ok(Json(item))
}

/// DELETE /api/items/{id}
pub async fn delete(
    ValidPath(id): ValidPath<DbId>,
    mut session: DbSession,
) -> AppResult<StatusCode> {
    if !ItemRepo::delete(&mut session, id).await? {
        return Err(not_found());
    }
    session.commit().await?;

    tracing::info!(item_id = id, "Item deleted");

    Ok(StatusCode::NO_CONTENT)
}
