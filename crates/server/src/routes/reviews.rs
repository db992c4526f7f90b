use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use service::pagination::Pagination;
use service::review::domain::ReviewFields;

use crate::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 { 1 }
fn default_per_page() -> u64 { Pagination::DEFAULT_PER_PAGE }

/// GET /api/reviews — paginated listing with totals.
pub async fn index(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Value>, JsonApiError> {
    let total = state.reviews.count().await?;
    let (skip, per_page) = Pagination { page: q.page, per_page: q.per_page }.normalize();
    let pages = Pagination::total_pages(total, per_page);
    let reviews = state.reviews.paginate(Some(per_page), skip).await?;

    Ok(Json(json!({
        "data": {
            "reviews": reviews,
            "total": total,
            "page": q.page.max(1),
            "pages": pages,
            "per_page": per_page,
        }
    })))
}

/// GET /api/reviews/:id — single review.
pub async fn view(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, JsonApiError> {
    let review = state.reviews.get_by_id(id).await?;
    Ok(Json(json!({ "data": { "review": review } })))
}

/// POST /api/reviews — create, 201 with the new id.
pub async fn create(
    State(state): State<ServerState>,
    Json(fields): Json<ReviewFields>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let id = state.reviews.create(fields).await?;
    Ok((StatusCode::CREATED, Json(json!({ "data": { "id": id } }))))
}

/// PUT /api/reviews/:id — partial update, success flag.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(fields): Json<ReviewFields>,
) -> Result<Json<Value>, JsonApiError> {
    let success = state.reviews.update(id, fields).await?;
    Ok(Json(json!({ "success": success })))
}

/// DELETE /api/reviews/:id — success flag.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, JsonApiError> {
    let success = state.reviews.delete(id).await?;
    Ok(Json(json!({ "success": success })))
}
