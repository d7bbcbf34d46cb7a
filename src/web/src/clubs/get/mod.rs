pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn club_get_action(
    State(state): State<AppData>,
    path: Result<Path<u32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = path?;

    let club = state
        .database
        .clubs
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Club not found!".to_string()))?;

    Ok(Json(club))
}
