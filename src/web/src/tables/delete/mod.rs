pub mod routes;

use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde_json::json;

/// Deletes the table only. Its clubs stay in the registry.
pub async fn table_delete_action(
    State(state): State<AppData>,
    user: CurrentUser,
    path: Result<Path<u32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = path?;
    let league = state
        .database
        .leagues
        .delete(id, |league| {
            league.ensure_owner(user.id, "You are not authorized to delete this table!")
        })
        .await?;

    info!("table {} deleted by user {}", league.id, user.id);

    Ok(Json(json!({
        "success": true,
        "message": "Table has been deleted!"
    })))
}
