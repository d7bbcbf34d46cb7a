pub mod routes;

use crate::{ApiError, ApiResult, AppData, CurrentUser};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use database::LeagueQuery;
use log::info;
use serde_json::json;

/// Admin only. A club still listed by a table cannot be deleted.
pub async fn club_delete_action(
    State(state): State<AppData>,
    user: CurrentUser,
    path: Result<Path<u32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = path?;

    user.ensure_admin("Only admins can delete clubs!")?;

    let listed_in: Vec<u32> = state
        .database
        .leagues
        .list(LeagueQuery::listing_club(id))
        .await?
        .iter()
        .map(|league| league.id)
        .collect();

    if !listed_in.is_empty() {
        return Err(ApiError::Conflict(format!(
            "Club is still part of tables {:?}",
            listed_in
        )));
    }

    state.database.clubs.delete(id).await?;

    info!("club {} deleted by admin {}", id, user.id);

    Ok(Json(json!({
        "success": true,
        "message": "Club has been deleted!"
    })))
}
