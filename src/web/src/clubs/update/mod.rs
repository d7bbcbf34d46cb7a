pub mod routes;

use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClubRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

pub async fn club_update_action(
    State(state): State<AppData>,
    user: CurrentUser,
    path: Result<Path<u32>, PathRejection>,
    payload: Result<Json<UpdateClubRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(request) = payload?;

    let club = state
        .database
        .clubs
        .update(id, request.name.as_deref(), request.logo_url.as_deref())
        .await?;

    info!("club {} updated by user {}", club.id, user.id);

    Ok(Json(club))
}
