pub mod routes;

use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use standings::ClubDraft;

pub async fn club_create_action(
    State(state): State<AppData>,
    user: CurrentUser,
    payload: Result<Json<ClubDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(draft) = payload?;

    let club = state.database.clubs.create(&draft).await?;

    info!("club {} '{}' created by user {}", club.id, club.name, user.id);

    Ok((StatusCode::CREATED, Json(club)))
}
