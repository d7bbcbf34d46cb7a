pub mod routes;

use crate::tables::LeagueView;
use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateTableRequest {
    #[serde(default)]
    pub name: String,
}

pub async fn table_update_action(
    State(state): State<AppData>,
    user: CurrentUser,
    path: Result<Path<u32>, PathRejection>,
    payload: Result<Json<UpdateTableRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(request) = payload?;

    let (league, _) = state
        .database
        .leagues
        .update(id, |league| {
            league.ensure_owner(user.id, "You can only update your own tables!")?;
            league.rename(&request.name)
        })
        .await?;

    info!("table {} renamed to '{}'", league.id, league.name);

    Ok(Json(LeagueView::build(league, &state.database.clubs).await))
}
