pub mod routes;

use crate::tables::LeagueView;
use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde::Deserialize;
use standings::{ClubDraft, League};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_ref: Option<String>,
    #[serde(default)]
    pub clubs: Vec<ClubDraft>,
}

pub async fn table_create_action(
    State(state): State<AppData>,
    user: CurrentUser,
    payload: Result<Json<CreateTableRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    // id is assigned by the store
    let mut league = League::new(0, &request.name, user.id, request.user_ref.as_deref())?;

    let batch = state.database.clubs.stage_new(&request.clubs).await?;
    let club_ids = batch.ids();

    league.table.add_clubs(&club_ids)?;

    let league = state.database.leagues.create(league).await?;

    state.database.clubs.commit(batch).await;

    info!(
        "table {} '{}' created by user {} with {} clubs",
        league.id,
        league.name,
        user.id,
        club_ids.len()
    );

    let view = LeagueView::build(league, &state.database.clubs).await;

    Ok((StatusCode::CREATED, Json(view)))
}
