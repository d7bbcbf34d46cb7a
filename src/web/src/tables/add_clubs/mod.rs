pub mod routes;

use crate::tables::LeagueView;
use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde::Deserialize;
use standings::{ClubDraft, LeagueError};

const NOT_OWNER: &str = "You can only add clubs to your own tables!";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddClubsRequest {
    pub table_id: Option<u32>,
    #[serde(default)]
    pub clubs: Vec<ClubDraft>,
}

pub async fn table_add_clubs_action(
    State(state): State<AppData>,
    user: CurrentUser,
    payload: Result<Json<AddClubsRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let table_id = request
        .table_id
        .ok_or_else(|| LeagueError::validation("tableId is required"))?;

    if request.clubs.is_empty() {
        return Err(LeagueError::validation("At least one club is required").into());
    }

    state
        .database
        .leagues
        .find(table_id)
        .await?
        .ensure_owner(user.id, NOT_OWNER)?;

    // clubs become visible only once the table has been saved
    let batch = state.database.clubs.stage_new(&request.clubs).await?;
    let club_ids = batch.ids();

    let (league, _) = state
        .database
        .leagues
        .update(table_id, |league| {
            league.ensure_owner(user.id, NOT_OWNER)?;
            league.table.add_clubs(&club_ids)?;
            league.touch();
            Ok(())
        })
        .await?;

    state.database.clubs.commit(batch).await;

    info!("table {}: added clubs {:?}", league.id, club_ids);

    Ok(Json(LeagueView::build(league, &state.database.clubs).await))
}
