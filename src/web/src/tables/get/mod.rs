pub mod routes;

use crate::tables::LeagueView;
use crate::{ApiResult, AppData};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn table_get_action(
    State(state): State<AppData>,
    path: Result<Path<u32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = path?;

    let league = state.database.leagues.find(id).await?;

    Ok(Json(LeagueView::build(league, &state.database.clubs).await))
}
