pub mod routes;

use crate::tables::LeagueView;
use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use database::LeagueQuery;

pub async fn table_user_action(
    State(state): State<AppData>,
    _user: CurrentUser,
    path: Result<Path<u32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(user_id) = path?;

    let leagues = state
        .database
        .leagues
        .list(LeagueQuery::owned_by(user_id))
        .await?;

    Ok(Json(LeagueView::build_all(leagues, &state.database.clubs).await))
}
