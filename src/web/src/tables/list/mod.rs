pub mod routes;

use crate::common::pagination::PageQuery;
use crate::tables::LeagueView;
use crate::{ApiResult, AppData};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use database::LeagueQuery;

pub async fn table_list_action(
    State(state): State<AppData>,
    Query(page): Query<PageQuery>,
) -> ApiResult<impl IntoResponse> {
    let leagues = state
        .database
        .leagues
        .list(LeagueQuery::page(page.start_index(), page.limit()))
        .await?;

    Ok(Json(LeagueView::build_all(leagues, &state.database.clubs).await))
}
