pub mod routes;

use crate::common::pagination::PageQuery;
use crate::AppData;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn club_list_action(
    State(state): State<AppData>,
    Query(page): Query<PageQuery>,
) -> impl IntoResponse {
    Json(
        state
            .database
            .clubs
            .list(page.start_index(), page.limit())
            .await,
    )
}
