use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/table/update-clubs", post(super::table_update_clubs_action))
}
