use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/table/add-clubs", post(super::table_add_clubs_action))
}
