use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/club/update/{id}", post(super::club_update_action))
}
