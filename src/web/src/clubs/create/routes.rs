use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/club/create", post(super::club_create_action))
}
