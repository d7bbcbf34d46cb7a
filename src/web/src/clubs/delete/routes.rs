use crate::AppData;
use axum::routing::delete;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/club/delete/{id}", delete(super::club_delete_action))
}
