use crate::AppData;
use axum::routing::delete;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/table/delete/{id}", delete(super::table_delete_action))
}
