pub mod default_handler;
pub mod pagination;

use crate::AppData;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn common_routes() -> Router<AppData> {
    Router::new().route("/health", get(health_action))
}

async fn health_action() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
