use crate::ApiError;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use log::debug;

/// Answers every unknown route with the JSON error shape handlers use.
pub async fn default_handler(method: Method, uri: Uri) -> Response {
    debug!("no route for {} {}", method, uri.path());

    ApiError::NotFound(format!("No route for {} {}", method, uri.path())).into_response()
}
