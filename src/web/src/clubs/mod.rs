pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppData;
use axum::Router;

pub fn club_routes() -> Router<AppData> {
    Router::new()
        .merge(create::routes::routes())
        .merge(get::routes::routes())
        .merge(list::routes::routes())
        .merge(update::routes::routes())
        .merge(delete::routes::routes())
}
