pub mod add_clubs;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
pub mod update_clubs;
pub mod update_match;
pub mod user;
mod views;

pub use views::{LeagueView, StandingView};

use crate::AppData;
use axum::Router;

pub fn table_routes() -> Router<AppData> {
    Router::new()
        .merge(create::routes::routes())
        .merge(get::routes::routes())
        .merge(list::routes::routes())
        .merge(user::routes::routes())
        .merge(update::routes::routes())
        .merge(delete::routes::routes())
        .merge(add_clubs::routes::routes())
        .merge(update_clubs::routes::routes())
        .merge(update_match::routes::routes())
}
