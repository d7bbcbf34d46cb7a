use crate::clubs::club_routes;
use crate::common::common_routes;
use crate::common::default_handler::default_handler;
use crate::tables::table_routes;
use crate::AppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(common_routes())
            .merge(table_routes())
            .merge(club_routes())
            .fallback(default_handler)
    }
}
