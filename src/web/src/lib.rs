mod auth;
mod clubs;
mod common;
mod config;
mod error;
mod routes;
mod tables;

pub use auth::{CurrentUser, USER_ID_HEADER, USER_ROLE_HEADER};
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::ServerRoutes;
pub use tables::{LeagueView, StandingView};

use axum::response::IntoResponse;
use axum::Router;
use database::Database;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueTableServer {
    data: AppData,
    config: ServerConfig,
}

impl LeagueTableServer {
    pub fn new(data: AppData, config: ServerConfig) -> Self {
        LeagueTableServer { data, config }
    }

    pub fn app(data: AppData) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("Internal server error - handler panicked".to_string())
                            .into_response()
                    })),
            )
            .with_state(data)
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = Self::app(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "localhost".to_string());

        info!("listen at: http://{}:{}", host, self.config.port);

        axum::serve(listener, app).await.inspect_err(|e| {
            error!("Server error: {}", e);
        })
    }
}

pub struct AppData {
    pub database: Arc<Database>,
}

impl AppData {
    pub fn new(database: Database) -> Self {
        AppData {
            database: Arc::new(database),
        }
    }
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            database: Arc::clone(&self.database),
        }
    }
}
