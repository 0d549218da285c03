use crate::config::Config;
use crate::query::ListQuery;
use crate::service::MediaService;
use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use mediaaccess_common::{OrderBy, SortBy};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod routes_files;
pub mod routes_filesystem;
pub mod routes_general;
pub mod routes_movies;
pub mod routes_music;
pub mod routes_pictures;
pub mod routes_tvshows;

pub use error::AppError;

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub service: Arc<MediaService>,
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(service: MediaService, config: Config) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Run a service call on the blocking pool. Backends may block on disk or
    /// database I/O, so they never run on the async workers.
    pub async fn run<T, F>(&self, call: F) -> Result<T, AppError>
    where
        F: FnOnce(&MediaService) -> mediaaccess_common::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let result = tokio::task::spawn_blocking(move || call(&service)).await?;
        result.map_err(AppError::from)
    }
}

/// Query parameters shared by the list routes.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub genre: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortBy>,
    pub order: Option<OrderBy>,
}

impl ListParams {
    pub fn query(self) -> ListQuery {
        ListQuery {
            genre: self.genre,
            category: self.category,
            sort: self.sort.unwrap_or_default(),
            order: self.order.unwrap_or_default(),
        }
    }
}

/// `start` / `end` for the range routes: inclusive start, exclusive end.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub start: usize,
    pub end: usize,
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

fn api_routes() -> Router<AppContext> {
    routes_general::general_routes()
        .merge(routes_movies::movie_routes())
        .merge(routes_tvshows::tvshow_routes())
        .merge(routes_music::music_routes())
        .merge(routes_pictures::picture_routes())
        .merge(routes_filesystem::filesystem_routes())
        .merge(routes_files::file_routes())
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Start the HTTP server
pub async fn start_server(config: Config, service: MediaService) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let app = create_router(AppContext::new(service, config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
