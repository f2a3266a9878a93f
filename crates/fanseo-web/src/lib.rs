//! FanSEO Web Server
//!
//! Axum-based JSON API for keyword opportunity analysis.

pub mod routes;
pub mod state;

use std::any::Any;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use fanseo_core::Settings;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let api_routes = Router::new()
        .route("/analyze", post(routes::analyze::analyze))
        .route("/health", get(routes::health::health))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Turn a handler panic into the standard 500 body.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    routes::ApiError::Internal(message).into_response()
}

/// Run the web server.
pub async fn run_server(settings: Arc<Settings>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let has_credentials = settings.has_credentials();

    let state = AppState::new(settings);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", addr);
    if !has_credentials {
        tracing::warn!("DataForSEO credentials not configured, all keywords will be simulated");
    }

    axum::serve(listener, app).await?;
    Ok(())
}
