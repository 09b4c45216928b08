pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Span;

use crate::controllers::{compass, curated::CuratedController, feed::FeedController, health};
use crate::infrastructure::config::Config;

/// Build the application router with all routes and layers
pub fn build_router(feed_controller: Arc<FeedController>, curated_controller: Arc<CuratedController>) -> Router {
    let feed_routes = Router::new()
        .route("/api/feed", get(FeedController::get_feed))
        .route("/api/feed/refresh", post(FeedController::refresh))
        .with_state(feed_controller);

    let curated_routes = Router::new()
        .route("/api/curated", get(CuratedController::list))
        .route("/api/curated/:id", get(CuratedController::get))
        .with_state(curated_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/api/compass", get(compass::locate))
        .merge(feed_routes)
        .merge(curated_routes)
        .fallback(health::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(CorsLayer::very_permissive()),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.to_string())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    feed_controller: Arc<FeedController>,
    curated_controller: Arc<CuratedController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(feed_controller, curated_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
