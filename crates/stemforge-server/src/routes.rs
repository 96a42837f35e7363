//! Router assembly.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Builds the service router.
///
/// CORS is wildcard-permissive on every route, including the explicit
/// OPTIONS preflight acknowledgment. Method routing returns 405 for
/// anything other than POST/OPTIONS on the stems endpoint.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/stems",
            post(handlers::generate).options(handlers::preflight),
        )
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
