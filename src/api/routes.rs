use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        // Outermost, so the trace span already sees the request ID
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // User preferences
        .route(
            "/users/:username/preferences",
            get(handlers::get_preferences).put(handlers::put_preferences),
        )
        .route(
            "/users/:username/recommendations",
            post(handlers::recommend_for_user),
        )
        // Recommendations
        .route("/recommendations", post(handlers::recommend))
        // Catalog
        .route("/catalog", get(handlers::catalog))
}
