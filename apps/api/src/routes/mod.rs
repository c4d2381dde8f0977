pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/preferences/default",
            get(handlers::handle_default_preferences),
        )
        .route("/api/v1/recommendations", post(handlers::handle_recommend))
        .route(
            "/api/v1/recommendations/score",
            post(handlers::handle_score),
        )
        .route("/api/v1/swipes", post(handlers::handle_swipe))
        .route("/api/v1/jobs/classify", post(handlers::handle_classify))
        .fallback(not_found)
        .with_state(state)
}
