pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(handlers::handle_upload_page))
        .route("/screen", post(handlers::handle_screen_html))
        // Screening API
        .route("/api/v1/screen", post(handlers::handle_screen_json))
        .route("/api/v1/classify", post(handlers::handle_classify))
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .fallback(handlers::handle_not_found)
        // Replaces axum's 2 MB default so resume uploads use the configured cap
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
