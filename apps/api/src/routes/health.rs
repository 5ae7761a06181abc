use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the service version and what was loaded at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "screener-api",
        "roles": state.taxonomy.roles().len(),
        "role_predictor": state.config.role_predictor.as_str(),
        "classifier_loaded": state.classifier.is_some(),
    }))
}
