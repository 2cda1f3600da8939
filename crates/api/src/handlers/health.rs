//! Health check handler

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Liveness probe reporting the number of registered providers
pub async fn health(State(state): State<AppState>) -> Json<Value> {
	Json(json!({
		"status": "healthy",
		"timestamp": chrono::Utc::now().to_rfc3339(),
		"providers": state.aggregator.provider_count(),
	}))
}
