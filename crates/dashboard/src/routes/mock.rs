//! Mock Alerts Endpoint
//!
//! Demo mode: serve a local JSON fixture at `/api/alerts` so the dashboard
//! can run without a detection backend. A missing or unreadable fixture
//! serves an empty list, never an error.

use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Serve the configured fixture as the alerts array.
pub async fn serve_alerts(State(state): State<Arc<AppState>>) -> Json<Value> {
    let Some(path) = &state.mock_alerts_path else {
        return Json(Value::Array(Vec::new()));
    };

    match tokio::fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
            Ok(value @ Value::Array(_)) => Json(value),
            Ok(_) => {
                warn!(path = %path.display(), "fixture is not a JSON array");
                Json(Value::Array(Vec::new()))
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "fixture is not valid JSON");
                Json(Value::Array(Vec::new()))
            }
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read alerts fixture");
            Json(Value::Array(Vec::new()))
        }
    }
}
