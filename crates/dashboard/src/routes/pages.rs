//! Dashboard Page Routes

use crate::AppState;
use axum::extract::State;
use axum::response::Html;
use card_render::ALERTS_CONTAINER;
use std::sync::Arc;

/// Page shell the alerts fragment is embedded into. The refresh hint
/// matches the poll cadence so the page tracks the container.
const DASHBOARD_SHELL: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta http-equiv="refresh" content="2">
  <title>SentryView Alerts</title>
  <style>
    body { font-family: sans-serif; margin: 2rem; background: #f3f4f6; }
    .alert-card { background: #fff; padding: 1rem; margin-bottom: 1rem;
                  border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.2); }
    .alert-snapshot { max-width: 320px; border-radius: 0.25rem; }
    .alert-location { font-weight: 600; }
    .alert-confidence, .alert-time { color: #4b5563; font-size: 0.9rem; }
    .alert-review { display: inline-block; padding: 0.25rem 0.75rem;
                    background: #2563eb; color: #fff; border-radius: 0.25rem;
                    text-decoration: none; }
    .alert-error { color: #dc2626; }
  </style>
</head>
<body>
  <h1>Alerts</h1>
  <div id="alerts-container">
{fragment}
  </div>
</body>
</html>
"#;

/// Serve the dashboard page with the current alerts fragment embedded.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let fragment = state
        .registry
        .fragment(ALERTS_CONTAINER)
        .unwrap_or_default();
    Html(DASHBOARD_SHELL.replace("{fragment}", &fragment))
}
