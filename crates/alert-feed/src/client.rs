//! HTTP implementation of the alert feed

use crate::error::FeedError;
use crate::feed::AlertFeed;
use alert_model::RawAlert;
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout
const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Configuration for the upstream alerts API.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the detection backend, e.g. `http://127.0.0.1:8000`
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Restrict the listing to one review status (pending / confirm / reject)
    pub status_filter: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            status_filter: None,
        }
    }
}

/// Reqwest-backed alert feed issuing `GET {base_url}/api/alerts`.
pub struct HttpAlertFeed {
    client: reqwest::Client,
    config: FeedConfig,
}

impl HttpAlertFeed {
    /// Create a feed for the configured upstream.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint_url(&self) -> String {
        format!("{}/api/alerts", self.config.base_url.trim_end_matches('/'))
    }
}

impl AlertFeed for HttpAlertFeed {
    async fn poll_alerts(&self) -> Result<Vec<RawAlert>, FeedError> {
        let mut request = self.client.get(self.endpoint_url());
        if let Some(status) = &self.config.status_filter {
            request = request.query(&[("status", status.as_str())]);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let alerts: Vec<RawAlert> = response.json().await?;
        debug!(count = alerts.len(), "fetched alert list");
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;
    use std::net::SocketAddr;

    async fn serve(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn feed_for(addr: SocketAddr) -> HttpAlertFeed {
        HttpAlertFeed::new(FeedConfig {
            base_url: format!("http://{}", addr),
            ..FeedConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_url_tolerates_trailing_slash() {
        let feed = HttpAlertFeed::new(FeedConfig {
            base_url: "http://host:8000/".to_string(),
            ..FeedConfig::default()
        })
        .unwrap();

        assert_eq!(feed.endpoint_url(), "http://host:8000/api/alerts");
    }

    #[tokio::test]
    async fn test_fetches_alert_list() {
        let router = Router::new().route(
            "/api/alerts",
            get(|| async {
                Json(serde_json::json!([
                    {"id": "a1", "location": "Main Gate", "confidence": 92.5},
                    {"id": "a2", "camera_location": "Parking Lot"},
                ]))
            }),
        );
        let feed = feed_for(serve(router).await);

        let alerts = feed.poll_alerts().await.unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].location.as_deref(), Some("Main Gate"));
    }

    #[tokio::test]
    async fn test_status_filter_is_forwarded() {
        let router = Router::new().route(
            "/api/alerts",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("status").map(String::as_str), Some("pending"));
                Json(serde_json::json!([{"id": "a1", "status": "pending"}]))
            }),
        );
        let addr = serve(router).await;

        let feed = HttpAlertFeed::new(FeedConfig {
            base_url: format!("http://{}", addr),
            status_filter: Some("pending".to_string()),
            ..FeedConfig::default()
        })
        .unwrap();

        let alerts = feed.poll_alerts().await.unwrap();
        assert_eq!(alerts.len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_status_error() {
        let router = Router::new().route(
            "/api/alerts",
            get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let feed = feed_for(serve(router).await);

        match feed.poll_alerts().await {
            Err(FeedError::Status(500)) => {}
            other => panic!("expected Status(500), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_array_body_maps_to_decode_error() {
        let router = Router::new().route(
            "/api/alerts",
            get(|| async { Json(serde_json::json!({"alerts": []})) }),
        );
        let feed = feed_for(serve(router).await);

        match feed.poll_alerts().await {
            Err(FeedError::Decode(_)) => {}
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_upstream_maps_to_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let feed = feed_for(addr);
        match feed.poll_alerts().await {
            Err(FeedError::Transport(_)) => {}
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
