//! Alert Review Dashboard
//!
//! Wires the poll scheduler to the page server: one shared container
//! registry, one poller task keeping it current, and an axum surface
//! serving the dashboard page built from it.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod rate_limit;
mod routes;
mod shutdown;

pub use self::config::DashboardConfig;
pub use rate_limit::{create_governor_config, RateLimitConfig};
pub use shutdown::create_shutdown_token;

use alert_feed::{FeedConfig, HttpAlertFeed};
use card_render::{ContainerRegistry, ALERTS_CONTAINER};
use poll_scheduler::{AlertsPoller, PollerConfig};

/// Application state shared across handlers
pub struct AppState {
    /// Container registry the poller renders into
    pub registry: Arc<ContainerRegistry>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
    /// Fixture served at `/api/alerts` in demo mode
    pub mock_alerts_path: Option<PathBuf>,
}

impl AppState {
    /// Create new application state around an existing registry.
    pub fn new(registry: Arc<ContainerRegistry>, mock_alerts_path: Option<PathBuf>) -> Self {
        Self {
            registry,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
            mock_alerts_path,
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Create the application router.
///
/// The mock alerts endpoint is only mounted when a fixture is configured;
/// otherwise `/api/alerts` stays with the real backend.
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/", get(routes::pages::dashboard))
        .route("/healthz", get(health_handler));

    if state.mock_alerts_path.is_some() {
        router = router.route("/api/alerts", get(routes::mock::serve_alerts));
    }

    router.with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Initialize logging
pub fn init_logging(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the dashboard: poller plus page server, until SIGINT/SIGTERM.
pub async fn run(config: DashboardConfig) -> anyhow::Result<()> {
    let registry = Arc::new(ContainerRegistry::new());
    registry.register(ALERTS_CONTAINER);

    let feed = HttpAlertFeed::new(FeedConfig {
        base_url: config.upstream_url.clone(),
        request_timeout: Duration::from_millis(config.request_timeout_ms),
        status_filter: config.status_filter.clone(),
    })?;

    let cancel = create_shutdown_token();

    let poller = AlertsPoller::new(
        feed,
        registry.clone(),
        PollerConfig {
            interval: Duration::from_millis(config.poll_interval_ms),
            container: ALERTS_CONTAINER.to_string(),
        },
    );
    let poller_task = tokio::spawn(poller.run(cancel.clone()));

    let state = Arc::new(AppState::new(registry, config.mock_alerts_path.clone()));
    let governor = create_governor_config(&RateLimitConfig::lenient());
    let app = create_router(state)
        .layer(GovernorLayer { config: governor })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!(listen = %config.listen, upstream = %config.upstream_url, "dashboard listening");

    let shutdown = cancel.clone();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { shutdown.cancelled().await })
    .await?;

    poller_task.await?;
    info!("dashboard stopped");
    Ok(())
}
