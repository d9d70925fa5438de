//! Dashboard configuration

use ::config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dashboard service configuration.
///
/// Layered: built-in defaults, then an optional TOML file, then
/// `SENTRYVIEW_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Listen address for the dashboard server
    pub listen: String,
    /// Base URL of the detection backend serving `/api/alerts`
    pub upstream_url: String,
    /// Poll cadence in milliseconds
    pub poll_interval_ms: u64,
    /// Upstream request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Restrict the alert listing to one review status
    pub status_filter: Option<String>,
    /// Serve this JSON fixture at `/api/alerts` (demo mode, no backend)
    pub mock_alerts_path: Option<PathBuf>,
    /// Log level (error / warn / info / debug / trace)
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
            upstream_url: "http://127.0.0.1:8000".to_string(),
            poll_interval_ms: 2000,
            request_timeout_ms: 2000,
            status_filter: None,
            mock_alerts_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration, layering `path` (when given) and environment
    /// variables over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = DashboardConfig::default();

        let mut builder = Config::builder()
            .set_default("listen", defaults.listen)?
            .set_default("upstream_url", defaults.upstream_url)?
            .set_default("poll_interval_ms", defaults.poll_interval_ms as i64)?
            .set_default("request_timeout_ms", defaults.request_timeout_ms as i64)?
            .set_default("log_level", defaults.log_level)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(Environment::with_prefix("SENTRYVIEW"));

        builder.build()?.try_deserialize()
    }

    /// Load configuration using the file named by `SENTRYVIEW_CONFIG`,
    /// when set.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let path = std::env::var("SENTRYVIEW_CONFIG").ok().map(PathBuf::from);
        Self::load(path.as_deref())
    }
}
