//! SentryView Alert Dashboard - Main Entry Point

use dashboard::{init_logging, run, DashboardConfig};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::load_from_env()?;
    init_logging(config.log_level.parse().unwrap_or(Level::INFO));

    info!("=== SentryView Alert Dashboard v{} ===", env!("CARGO_PKG_VERSION"));

    run(config).await
}
