//! Poll Cycle Implementation

use alert_feed::AlertFeed;
use alert_model::normalize_batch;
use card_render::{render_cards, render_error, ContainerRegistry, ALERTS_CONTAINER};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Default poll cadence
const DEFAULT_INTERVAL_MS: u64 = 2000;

/// Configuration for the alert poller
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Time between poll cycles
    pub interval: Duration,
    /// Container the rendered fragment is written to
    pub container: String,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            container: ALERTS_CONTAINER.to_string(),
        }
    }
}

/// Scheduled task that keeps the alert container current.
///
/// Each cycle polls the feed, normalizes the records, and replaces the
/// container fragment. Failures are contained within the cycle: the
/// diagnostic is logged, the container shows the error element, and the
/// next tick proceeds as if nothing happened.
pub struct AlertsPoller<F: AlertFeed> {
    feed: F,
    registry: Arc<ContainerRegistry>,
    config: PollerConfig,
}

impl<F: AlertFeed> AlertsPoller<F> {
    /// Create a poller writing into `registry`.
    pub fn new(feed: F, registry: Arc<ContainerRegistry>, config: PollerConfig) -> Self {
        Self {
            feed,
            registry,
            config,
        }
    }

    /// Run until `cancel` fires.
    ///
    /// The first cycle runs immediately; subsequent cycles follow the
    /// configured interval. A cycle slower than the interval delays the
    /// next tick instead of overlapping it, and ticks missed during a slow
    /// cycle are coalesced.
    pub async fn run(self, cancel: CancellationToken) {
        info!(
            interval_ms = self.config.interval.as_millis() as u64,
            container = %self.config.container,
            "starting alert poller"
        );

        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // Biased so a pending shutdown always wins over a due tick.
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => self.run_cycle().await,
            }
        }

        info!("alert poller stopped");
    }

    /// Execute one fetch-normalize-render cycle.
    ///
    /// Never panics and never propagates an error; an absent container
    /// turns the render step into a no-op.
    pub async fn run_cycle(&self) {
        match self.feed.poll_alerts().await {
            Ok(records) => {
                let cards = normalize_batch(records);
                let count = cards.len();
                if self.registry.replace(&self.config.container, render_cards(&cards)) {
                    debug!(cards = count, "alert container updated");
                }
            }
            Err(err) => {
                error!(error = %err, "failed to load alerts");
                self.registry.replace(&self.config.container, render_error());
            }
        }
    }
}
