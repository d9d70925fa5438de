//! Alert Polling Scheduler
//!
//! Drives the fetch-normalize-render sequence on a fixed interval. Cycles
//! are serialized: a tick fires only after the previous cycle completes,
//! so two renders can never race for the container.

mod poller;

pub use poller::{AlertsPoller, PollerConfig};
