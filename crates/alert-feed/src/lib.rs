//! Upstream Alerts API Client
//!
//! Fetches alert records from the detection backend over HTTP. The fetch
//! seam is a trait so the polling scheduler can be driven without a
//! network in tests.

mod client;
mod error;
mod feed;

pub use client::{FeedConfig, HttpAlertFeed};
pub use error::FeedError;
pub use feed::AlertFeed;
