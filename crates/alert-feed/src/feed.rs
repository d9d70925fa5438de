//! The fetch seam

use crate::error::FeedError;
use alert_model::RawAlert;
use std::future::Future;
use std::sync::Arc;

/// A source of alert records.
///
/// Implemented by [`crate::HttpAlertFeed`] for production and by canned
/// feeds in scheduler tests.
pub trait AlertFeed: Send + Sync {
    /// Fetch the current alert list from the source.
    fn poll_alerts(&self) -> impl Future<Output = Result<Vec<RawAlert>, FeedError>> + Send;
}

/// Share a feed behind an `Arc` wherever an owned `AlertFeed` is expected.
impl<T: AlertFeed + ?Sized> AlertFeed for Arc<T> {
    fn poll_alerts(&self) -> impl Future<Output = Result<Vec<RawAlert>, FeedError>> + Send {
        (**self).poll_alerts()
    }
}
