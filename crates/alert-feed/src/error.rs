//! Feed Error Types

use thiserror::Error;

/// Errors that can occur while fetching alerts from the upstream API.
///
/// Consumers collapse all three into one user-visible failure state; the
/// distinction exists for diagnostics only.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    /// Connection, timeout, or other transport failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// Response body was not a JSON array of alert records
    #[error("invalid alerts payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FeedError::Decode(err.to_string())
        } else {
            FeedError::Transport(err.to_string())
        }
    }
}
