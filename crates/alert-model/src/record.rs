//! Raw upstream alert records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert identifier as delivered by the upstream API.
///
/// The detection backend assigns UUID strings, but fixture data and older
/// deployments use plain integers. Both forms are accepted and rendered
/// the same way in review links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlertId {
    /// String identifier (UUIDs, device-scoped ids)
    Text(String),
    /// Integer identifier
    Number(i64),
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertId::Text(s) => f.write_str(s),
            AlertId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One alert record as returned by `GET /api/alerts`.
///
/// The upstream payload is treated as opaque JSON: every field is optional
/// and unknown fields are ignored. Field presence varies by producer: the
/// detection pipeline posts `location`, older camera firmware reports
/// `camera_location`, and the two confidence spellings coexist for the
/// same reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAlert {
    #[serde(default)]
    pub id: Option<AlertId>,
    /// Snapshot image URL captured at detection time
    #[serde(default)]
    pub snapshot: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Legacy spelling of `location`
    #[serde(default)]
    pub camera_location: Option<String>,
    /// Detection confidence as a percentage
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Legacy spelling of `confidence`
    #[serde(default)]
    pub confidence_score: Option<f64>,
    /// Reporting device
    #[serde(default)]
    pub device_id: Option<String>,
    /// Detected object class
    #[serde(default)]
    pub cls: Option<String>,
    /// Review status (pending / confirm / reject)
    #[serde(default)]
    pub status: Option<String>,
    /// Detection time, epoch seconds
    #[serde(default)]
    pub timestamp: Option<f64>,
}
