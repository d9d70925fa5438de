//! Display-ready alert cards

use crate::record::RawAlert;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Fallback label when neither location spelling is present
const UNKNOWN_LOCATION: &str = "Unknown";

/// Fallback label when neither confidence spelling is present
const UNKNOWN_CONFIDENCE: &str = "N/A";

/// A normalized alert, ready for rendering.
///
/// All fallback chains have been resolved; rendering never has to make a
/// presentation decision beyond emitting what is here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertCard {
    /// Stringified upstream id ("" when the record carried none)
    pub id: String,
    /// Snapshot image URL, when the record carried one
    pub snapshot: Option<String>,
    /// Display location, never empty
    pub location: String,
    /// Confidence display label, always ending in `%`
    pub confidence_label: String,
    /// Review page link for this alert
    pub review_href: String,
    /// Detection time formatted for display, when the record carried one
    pub captured_at: Option<String>,
}

impl RawAlert {
    /// Normalize a raw record into a display card.
    ///
    /// Total: every record maps to a card. Missing fields resolve through
    /// the fallback chains; empty strings count as missing.
    pub fn into_card(self) -> AlertCard {
        let id = self.id.map(|id| id.to_string()).unwrap_or_default();

        let location = non_empty(self.location)
            .or_else(|| non_empty(self.camera_location))
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

        let confidence_label = match self.confidence.or(self.confidence_score) {
            Some(value) => format!("{}%", value),
            None => format!("{}%", UNKNOWN_CONFIDENCE),
        };

        let captured_at = self.timestamp.and_then(format_epoch_seconds);

        AlertCard {
            review_href: format!("/alert/{}", id),
            id,
            snapshot: non_empty(self.snapshot),
            location,
            confidence_label,
            captured_at,
        }
    }
}

/// Normalize a batch, preserving input order.
pub fn normalize_batch(records: Vec<RawAlert>) -> Vec<AlertCard> {
    records.into_iter().map(RawAlert::into_card).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn format_epoch_seconds(epoch: f64) -> Option<String> {
    if !epoch.is_finite() {
        return None;
    }
    let secs = epoch.trunc() as i64;
    let nanos = (epoch.fract().abs() * 1e9) as u32;
    DateTime::from_timestamp(secs, nanos).map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AlertId;
    use proptest::prelude::*;

    fn record() -> RawAlert {
        RawAlert {
            id: Some(AlertId::Text("a1".to_string())),
            ..RawAlert::default()
        }
    }

    #[test]
    fn test_location_prefers_primary_spelling() {
        let card = RawAlert {
            location: Some("Main Gate".to_string()),
            camera_location: Some("Parking Lot".to_string()),
            ..record()
        }
        .into_card();

        assert_eq!(card.location, "Main Gate");
    }

    #[test]
    fn test_location_falls_back_to_camera_location() {
        let card = RawAlert {
            camera_location: Some("Parking Lot".to_string()),
            ..record()
        }
        .into_card();

        assert_eq!(card.location, "Parking Lot");
    }

    #[test]
    fn test_location_falls_back_to_unknown() {
        assert_eq!(record().into_card().location, "Unknown");
    }

    #[test]
    fn test_empty_location_counts_as_missing() {
        let card = RawAlert {
            location: Some("   ".to_string()),
            camera_location: Some("North Fence".to_string()),
            ..record()
        }
        .into_card();

        assert_eq!(card.location, "North Fence");
    }

    #[test]
    fn test_confidence_prefers_primary_spelling() {
        let card = RawAlert {
            confidence: Some(92.5),
            confidence_score: Some(11.0),
            ..record()
        }
        .into_card();

        assert_eq!(card.confidence_label, "92.5%");
    }

    #[test]
    fn test_confidence_falls_back_to_score() {
        let card = RawAlert {
            confidence_score: Some(88.0),
            ..record()
        }
        .into_card();

        assert_eq!(card.confidence_label, "88%");
    }

    #[test]
    fn test_confidence_falls_back_to_na() {
        assert_eq!(record().into_card().confidence_label, "N/A%");
    }

    #[test]
    fn test_review_link_uses_id() {
        let card = record().into_card();
        assert_eq!(card.review_href, "/alert/a1");

        let card = RawAlert {
            id: Some(AlertId::Number(42)),
            ..RawAlert::default()
        }
        .into_card();
        assert_eq!(card.review_href, "/alert/42");
    }

    #[test]
    fn test_timestamp_formats_as_utc() {
        let card = RawAlert {
            timestamp: Some(1722800000.0),
            ..record()
        }
        .into_card();

        assert_eq!(card.captured_at.as_deref(), Some("2024-08-04 19:33:20 UTC"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let records = vec![
            RawAlert {
                id: Some(AlertId::Number(1)),
                ..RawAlert::default()
            },
            RawAlert {
                id: Some(AlertId::Number(2)),
                ..RawAlert::default()
            },
            RawAlert {
                id: Some(AlertId::Number(3)),
                ..RawAlert::default()
            },
        ];

        let ids: Vec<String> = normalize_batch(records).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    proptest! {
        #[test]
        fn prop_confidence_label_always_ends_in_percent(
            confidence in proptest::option::of(0.0f64..100.0),
            score in proptest::option::of(0.0f64..100.0),
        ) {
            let card = RawAlert {
                confidence,
                confidence_score: score,
                ..RawAlert::default()
            }
            .into_card();

            prop_assert!(card.confidence_label.ends_with('%'));
        }

        #[test]
        fn prop_location_never_empty(
            location in proptest::option::of("[ a-zA-Z]{0,12}"),
            camera_location in proptest::option::of("[ a-zA-Z]{0,12}"),
        ) {
            let card = RawAlert {
                location,
                camera_location,
                ..RawAlert::default()
            }
            .into_card();

            prop_assert!(!card.location.trim().is_empty());
        }
    }
}
