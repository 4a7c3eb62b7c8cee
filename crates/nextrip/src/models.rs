//! Serde models for the NexTrip vehicles payload.
//!
//! The feed is consumed as-is: fields the tracker does not use are ignored,
//! and fields the API sometimes serves as numbers instead of strings are
//! accepted either way.

use chrono::{DateTime, TimeZone, Utc};
use geo::Point;
use serde::{Deserialize, Deserializer};

use crate::identifiers::TripId;

/// One vehicle's current position and trip metadata, as reported per poll.
#[derive(Clone, Debug, Deserialize)]
pub struct VehicleRecord {
    /// Stable key for this vehicle's current run.
    pub trip_id: TripId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub route_id: String,
    /// Compass direction of travel, e.g. "NB" or "SB". Not always present.
    #[serde(default)]
    pub direction: Option<String>,
    /// Terminal letter for branched routes. Not always present.
    #[serde(default)]
    pub terminal: Option<String>,
    #[serde(default)]
    pub bearing: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub odometer: Option<f64>,
    /// Unix seconds of the position fix, when the feed reports it.
    #[serde(default)]
    pub location_time: Option<i64>,
}

impl VehicleRecord {
    /// Position as an (x = longitude, y = latitude) point.
    pub fn position(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }

    pub fn direction_or_unknown(&self) -> &str {
        self.direction.as_deref().unwrap_or("?")
    }

    pub fn terminal_or_unknown(&self) -> &str {
        self.terminal.as_deref().unwrap_or("Unknown")
    }

    /// Time of the position fix, when the feed reports one.
    pub fn location_time_utc(&self) -> Option<DateTime<Utc>> {
        self.location_time
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a string or number")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "trip_id": "22209108",
            "direction_id": 0,
            "direction": "NB",
            "location_time": 1714581120,
            "route_id": "10",
            "terminal": "Mall",
            "latitude": 44.9,
            "longitude": -93.1,
            "bearing": 180.0,
            "odometer": 12345.0,
            "speed": 12.4
        }"#;

        let record: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.trip_id, TripId::new("22209108"));
        assert_eq!(record.route_id, "10");
        assert_eq!(record.direction.as_deref(), Some("NB"));
        assert_eq!(record.terminal.as_deref(), Some("Mall"));
        assert_eq!(record.position(), Point::new(-93.1, 44.9));
        assert!(record.location_time_utc().is_some());
    }

    #[test]
    fn test_decode_minimal_record() {
        let json = r#"{
            "trip_id": 17,
            "route_id": 63,
            "latitude": 44.95,
            "longitude": -93.25
        }"#;

        let record: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.trip_id, TripId::new("17"));
        assert_eq!(record.route_id, "63");
        assert_eq!(record.direction_or_unknown(), "?");
        assert_eq!(record.terminal_or_unknown(), "Unknown");
        assert!(record.location_time_utc().is_none());
    }

    #[test]
    fn test_decode_batch() {
        let json = r#"[
            {"trip_id": "A1", "route_id": "10", "latitude": 44.9, "longitude": -93.1},
            {"trip_id": "A2", "route_id": "10", "latitude": 45.0, "longitude": -93.2}
        ]"#;

        let batch: Vec<VehicleRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(batch.len(), 2);
    }
}
