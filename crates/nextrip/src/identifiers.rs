//! Type-safe identifier for a vehicle's current trip.
//!
//! Uses Arc<str> for cheap cloning and minimal memory overhead. The trip id
//! is the stable key correlating one vehicle across successive polls.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

#[derive(Clone, Debug)]
pub struct TripId(Arc<str>);

impl TripId {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for TripId {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for TripId {}

impl Hash for TripId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TripId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TripId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// The API serves trip ids as either JSON strings or bare numbers depending
// on the feed, so accept both.
impl<'de> Deserialize<'de> for TripId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TripIdVisitor;

        impl<'de> Visitor<'de> for TripIdVisitor {
            type Value = TripId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer trip id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TripId, E> {
                Ok(TripId::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TripId, E> {
                Ok(TripId::new(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TripId, E> {
                Ok(TripId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(TripIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_id_equality() {
        let id1 = TripId::new("trip_123");
        let id2 = TripId::new("trip_123");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert!(Arc::ptr_eq(&id1.0, &id3.0)); // Clone shares Arc
    }

    #[test]
    fn test_trip_id_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(TripId::new("A1"), 42);

        assert_eq!(map.get(&TripId::new("A1")), Some(&42));
    }

    #[test]
    fn test_trip_id_display() {
        let id = TripId::new("A1");
        assert_eq!(format!("{}", id), "A1");
    }

    #[test]
    fn test_trip_id_conversions() {
        let _id1: TripId = "trip_1".into();
        let _id2: TripId = String::from("trip_2").into();
    }

    #[test]
    fn test_trip_id_deserialize_string_or_number() {
        let from_str: TripId = serde_json::from_str("\"A1\"").unwrap();
        assert_eq!(from_str, TripId::new("A1"));

        let from_num: TripId = serde_json::from_str("22209108").unwrap();
        assert_eq!(from_num, TripId::new("22209108"));
    }
}
