//! GeoJSON-backed map surface.
//!
//! Keeps the current markers as a `FeatureCollection` and optionally writes
//! an atomic snapshot file each poll cycle, so any GeoJSON-aware viewer can
//! follow the vehicles live.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use bus_watch_nextrip::TripId;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

use super::{MapSurface, Marker};

#[derive(Default)]
pub struct GeoJsonSurface {
    markers: HashMap<TripId, Marker>,
    snapshot_path: Option<PathBuf>,
}

impl GeoJsonSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the collection to `path` on every flush.
    pub fn with_snapshot_path(path: impl Into<PathBuf>) -> Self {
        Self {
            markers: HashMap::new(),
            snapshot_path: Some(path.into()),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Current markers as a feature collection, ordered by trip id.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut entries: Vec<_> = self.markers.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));

        FeatureCollection {
            bbox: None,
            features: entries
                .into_iter()
                .map(|(trip, marker)| feature(trip, marker))
                .collect(),
            foreign_members: None,
        }
    }

    fn write_snapshot(&self) -> io::Result<()> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };
        let json = GeoJson::from(self.to_feature_collection()).to_string();

        // Write-then-rename so a reader never sees a half-written file.
        let tmp = path.with_extension("geojson.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)
    }
}

fn feature(trip: &TripId, marker: &Marker) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("trip_id".into(), JsonValue::from(trip.as_str()));
    properties.insert("popup".into(), JsonValue::from(marker.popup.clone()));
    properties.insert("icon".into(), JsonValue::from(marker.icon.asset));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            marker.position.x(),
            marker.position.y(),
        ]))),
        id: Some(geojson::feature::Id::String(trip.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

impl MapSurface for GeoJsonSurface {
    fn add_marker(&mut self, trip: &TripId, marker: &Marker) {
        self.markers.insert(trip.clone(), marker.clone());
    }

    fn remove_marker(&mut self, trip: &TripId) {
        self.markers.remove(trip);
    }

    fn clear(&mut self) {
        self.markers.clear();
    }

    fn flush(&mut self) {
        if let Err(error) = self.write_snapshot() {
            tracing::warn!(%error, "failed to write geojson snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;

    use crate::map::MarkerIcon;

    fn marker(lon: f64, lat: f64) -> Marker {
        Marker {
            position: Point::new(lon, lat),
            popup: "Bus Route: 10\nDirection: NB\nTerminal: Mall".to_string(),
            icon: MarkerIcon::default(),
        }
    }

    #[test]
    fn test_feature_collection_contents() {
        let mut surface = GeoJsonSurface::new();
        surface.add_marker(&TripId::new("B2"), &marker(-93.2, 45.0));
        surface.add_marker(&TripId::new("A1"), &marker(-93.1, 44.9));

        let fc = surface.to_feature_collection();
        assert_eq!(fc.features.len(), 2);

        // Ordered by trip id for stable output.
        let first = &fc.features[0];
        assert_eq!(
            first.id,
            Some(geojson::feature::Id::String("A1".to_string()))
        );
        match &first.geometry.as_ref().unwrap().value {
            Value::Point(coords) => assert_eq!(coords, &vec![-93.1, 44.9]),
            other => panic!("expected point, got {:?}", other),
        }
        let props = first.properties.as_ref().unwrap();
        assert_eq!(props["popup"], "Bus Route: 10\nDirection: NB\nTerminal: Mall");
        assert_eq!(props["icon"], "bus.png");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut surface = GeoJsonSurface::new();
        surface.add_marker(&TripId::new("A1"), &marker(-93.1, 44.9));
        surface.add_marker(&TripId::new("B2"), &marker(-93.2, 45.0));

        surface.remove_marker(&TripId::new("A1"));
        assert_eq!(surface.marker_count(), 1);

        surface.clear();
        assert_eq!(surface.marker_count(), 0);
        assert!(surface.to_feature_collection().features.is_empty());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vehicles.geojson");

        let mut surface = GeoJsonSurface::with_snapshot_path(&path);
        surface.add_marker(&TripId::new("A1"), &marker(-93.1, 44.9));
        surface.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: GeoJson = written.parse().unwrap();
        match parsed {
            GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 1),
            other => panic!("expected feature collection, got {:?}", other),
        }
    }
}
