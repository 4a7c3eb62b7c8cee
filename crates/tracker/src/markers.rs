//! Marker state and reconciliation.
//!
//! The marker set is owned by the poll loop and mutated only here, which is
//! what makes the policies unit-testable without a live map. Two policies
//! exist in the wild for this kind of tracker: incremental (move-or-create,
//! leaves stale markers behind) and rebuild (clear everything, re-add the
//! batch). Rebuild keeps the one-marker-per-reported-trip invariant correct
//! by construction, so it is what the poll loop uses; the incremental
//! variant is kept for surfaces where discarding visuals every cycle is too
//! expensive, with its staleness limitation documented by test.

use std::collections::HashMap;

use bus_watch_nextrip::{TripId, VehicleRecord};

use crate::map::{MapSurface, Marker};

/// At most one marker per trip identifier.
#[derive(Clone, Debug, Default)]
pub struct MarkerSet {
    markers: HashMap<TripId, Marker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, trip: &TripId) -> Option<&Marker> {
        self.markers.get(trip)
    }

    pub fn contains(&self, trip: &TripId) -> bool {
        self.markers.contains_key(trip)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TripId, &Marker)> {
        self.markers.iter()
    }
}

/// Rebuild policy: drop every existing marker, then add one per record.
///
/// Afterwards the set holds exactly one marker per trip id in `batch`
/// (last record wins if the feed repeats a trip id), positioned at that
/// record's coordinates.
pub fn reconcile(set: &mut MarkerSet, batch: &[VehicleRecord], surface: &mut dyn MapSurface) {
    surface.clear();
    set.markers.clear();

    for record in batch {
        let marker = Marker::for_vehicle(record);
        surface.add_marker(&record.trip_id, &marker);
        set.markers.insert(record.trip_id.clone(), marker);
    }
}

/// Incremental policy: move existing markers, create missing ones.
///
/// Trip ids absent from `batch` are left in place. That staleness is the
/// known trade-off for never discarding a visual object.
pub fn reconcile_incremental(
    set: &mut MarkerSet,
    batch: &[VehicleRecord],
    surface: &mut dyn MapSurface,
) {
    for record in batch {
        let marker = Marker::for_vehicle(record);
        if set.contains(&record.trip_id) {
            surface.remove_marker(&record.trip_id);
        }
        surface.add_marker(&record.trip_id, &marker);
        set.markers.insert(record.trip_id.clone(), marker);
    }
}
