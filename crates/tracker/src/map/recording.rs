//! In-memory surface that records every mutation.
//!
//! Cloning shares the underlying state, so a test (or a headless embedder)
//! can hand one clone to the poll loop and inspect another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bus_watch_nextrip::TripId;

use super::{MapSurface, Marker};

/// A single surface mutation, in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Add(TripId),
    Remove(TripId),
    Clear,
}

#[derive(Clone, Default)]
pub struct RecordingSurface {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    markers: HashMap<TripId, Marker>,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> HashMap<TripId, Marker> {
        self.inner.lock().unwrap().markers.clone()
    }

    pub fn marker(&self, trip: &TripId) -> Option<Marker> {
        self.inner.lock().unwrap().markers.get(trip).cloned()
    }

    pub fn marker_count(&self) -> usize {
        self.inner.lock().unwrap().markers.len()
    }

    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.inner.lock().unwrap().ops.clone()
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, trip: &TripId, marker: &Marker) {
        let mut inner = self.inner.lock().unwrap();
        inner.markers.insert(trip.clone(), marker.clone());
        inner.ops.push(SurfaceOp::Add(trip.clone()));
    }

    fn remove_marker(&mut self, trip: &TripId) {
        let mut inner = self.inner.lock().unwrap();
        inner.markers.remove(trip);
        inner.ops.push(SurfaceOp::Remove(trip.clone()));
    }

    fn clear(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.markers.clear();
        inner.ops.push(SurfaceOp::Clear);
    }
}
