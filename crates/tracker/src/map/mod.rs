//! Map rendering seam.
//!
//! The tracker never talks to a concrete map widget; it drives a
//! [`MapSurface`], which a frontend implements however it renders. The crate
//! ships two: [`GeoJsonSurface`] for file-based viewers and
//! [`RecordingSurface`] for headless use and tests.

pub mod geojson;
pub mod recording;

use std::fmt;

use bus_watch_nextrip::{TripId, VehicleRecord};
use geo::Point;

pub use self::geojson::GeoJsonSurface;
pub use self::recording::{RecordingSurface, SurfaceOp};

/// Fixed view over the Twin Cities metro area.
#[derive(Clone, Copy, Debug)]
pub struct MapConfig {
    /// View center as (x = longitude, y = latitude).
    pub center: Point,
    pub zoom: u8,
    pub icon: MarkerIcon,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Point::new(-93.2, 44.96),
            zoom: 11,
            icon: MarkerIcon::default(),
        }
    }
}

/// Raster tile layer backing the map view.
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// The bus icon every marker uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerIcon {
    pub asset: &'static str,
    pub size_px: (u32, u32),
    pub anchor_px: (u32, u32),
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            asset: "bus.png",
            size_px: (40, 40),
            anchor_px: (20, 20),
        }
    }
}

/// One vehicle's map annotation: position plus popup text.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Point,
    pub popup: String,
    pub icon: MarkerIcon,
}

impl Marker {
    pub fn for_vehicle(record: &VehicleRecord) -> Self {
        let popup = format!(
            "Bus Route: {}\nDirection: {}\nTerminal: {}",
            record.route_id,
            record.direction_or_unknown(),
            record.terminal_or_unknown(),
        );
        Self {
            position: record.position(),
            popup,
            icon: MarkerIcon::default(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.5}, {:.5})",
            self.position.y(),
            self.position.x()
        )
    }
}

/// Rendering surface the reconciler mutates.
///
/// Implementations must uphold: after any sequence of calls, at most one
/// visual marker exists per trip id.
pub trait MapSurface: Send {
    fn add_marker(&mut self, trip: &TripId, marker: &Marker);
    fn remove_marker(&mut self, trip: &TripId);
    fn clear(&mut self);

    /// Called once per poll cycle after reconciliation. Surfaces that batch
    /// output (e.g. snapshot files) hook this; the default is a no-op.
    fn flush(&mut self) {}
}
