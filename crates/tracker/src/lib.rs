//! # bus-watch-tracker
//!
//! Live vehicle tracking core: a self-rescheduling poll loop that fetches
//! vehicle positions for a route every 30 seconds and reconciles them onto a
//! pluggable map surface as markers keyed by trip id.
//!
//! The fetch side is abstracted behind `bus_watch_nextrip::VehicleSource`
//! and the render side behind [`map::MapSurface`], so the whole loop runs
//! under a paused tokio clock in tests with no network and no map widget.

pub mod map;
pub mod markers;
pub mod poll;
pub mod tracker;

pub use map::{GeoJsonSurface, MapConfig, MapSurface, Marker, MarkerIcon, RecordingSurface};
pub use markers::{reconcile, reconcile_incremental, MarkerSet};
pub use poll::{run_poll_loop, PollConfig, TrackerEvent, DEFAULT_POLL_INTERVAL};
pub use tracker::{Tracker, TrackerError};
