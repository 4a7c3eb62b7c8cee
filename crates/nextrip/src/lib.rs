//! # bus-watch-nextrip
//!
//! Typed client for the Metro Transit NexTrip vehicle-position API.
//!
//! ## Features
//!
//! - **Validated route numbers**: [`RouteId`] can only be built through
//!   range-checked parsing, so a bad route never reaches the network
//! - **Typed vehicle records**: serde models tolerant of the API's
//!   string-or-number fields
//! - **Pluggable fetching**: implement [`VehicleSource`] yourself, or use
//!   the bundled reqwest-backed [`NexTripClient`]
//!
//! ## Example
//!
//! ```no_run
//! use bus_watch_nextrip::{NexTripClient, RouteId};
//!
//! # async fn demo() -> bus_watch_nextrip::Result<()> {
//! let route = RouteId::parse("10")?;
//! let client = NexTripClient::new();
//! let vehicles = client.vehicles_on_route(route).await?;
//! for vehicle in &vehicles {
//!     println!("{} at {:?}", vehicle.trip_id, vehicle.position());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod identifiers;
pub mod models;
pub mod route;
pub mod source;

pub use client::{NexTripClient, DEFAULT_BASE_URL};
pub use error::{NexTripError, Result};
pub use identifiers::TripId;
pub use models::VehicleRecord;
pub use route::{RouteId, ROUTE_MAX, ROUTE_MIN};
pub use source::VehicleSource;
