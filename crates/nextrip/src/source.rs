//! Pluggable vehicle fetching trait.
//!
//! External crates implement this to provide vehicle positions; the poll
//! loop in `bus-watch-tracker` only ever sees this seam, which keeps it
//! testable without a live API.

use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::models::VehicleRecord;
use crate::route::RouteId;

/// Fetch the current vehicle positions for a route.
pub trait VehicleSource: Send + Sync {
    fn vehicles_on_route(
        &self,
        route: RouteId,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<VehicleRecord>>> + Send + '_>>;
}
