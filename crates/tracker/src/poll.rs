//! Self-rescheduling poll loop.
//!
//! One logical timer: fetch, reconcile, then sleep a fixed interval and go
//! again. The delay is measured from the completion of the previous attempt
//! (fixed delay, not fixed rate), and every path through an attempt reaches
//! the sleep — fetch errors, decode errors, and empty batches all leave the
//! loop running on the same cadence.

use std::sync::Arc;
use std::time::Duration;

use bus_watch_nextrip::{NexTripError, RouteId, VehicleSource};
use tokio::sync::mpsc;

use crate::map::MapSurface;
use crate::markers::{reconcile, MarkerSet};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(30_000);

#[derive(Clone, Copy, Debug)]
pub struct PollConfig {
    /// Delay between the end of one fetch attempt and the start of the next.
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// What a frontend would surface to the user: one event per noteworthy
/// poll outcome.
#[derive(Debug)]
pub enum TrackerEvent {
    /// A batch was reconciled onto the map.
    Updated { vehicles: usize },
    /// The feed reported no vehicles in service. Sent once per dry spell,
    /// re-armed when vehicles come back.
    NoVehicles,
    /// The fetch failed; the loop keeps polling on the same cadence.
    FetchFailed { error: NexTripError },
}

/// Run the poll loop until the owning task is cancelled.
pub async fn run_poll_loop(
    route: RouteId,
    source: Arc<dyn VehicleSource>,
    mut surface: Box<dyn MapSurface>,
    config: PollConfig,
    events: mpsc::UnboundedSender<TrackerEvent>,
) {
    let mut markers = MarkerSet::new();
    let mut no_vehicles_notified = false;

    tracing::info!(%route, interval_ms = config.interval.as_millis() as u64, "poll loop started");

    loop {
        poll_once(
            route,
            source.as_ref(),
            &mut markers,
            surface.as_mut(),
            &mut no_vehicles_notified,
            &events,
        )
        .await;

        tokio::time::sleep(config.interval).await;
    }
}

async fn poll_once(
    route: RouteId,
    source: &dyn VehicleSource,
    markers: &mut MarkerSet,
    surface: &mut dyn MapSurface,
    no_vehicles_notified: &mut bool,
    events: &mpsc::UnboundedSender<TrackerEvent>,
) {
    match source.vehicles_on_route(route).await {
        Ok(batch) => {
            tracing::debug!(%route, vehicles = batch.len(), "reconciling batch");

            if batch.is_empty() {
                if !*no_vehicles_notified {
                    tracing::info!(%route, "no vehicles in service");
                    let _ = events.send(TrackerEvent::NoVehicles);
                    *no_vehicles_notified = true;
                }
            } else {
                *no_vehicles_notified = false;
            }

            reconcile(markers, &batch, surface);
            surface.flush();

            if !batch.is_empty() {
                let _ = events.send(TrackerEvent::Updated {
                    vehicles: batch.len(),
                });
            }
        }
        Err(error) => {
            // Marker state is untouched on failure; the stale positions stay
            // visible until a fetch succeeds again.
            tracing::warn!(%route, %error, "vehicle fetch failed, will retry");
            let _ = events.send(TrackerEvent::FetchFailed { error });
        }
    }
}
