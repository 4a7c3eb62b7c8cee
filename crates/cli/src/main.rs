//! Command-line live tracker: polls NexTrip for one route and mirrors the
//! markers into a GeoJSON snapshot any map viewer can follow.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bus_watch_nextrip::{NexTripClient, RouteId, DEFAULT_BASE_URL};
use bus_watch_tracker::{GeoJsonSurface, PollConfig, Tracker, TrackerEvent};

#[derive(Parser, Debug)]
#[command(name = "bus-watch", about = "Track live bus positions for a Metro Transit route")]
struct Args {
    /// Route number to track (2-852)
    route: String,

    /// Seconds between polls
    #[arg(long, default_value_t = 30)]
    interval_secs: u64,

    /// Write the current markers to this GeoJSON file every cycle
    #[arg(long)]
    out: Option<PathBuf>,

    /// NexTrip API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Validation happens before any client exists; a bad route never
    // reaches the network.
    let route = RouteId::parse(&args.route)
        .with_context(|| format!("cannot track route {:?}", args.route))?;

    let client = Arc::new(NexTripClient::with_base_url(&args.base_url));
    let surface = match &args.out {
        Some(path) => GeoJsonSurface::with_snapshot_path(path),
        None => GeoJsonSurface::new(),
    };

    let mut tracker = Tracker::new(
        client,
        PollConfig {
            interval: Duration::from_secs(args.interval_secs),
        },
    );
    let mut events = tracker.start(route, Box::new(surface))?;

    if let Some(path) = &args.out {
        info!(%route, snapshot = %path.display(), "tracking started");
    } else {
        info!(%route, "tracking started");
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
            event = events.recv() => match event {
                Some(TrackerEvent::Updated { vehicles }) => {
                    info!(%route, vehicles, "positions updated");
                }
                Some(TrackerEvent::NoVehicles) => {
                    warn!(%route, "no buses in service for this route");
                }
                Some(TrackerEvent::FetchFailed { error }) => {
                    error!(%route, %error, "fetch failed, retrying on schedule");
                }
                None => break,
            },
        }
    }

    tracker.stop(route);
    Ok(())
}
