//! Tracker handle: at most one poll loop per route.

use std::collections::HashMap;
use std::sync::Arc;

use bus_watch_nextrip::{RouteId, VehicleSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::map::MapSurface;
use crate::poll::{run_poll_loop, PollConfig, TrackerEvent};

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// A second start for a route that is already being polled is ignored
    /// rather than restarting the loop, so a double-click can never spawn a
    /// duplicate timer chain.
    #[error("route {0} is already being tracked")]
    AlreadyRunning(RouteId),
}

pub struct Tracker {
    source: Arc<dyn VehicleSource>,
    config: PollConfig,
    running: HashMap<RouteId, JoinHandle<()>>,
}

impl Tracker {
    pub fn new(source: Arc<dyn VehicleSource>, config: PollConfig) -> Self {
        Self {
            source,
            config,
            running: HashMap::new(),
        }
    }

    /// Spawn a poll loop for `route` driving `surface`.
    ///
    /// Returns the event stream for the loop. Fails if the route already has
    /// a live loop; stop it first to restart with a different surface.
    pub fn start(
        &mut self,
        route: RouteId,
        surface: Box<dyn MapSurface>,
    ) -> Result<mpsc::UnboundedReceiver<TrackerEvent>, TrackerError> {
        if let Some(handle) = self.running.get(&route) {
            if !handle.is_finished() {
                return Err(TrackerError::AlreadyRunning(route));
            }
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_poll_loop(
            route,
            self.source.clone(),
            surface,
            self.config,
            tx,
        ));
        self.running.insert(route, handle);
        Ok(rx)
    }

    /// Cancel the poll loop for `route`. Returns whether one was running.
    pub fn stop(&mut self, route: RouteId) -> bool {
        match self.running.remove(&route) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self, route: RouteId) -> bool {
        self.running
            .get(&route)
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        for handle in self.running.values() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RecordingSurface;
    use bus_watch_nextrip::{Result, VehicleRecord};
    use std::future::Future;
    use std::pin::Pin;

    struct EmptySource;

    impl VehicleSource for EmptySource {
        fn vehicles_on_route(
            &self,
            _route: RouteId,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<VehicleRecord>>> + Send + '_>> {
            Box::pin(async { Ok(Vec::new()) })
        }
    }

    fn route(n: &str) -> RouteId {
        RouteId::parse(n).unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_start_rejected() {
        let mut tracker = Tracker::new(Arc::new(EmptySource), PollConfig::default());

        let _rx = tracker
            .start(route("10"), Box::new(RecordingSurface::new()))
            .unwrap();
        assert!(tracker.is_running(route("10")));

        let second = tracker.start(route("10"), Box::new(RecordingSurface::new()));
        assert!(matches!(second, Err(TrackerError::AlreadyRunning(_))));
    }

    #[tokio::test]
    async fn test_independent_routes() {
        let mut tracker = Tracker::new(Arc::new(EmptySource), PollConfig::default());

        let _rx10 = tracker
            .start(route("10"), Box::new(RecordingSurface::new()))
            .unwrap();
        let _rx63 = tracker
            .start(route("63"), Box::new(RecordingSurface::new()))
            .unwrap();

        assert!(tracker.is_running(route("10")));
        assert!(tracker.is_running(route("63")));
    }

    #[tokio::test]
    async fn test_stop_frees_the_slot() {
        let mut tracker = Tracker::new(Arc::new(EmptySource), PollConfig::default());

        let _rx = tracker
            .start(route("10"), Box::new(RecordingSurface::new()))
            .unwrap();
        assert!(tracker.stop(route("10")));
        assert!(!tracker.stop(route("10")));

        // The slot is free again after a stop.
        assert!(tracker
            .start(route("10"), Box::new(RecordingSurface::new()))
            .is_ok());
    }
}
