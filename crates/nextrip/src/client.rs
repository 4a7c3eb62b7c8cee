//! Reqwest-backed NexTrip client.

use std::future::Future;
use std::pin::Pin;

use crate::error::{NexTripError, Result};
use crate::models::VehicleRecord;
use crate::route::RouteId;
use crate::source::VehicleSource;

pub const DEFAULT_BASE_URL: &str = "https://svc.metrotransit.org";

pub struct NexTripClient {
    base_url: String,
    client: reqwest::Client,
}

impl NexTripClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn vehicles_url(&self, route: RouteId) -> String {
        format!("{}/nextrip/vehicles/{}", self.base_url, route)
    }

    /// Fetch the current vehicle positions for a route.
    ///
    /// Non-2xx statuses and undecodable bodies are errors; the caller owns
    /// any retry policy.
    pub async fn vehicles_on_route(&self, route: RouteId) -> Result<Vec<VehicleRecord>> {
        let url = self.vehicles_url(route);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NexTripError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NexTripError::Status(response.status().as_u16()));
        }

        let vehicles: Vec<VehicleRecord> = response
            .json()
            .await
            .map_err(|e| NexTripError::InvalidData(e.to_string()))?;

        tracing::debug!(route = %route, vehicles = vehicles.len(), "fetched vehicle batch");
        Ok(vehicles)
    }
}

impl Default for NexTripClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleSource for NexTripClient {
    fn vehicles_on_route(
        &self,
        route: RouteId,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<VehicleRecord>>> + Send + '_>> {
        Box::pin(NexTripClient::vehicles_on_route(self, route))
    }
}
