use {
    crate::{
        config::{PROVIDERS, RoutingPreference},
        domain::LatLng,
    },
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    serde::Deserialize,
    serde_json::{Value, json},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Abstract interface for one-origin, many-destination travel times.
#[async_trait]
pub trait DistanceMatrixProvider: Send + Sync {
    /// Seconds of driving per destination, aligned with `destinations`.
    /// `None` where the provider returned no duration (e.g. no route).
    async fn durations(
        &self,
        origin: LatLng,
        destinations: &[LatLng],
        preference: RoutingPreference,
    ) -> Result<Vec<Option<u64>>>;
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RouteMatrixElement {
    // proto3 JSON omits zero-valued fields, so a missing index means 0.
    #[serde(default)]
    origin_index: usize,
    #[serde(default)]
    destination_index: usize,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    condition: Option<String>,
}

/// "523s" or "523.4s" → 523
pub(crate) fn parse_duration_secs(raw: &str) -> Option<u64> {
    let secs: f64 = raw.trim().strip_suffix('s')?.parse().ok()?;
    (secs.is_finite() && secs >= 0.0).then(|| secs.round() as u64)
}

/// Re-align matrix elements (which arrive in any order) with the request batch.
pub(crate) fn align_durations(elements: &[RouteMatrixElement], batch_len: usize) -> Vec<Option<u64>> {
    let mut aligned = vec![None; batch_len];
    for el in elements {
        if el.origin_index != 0 || el.destination_index >= batch_len {
            log::warn!(
                "Ignoring matrix element outside the request ({} -> {})",
                el.origin_index,
                el.destination_index
            );
            continue;
        }
        if el.condition.as_deref() == Some("ROUTE_NOT_FOUND") {
            continue;
        }
        aligned[el.destination_index] = el.duration.as_deref().and_then(parse_duration_secs);
    }
    aligned
}

fn waypoint(point: LatLng) -> Value {
    json!({
        "waypoint": {
            "location": {
                "latLng": { "latitude": point.lat, "longitude": point.lng }
            }
        }
    })
}

pub(crate) fn build_request_body(
    origin: LatLng,
    destinations: &[LatLng],
    preference: RoutingPreference,
) -> Value {
    json!({
        "origins": [waypoint(origin)],
        "destinations": destinations.iter().copied().map(waypoint).collect::<Vec<_>>(),
        "travelMode": PROVIDERS.routes.travel_mode,
        "routingPreference": preference.api_name(),
    })
}

/// Google Routes API `computeRouteMatrix` implementation.
pub struct GoogleRouteMatrix {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GoogleRouteMatrix {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_endpoint(client, api_key, PROVIDERS.routes.url)
    }

    /// Same client against another `computeRouteMatrix` URL (proxy, local mock).
    pub fn with_endpoint(
        client: reqwest::Client,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl DistanceMatrixProvider for GoogleRouteMatrix {
    async fn durations(
        &self,
        origin: LatLng,
        destinations: &[LatLng],
        preference: RoutingPreference,
    ) -> Result<Vec<Option<u64>>> {
        if destinations.is_empty() {
            return Ok(Vec::new());
        }
        if destinations.len() > PROVIDERS.routes.max_destinations {
            bail!(
                "Batch of {} destinations exceeds provider limit of {}",
                destinations.len(),
                PROVIDERS.routes.max_destinations
            );
        }

        #[cfg(debug_assertions)]
        if DF.log_batches {
            log::info!(
                "Route matrix request: {} -> {} destinations ({})",
                origin,
                destinations.len(),
                preference.api_name()
            );
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(PROVIDERS.routes.api_key_header, &self.api_key)
            .header(PROVIDERS.routes.field_mask_header, PROVIDERS.routes.field_mask)
            .json(&build_request_body(origin, destinations, preference))
            .send()
            .await
            .context("Route matrix request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("API error: {} {}", status, body.trim());
        }

        let elements: Vec<RouteMatrixElement> = response
            .json()
            .await
            .context("Failed to parse route matrix response")?;

        Ok(align_durations(&elements, destinations.len()))
    }
}
