use {
    crate::{
        config::PROVIDERS,
        domain::{LatLng, OriginPoint},
    },
    async_trait::async_trait,
    serde::Deserialize,
    std::{error::Error, fmt},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Abstract interface for turning addresses into coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text address to a point and its state code.
    async fn geocode(&self, address: &str) -> Result<OriginPoint, GeocodeError>;

    /// State code of an arbitrary point. `Ok(None)` when the provider knows of none.
    async fn reverse_state(&self, point: LatLng) -> Result<Option<String>, GeocodeError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeError {
    /// Provider answered with a status other than OK.
    Status {
        status: String,
        message: Option<String>,
    },
    NoCandidates,
    Transport(String),
    InvalidResponse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeocodeError::Status {
                status,
                message: Some(msg),
            } => write!(f, "Geocoding error: {} ({})", status, msg),
            GeocodeError::Status {
                status,
                message: None,
            } => write!(f, "Geocoding error: {}", status),
            GeocodeError::NoCandidates => write!(f, "Geocoding returned no results"),
            GeocodeError::Transport(msg) => write!(f, "Geocoding request failed: {}", msg),
            GeocodeError::InvalidResponse(msg) => {
                write!(f, "Unexpected geocoding response: {}", msg)
            }
        }
    }
}

impl Error for GeocodeError {}

#[derive(Deserialize, Debug)]
pub(crate) struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeCandidate>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GeocodeCandidate {
    geometry: CandidateGeometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Deserialize, Debug)]
struct CandidateGeometry {
    location: LatLng,
}

#[derive(Deserialize, Debug)]
struct AddressComponent {
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}

impl GeocodeCandidate {
    fn state_code(&self) -> Option<String> {
        self.address_components
            .iter()
            .find(|c| {
                c.types
                    .iter()
                    .any(|t| t == PROVIDERS.geocode.state_component_type)
            })
            .map(|c| c.short_name.clone())
    }
}

fn check_status(response: &GeocodeResponse) -> Result<(), GeocodeError> {
    if response.status != PROVIDERS.geocode.ok_status {
        return Err(GeocodeError::Status {
            status: response.status.clone(),
            message: response.error_message.clone(),
        });
    }
    Ok(())
}

/// Forward geocode: the first candidate wins.
pub(crate) fn parse_geocode_response(response: GeocodeResponse) -> Result<OriginPoint, GeocodeError> {
    check_status(&response)?;
    let first = response
        .results
        .first()
        .ok_or(GeocodeError::NoCandidates)?;
    if !first.geometry.location.is_valid() {
        return Err(GeocodeError::InvalidResponse(format!(
            "location out of range: {}",
            first.geometry.location
        )));
    }
    Ok(OriginPoint {
        coords: first.geometry.location,
        state: first.state_code(),
    })
}

pub(crate) fn parse_reverse_state(response: GeocodeResponse) -> Result<Option<String>, GeocodeError> {
    if response.status == "ZERO_RESULTS" {
        return Ok(None);
    }
    check_status(&response)?;
    Ok(response.results.iter().find_map(GeocodeCandidate::state_code))
}

/// Google Geocoding API implementation.
pub struct GoogleGeocoder {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GoogleGeocoder {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_endpoint(client, api_key, PROVIDERS.geocode.url)
    }

    /// Same client against another geocoding URL (proxy, local mock).
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

    async fn fetch(&self, query: &[(&str, &str)]) -> Result<GeocodeResponse, GeocodeError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status {
                status: response.status().to_string(),
                message: None,
            });
        }

        response
            .json::<GeocodeResponse>()
            .await
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<OriginPoint, GeocodeError> {
        #[cfg(debug_assertions)]
        if DF.log_geocode {
            log::info!("Geocoding address '{}'", address);
        }

        let origin = parse_geocode_response(self.fetch(&[("address", address)]).await?)?;

        #[cfg(debug_assertions)]
        if DF.log_geocode {
            log::info!(
                "Origin resolved to {} (state {})",
                origin.coords,
                origin.state.as_deref().unwrap_or("unknown")
            );
        }
        Ok(origin)
    }

    async fn reverse_state(&self, point: LatLng) -> Result<Option<String>, GeocodeError> {
        let latlng = point.to_string();
        let response = self
            .fetch(&[
                ("latlng", latlng.as_str()),
                ("result_type", PROVIDERS.geocode.state_component_type),
            ])
            .await?;
        parse_reverse_state(response)
    }
}
