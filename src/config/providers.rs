//! External mapping provider endpoints and HTTP client defaults

#[derive(Debug, Clone)]
pub struct ProviderApiConfig {
    /// `None` waits on the provider indefinitely.
    pub timeout_secs: Option<u64>,
    pub user_agent: &'static str,
}

impl Default for ProviderApiConfig {
    fn default() -> Self {
        Self {
            timeout_secs: PROVIDERS.client.timeout_secs,
            user_agent: PROVIDERS.client.user_agent,
        }
    }
}

pub struct GeocodeEndpoint {
    pub url: &'static str,
    /// Address component type holding the two-letter state code.
    pub state_component_type: &'static str,
    pub ok_status: &'static str,
}

/// Routes API constraints: 25 destinations per matrix call with one origin.
pub struct RouteMatrixEndpoint {
    pub url: &'static str,
    pub api_key_header: &'static str,
    pub field_mask_header: &'static str,
    pub field_mask: &'static str,
    pub travel_mode: &'static str,
    pub max_destinations: usize,
}

pub struct ClientDefaults {
    pub timeout_secs: Option<u64>,
    pub user_agent: &'static str,
}

pub struct ProvidersConfig {
    pub geocode: GeocodeEndpoint,
    pub routes: RouteMatrixEndpoint,
    pub client: ClientDefaults,
}

pub const PROVIDERS: ProvidersConfig = ProvidersConfig {
    geocode: GeocodeEndpoint {
        url: "https://maps.googleapis.com/maps/api/geocode/json",
        state_component_type: "administrative_area_level_1",
        ok_status: "OK",
    },
    routes: RouteMatrixEndpoint {
        url: "https://routes.googleapis.com/distanceMatrix/v2:computeRouteMatrix",
        api_key_header: "X-Goog-Api-Key",
        field_mask_header: "X-Goog-FieldMask",
        field_mask: "originIndex,destinationIndex,duration,condition",
        travel_mode: "DRIVE",
        max_destinations: 25,
    },
    client: ClientDefaults {
        timeout_secs: None,
        user_agent: concat!("drive-radius/", env!("CARGO_PKG_VERSION")),
    },
};
