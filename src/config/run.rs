//! Per-run configuration (immutable once a calculation starts)

use {
    crate::config::{DEFAULT_MAX_MINUTES, PROVIDERS, sampling},
    serde::{Deserialize, Serialize},
    std::path::PathBuf,
    strum_macros::{Display, EnumIter},
};

/// Routes API `routingPreference`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    Default,
    clap::ValueEnum,
)]
pub enum RoutingPreference {
    #[strum(to_string = "Ignore traffic")]
    TrafficUnaware,
    #[default]
    #[strum(to_string = "Traffic aware")]
    TrafficAware,
    #[strum(to_string = "Traffic aware (optimal)")]
    TrafficAwareOptimal,
}

impl RoutingPreference {
    /// Wire value expected by the provider.
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::TrafficUnaware => "TRAFFIC_UNAWARE",
            Self::TrafficAware => "TRAFFIC_AWARE",
            Self::TrafficAwareOptimal => "TRAFFIC_AWARE_OPTIMAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub api_key: String,
    pub address: String,
    pub max_minutes: u32,
    pub respect_state: bool,
    pub sample_cap: usize,
    pub batch_size: usize,
    pub routing_preference: RoutingPreference,
    /// Query exactly these postal codes (in this order) instead of a random sample.
    pub explicit_zips: Option<Vec<String>>,
    pub output_dir: PathBuf,
}

impl RunConfig {
    pub fn new(api_key: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            address: address.into(),
            max_minutes: DEFAULT_MAX_MINUTES,
            respect_state: false,
            sample_cap: sampling::SAMPLE_CAP,
            batch_size: sampling::BATCH_SIZE,
            routing_preference: RoutingPreference::default(),
            explicit_zips: None,
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_max_minutes(mut self, minutes: u32) -> Self {
        self.max_minutes = minutes;
        self
    }

    pub fn with_respect_state(mut self, respect: bool) -> Self {
        self.respect_state = respect;
        self
    }

    pub fn with_sampling(mut self, sample_cap: usize, batch_size: usize) -> Self {
        self.sample_cap = sample_cap;
        self.batch_size = batch_size;
        self
    }

    pub fn with_routing_preference(mut self, pref: RoutingPreference) -> Self {
        self.routing_preference = pref;
        self
    }

    pub fn with_explicit_zips(mut self, zips: Vec<String>) -> Self {
        self.explicit_zips = if zips.is_empty() { None } else { Some(zips) };
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Batch size the provider will actually accept (1..=25).
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, PROVIDERS.routes.max_destinations)
    }
}
