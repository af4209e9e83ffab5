#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod render;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for bin/radius.rs and tests)
pub use app::App;
pub use config::{PERSISTENCE, ProviderApiConfig, RoutingPreference, RunConfig};
pub use domain::{AreaRecord, LatLng, OriginPoint, TravelResult};
pub use engine::{Calculator, ProgressEvent, RunFailure, RunOutcome, RunStage};

use {
    clap::{Args, Parser, builder::TypedValueParser},
    std::path::PathBuf,
};

/// Flags shared by the desktop app and the headless `radius` binary.
#[derive(Args, Debug, Clone)]
pub struct SharedArgs {
    /// Google Maps Platform key (Geocoding + Routes APIs)
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// GeoJSON FeatureCollection of ZCTA boundaries
    #[arg(long, default_value = PERSISTENCE.dataset.default_path)]
    pub dataset: PathBuf,

    /// Directory the map and CSV are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Maximum number of areas sampled per run
    #[arg(long, default_value_t = config::sampling::SAMPLE_CAP)]
    pub sample_size: usize,

    /// Destinations per distance-matrix request
    #[arg(
        long,
        default_value_t = config::sampling::BATCH_SIZE,
        value_parser = clap::value_parser!(u16).range(1..=25).map(usize::from)
    )]
    pub batch_size: usize,

    /// Per-request network timeout. Unset means no timeout.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Default for SharedArgs {
    fn default() -> Self {
        Self {
            api_key: None,
            dataset: PathBuf::from(PERSISTENCE.dataset.default_path),
            output_dir: PathBuf::from("."),
            sample_size: config::sampling::SAMPLE_CAP,
            batch_size: config::sampling::BATCH_SIZE,
            timeout_secs: None,
        }
    }
}

impl SharedArgs {
    pub fn provider_config(&self) -> ProviderApiConfig {
        ProviderApiConfig {
            timeout_secs: self.timeout_secs,
            ..ProviderApiConfig::default()
        }
    }

    /// Base run config with everything these flags control filled in.
    pub fn run_config(&self, api_key: impl Into<String>, address: impl Into<String>) -> RunConfig {
        RunConfig::new(api_key, address)
            .with_sampling(self.sample_size, self.batch_size)
            .with_output_dir(self.output_dir.clone())
    }
}

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub shared: SharedArgs,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
