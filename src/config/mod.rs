//! Configuration module for the driving-time radius application.

// Can all be private now because we have a public re-export.
mod debug;
mod persistence;
mod providers;
mod run;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::{DEFAULT_MAX_MINUTES, dataset, map, sampling};
pub use debug::{DF, LOG_PERFORMANCE};
pub use persistence::{PERSISTENCE, csv_output_path, map_output_path};
pub use providers::{PROVIDERS, ProviderApiConfig};
pub use run::{RoutingPreference, RunConfig};
