//! File locations for the dataset, run outputs and UI state
use std::path::{Path, PathBuf};

/// Configuration for the postal-code boundary dataset
pub struct DatasetPersistenceConfig {
    /// Default path of the GeoJSON file, relative to the working directory
    pub default_path: &'static str,
    /// Where users can fetch the source shapefiles (Census ZCTA)
    pub download_hint_url: &'static str,
}

/// Configuration for per-run artifacts. Both files are overwritten on every run.
pub struct OutputPersistenceConfig {
    pub map_filename: &'static str,
    pub csv_filename: &'static str,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading the form state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub dataset: DatasetPersistenceConfig,
    pub output: OutputPersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    dataset: DatasetPersistenceConfig {
        default_path: "zip_codes.geojson",
        download_hint_url: "https://www2.census.gov/geo/tiger/TIGER2023/ZCTA520/tl_2023_us_zcta520.zip",
    },
    output: OutputPersistenceConfig {
        map_filename: "driving_time_radius.html",
        csv_filename: "zip_codes_in_range.csv",
    },
    app: AppPersistenceConfig {
        state_path: ".drive_radius_state.json",
    },
};

pub fn map_output_path(output_dir: &Path) -> PathBuf {
    output_dir.join(PERSISTENCE.output.map_filename)
}

pub fn csv_output_path(output_dir: &Path) -> PathBuf {
    output_dir.join(PERSISTENCE.output.csv_filename)
}
