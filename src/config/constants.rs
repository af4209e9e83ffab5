// Top Level Constants

pub const DEFAULT_MAX_MINUTES: u32 = 60;

pub mod sampling {
    /// Upper bound on areas queried per run when no explicit subset is given.
    pub const SAMPLE_CAP: usize = 100;
    /// Destinations per distance-matrix request.
    pub const BATCH_SIZE: usize = 25;
}

pub mod map {
    pub const ZOOM_START: u8 = 10;
    pub const ORIGIN_POPUP: &str = "Origin";
    pub const REGION_STROKE_COLOR: &str = "black";
    pub const REGION_STROKE_WEIGHT: f64 = 1.0;
    pub const REGION_FILL_OPACITY: f64 = 0.6;
    pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
    pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
    pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
    pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
}

pub mod dataset {
    /// ZCTA codes are five digits.
    pub const ZIP_WIDTH: usize = 5;
    /// Property names tried, in order, for the postal code of a feature.
    pub const ZIP_PROPERTIES: &[&str] = &[
        "ZCTA5CE20",
        "ZCTA5CE10",
        "ZCTA5",
        "GEOID20",
        "ZIP",
        "zip_code",
        "postal_code",
    ];
    /// Property names tried, in order, for the state abbreviation of a feature.
    pub const STATE_PROPERTIES: &[&str] = &["STUSPS", "STATE", "STATE_ABBR", "state"];
}
