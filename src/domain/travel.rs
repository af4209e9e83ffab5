use {
    crate::domain::LatLng,
    geo::MultiPolygon,
    serde::{Deserialize, Serialize},
};

/// The geocoded starting point for every driving-time query in a run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OriginPoint {
    pub coords: LatLng,
    /// `administrative_area_level_1` short name, e.g. "VA".
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TravelResult {
    pub zip_code: String,
    /// Empty when no state could be resolved for the area.
    pub state: String,
    pub driving_time_minutes: f64,
    pub geometry: MultiPolygon<f64>,
}

impl TravelResult {
    pub fn from_seconds(
        zip_code: impl Into<String>,
        state: impl Into<String>,
        seconds: u64,
        geometry: MultiPolygon<f64>,
    ) -> Self {
        Self {
            zip_code: zip_code.into(),
            state: state.into(),
            driving_time_minutes: seconds as f64 / 60.0,
            geometry,
        }
    }
}
