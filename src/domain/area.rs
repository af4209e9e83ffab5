use {
    crate::domain::LatLng,
    geo::{Centroid, MultiPolygon},
};

/// One postal-code area from the local dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRecord {
    pub zip_code: String,
    /// Two-letter state abbreviation when the dataset carries one.
    pub state: Option<String>,
    pub geometry: MultiPolygon<f64>,
    pub centroid: LatLng,
}

impl AreaRecord {
    /// Returns `None` for empty geometry (no centroid to route to).
    pub fn new(
        zip_code: impl Into<String>,
        state: Option<String>,
        geometry: MultiPolygon<f64>,
    ) -> Option<Self> {
        let centroid = geometry.centroid().map(LatLng::from_point)?;
        Some(Self {
            zip_code: zip_code.into(),
            state,
            geometry,
            centroid,
        })
    }
}

impl std::fmt::Display for AreaRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) @ {}",
            self.zip_code,
            self.state.as_deref().unwrap_or("??"),
            self.centroid
        )
    }
}
