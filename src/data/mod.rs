mod dataset;
mod distance_matrix;
mod geocoder;
mod http;

pub use {
    dataset::load_area_records,
    distance_matrix::{DistanceMatrixProvider, GoogleRouteMatrix},
    geocoder::{GeocodeError, Geocoder, GoogleGeocoder},
    http::build_http_client,
};
