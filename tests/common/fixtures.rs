//! Small synthetic dataset: unit squares laid out along a line east of the origin.

use {
    drive_radius::{AreaRecord, LatLng, OriginPoint},
    geo::{MultiPolygon, polygon},
};

pub struct TestFixtures;

impl TestFixtures {
    pub const API_KEY: &'static str = "test-key";
    pub const ADDRESS: &'static str = "1000 Wilson Blvd, Arlington, VA";

    pub fn origin(state: Option<&str>) -> OriginPoint {
        OriginPoint {
            coords: LatLng::new(38.89, -77.07),
            state: state.map(String::from),
        }
    }

    /// One square area per `(zip, state)`; the i-th is offset i * 0.01 degrees east.
    pub fn records(specs: &[(&str, Option<&str>)]) -> Vec<AreaRecord> {
        specs
            .iter()
            .enumerate()
            .map(|(i, (zip, state))| {
                let x = -77.0 + i as f64 * 0.01;
                let y = 38.9;
                let square = polygon![
                    (x: x, y: y),
                    (x: x + 0.005, y: y),
                    (x: x + 0.005, y: y + 0.005),
                    (x: x, y: y + 0.005),
                    (x: x, y: y),
                ];
                AreaRecord::new(*zip, state.map(String::from), MultiPolygon::new(vec![square]))
                    .expect("square has a centroid")
            })
            .collect()
    }

    /// `n` areas named 00000.. all in `state`.
    pub fn numbered(n: usize, state: &str) -> Vec<AreaRecord> {
        let zips: Vec<String> = (0..n).map(|i| format!("{:05}", i)).collect();
        let specs: Vec<(&str, Option<&str>)> =
            zips.iter().map(|z| (z.as_str(), Some(state))).collect();
        Self::records(&specs)
    }
}
