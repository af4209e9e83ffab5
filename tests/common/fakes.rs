//! In-memory stand-ins for the Google providers.

use {
    anyhow::{Result, bail},
    async_trait::async_trait,
    drive_radius::{
        AreaRecord, LatLng, OriginPoint, RoutingPreference,
        data::{DistanceMatrixProvider, GeocodeError, Geocoder},
    },
    std::{
        collections::{HashMap, HashSet},
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    },
};

pub struct FakeGeocoder {
    origin: Result<OriginPoint, GeocodeError>,
    reverse_state: Option<String>,
    pub reverse_calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn resolving_to(origin: OriginPoint) -> Self {
        Self {
            origin: Ok(origin),
            reverse_state: None,
            reverse_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: &str) -> Self {
        Self {
            origin: Err(GeocodeError::Status {
                status: status.to_string(),
                message: None,
            }),
            reverse_state: None,
            reverse_calls: AtomicUsize::new(0),
        }
    }

    /// Every reverse lookup answers with `state`.
    pub fn with_reverse_state(mut self, state: &str) -> Self {
        self.reverse_state = Some(state.to_string());
        self
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, _address: &str) -> Result<OriginPoint, GeocodeError> {
        self.origin.clone()
    }

    async fn reverse_state(&self, _point: LatLng) -> Result<Option<String>, GeocodeError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reverse_state.clone())
    }
}

/// Answers from a fixed minutes-per-zip table, keyed by each record's centroid.
pub struct FakeMatrix {
    seconds_by_point: HashMap<String, u64>,
    failing_calls: HashSet<usize>,
    calls: AtomicUsize,
    /// Destination count of every request, in call order.
    pub batch_sizes: Mutex<Vec<usize>>,
    /// Every destination requested, in call order.
    pub requested: Mutex<Vec<LatLng>>,
}

impl FakeMatrix {
    /// `minutes` per zip code; zips missing from the table get no route.
    pub fn new(records: &[AreaRecord], minutes: &[(&str, u64)]) -> Self {
        let table: HashMap<&str, u64> = minutes.iter().copied().collect();
        let seconds_by_point = records
            .iter()
            .filter_map(|r| {
                table
                    .get(r.zip_code.as_str())
                    .map(|m| (r.centroid.to_string(), m * 60))
            })
            .collect();
        Self {
            seconds_by_point,
            failing_calls: HashSet::new(),
            calls: AtomicUsize::new(0),
            batch_sizes: Mutex::new(Vec::new()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Same driving time for every record.
    pub fn uniform(records: &[AreaRecord], minutes: u64) -> Self {
        let table: Vec<(&str, u64)> = records
            .iter()
            .map(|r| (r.zip_code.as_str(), minutes))
            .collect();
        Self::new(records, &table)
    }

    /// The `call`-th request (0-based) answers with an API error.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.failing_calls.insert(call);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DistanceMatrixProvider for FakeMatrix {
    async fn durations(
        &self,
        _origin: LatLng,
        destinations: &[LatLng],
        _preference: RoutingPreference,
    ) -> Result<Vec<Option<u64>>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.batch_sizes.lock().unwrap().push(destinations.len());
        self.requested.lock().unwrap().extend_from_slice(destinations);
        if self.failing_calls.contains(&call) {
            bail!("API error: 500 Internal Server Error");
        }
        Ok(destinations
            .iter()
            .map(|d| self.seconds_by_point.get(&d.to_string()).copied())
            .collect())
    }
}
