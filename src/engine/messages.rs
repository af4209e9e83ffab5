use {
    crate::{
        data::GeocodeError,
        domain::{AreaRecord, OriginPoint, TravelResult},
    },
    std::{error::Error, fmt, path::PathBuf, sync::Arc},
};

/// Where a calculation currently is. Runs move strictly forward through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunStage {
    Idle,
    Geocoding,
    Querying,
    Filtering,
    Rendering,
    Done,
    Failed,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            RunStage::Idle => "Ready",
            RunStage::Geocoding => "Geocoding origin address...",
            RunStage::Querying => "Querying driving times...",
            RunStage::Filtering => "Filtering results...",
            RunStage::Rendering => "Rendering map and exporting results...",
            RunStage::Done => "Done",
            RunStage::Failed => "Failed",
        };
        write!(f, "{}", text)
    }
}

/// Worker → UI messages. Sent over one mpsc channel per background task, so
/// they arrive in the order they happened.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    Status(String),
    Stage(RunStage),
    Batch {
        completed: usize,
        total: usize,
        failed: usize,
    },
    Loaded(Result<Arc<Vec<AreaRecord>>, String>),
    Finished(Result<RunOutcome, String>),
}

/// The value a successful run returns.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub origin: OriginPoint,
    pub max_minutes: u32,
    pub sampled: usize,
    pub raw_count: usize,
    pub filtered: Vec<TravelResult>,
    pub batches_total: usize,
    pub batches_failed: usize,
    pub map_path: PathBuf,
    pub csv_path: Option<PathBuf>,
}

impl RunOutcome {
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Analysis complete. Found {} zip codes within {} minutes.",
            self.filtered.len(),
            self.max_minutes
        );
        if self.batches_failed > 0 {
            text.push_str(&format!(
                " ({} of {} distance batches failed; results are partial.)",
                self.batches_failed, self.batches_total
            ));
        }
        text
    }

    pub fn slowest_minutes(&self) -> Option<f64> {
        self.filtered
            .iter()
            .map(|r| r.driving_time_minutes)
            .reduce(f64::max)
    }
}

#[derive(Debug)]
pub enum RunFailure {
    /// Origin could not be resolved. Nothing is written.
    Geocode(GeocodeError),
    /// Map or CSV could not be written.
    Output(String),
    Setup(String),
}

impl fmt::Display for RunFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunFailure::Geocode(e) => {
                write!(f, "Geocoding failed. Please check the address. ({})", e)
            }
            RunFailure::Output(msg) => write!(f, "Failed to write results: {}", msg),
            RunFailure::Setup(msg) => write!(f, "Could not start calculation: {}", msg),
        }
    }
}

impl Error for RunFailure {}
