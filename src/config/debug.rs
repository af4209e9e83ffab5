//! Debugging feature flags.

/// Activate trace_time macro (for scope-level timing)
pub const LOG_PERFORMANCE: bool = false;

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every geocode request and the resolved origin.
    pub log_geocode: bool,

    /// Log each distance-matrix batch as it is sent and answered.
    pub log_batches: bool,

    /// Log the sampled postal codes before querying.
    pub log_sample: bool,

    /// Log dataset features skipped during loading (bad geometry, missing zip).
    pub log_dataset_skips: bool,

    /// Worker events as the form drains them.
    pub log_worker_events: bool,
}

pub const DF: LogFlags = LogFlags {
    log_geocode: true,
    log_batches: true,

    log_sample: false,
    log_dataset_skips: false,
    log_worker_events: false,
};
