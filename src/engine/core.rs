use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::config::{ProviderApiConfig, RunConfig, csv_output_path, map_output_path};
use crate::data::{
    DistanceMatrixProvider, Geocoder, GoogleGeocoder, GoogleRouteMatrix, build_http_client,
};
use crate::domain::{AreaRecord, OriginPoint, TravelResult};
use crate::render::{export_results, render_map};

use super::filter::filter_results;
use super::messages::{ProgressEvent, RunFailure, RunOutcome, RunStage};
use super::sampler::{partition, sample_areas};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Runs one end-to-end calculation: geocode, sample, query, filter, render, export.
///
/// Holds only its providers. Everything specific to a run comes in through
/// `RunConfig`, so one calculator can serve any number of runs.
pub struct Calculator {
    geocoder: Arc<dyn Geocoder>,
    matrix: Arc<dyn DistanceMatrixProvider>,
}

impl Calculator {
    pub fn new(geocoder: Arc<dyn Geocoder>, matrix: Arc<dyn DistanceMatrixProvider>) -> Self {
        Self { geocoder, matrix }
    }

    /// Calculator backed by the Google Geocoding and Routes APIs.
    pub fn google(config: &RunConfig, api: &ProviderApiConfig) -> anyhow::Result<Self> {
        let client = build_http_client(api)?;
        Ok(Self::new(
            Arc::new(GoogleGeocoder::new(client.clone(), config.api_key.clone())),
            Arc::new(GoogleRouteMatrix::new(client, config.api_key.clone())),
        ))
    }

    pub async fn run(
        &self,
        config: &RunConfig,
        records: &[AreaRecord],
        progress: Option<&Sender<ProgressEvent>>,
    ) -> Result<RunOutcome, RunFailure> {
        let emit = |event: ProgressEvent| {
            if let Some(tx) = progress {
                // Receiver gone means nobody is watching; the run still completes.
                let _ = tx.send(event);
            }
        };

        // 1. Geocode
        emit(ProgressEvent::Stage(RunStage::Geocoding));
        let origin = match self.geocoder.geocode(&config.address).await {
            Ok(origin) => origin,
            Err(e) => {
                log::error!("Geocoding '{}' failed: {}", config.address, e);
                emit(ProgressEvent::Stage(RunStage::Failed));
                return Err(RunFailure::Geocode(e));
            }
        };

        // 2. Sample + query in batches
        emit(ProgressEvent::Stage(RunStage::Querying));
        let sample = {
            let mut rng = rand::thread_rng();
            sample_areas(
                records,
                config.explicit_zips.as_deref(),
                config.sample_cap,
                &mut rng,
            )
        };
        let batches = partition(&sample, config.effective_batch_size());
        let total = batches.len();
        let mut failed = 0;
        let mut raw: Vec<TravelResult> = Vec::with_capacity(sample.len());

        for (i, batch) in batches.iter().enumerate() {
            match self.query_batch(config, &origin, batch).await {
                Ok(mut results) => raw.append(&mut results),
                Err(e) => {
                    failed += 1;
                    log::warn!("API error on batch {}/{}: {:#}. Skipping batch.", i + 1, total, e);
                }
            }
            emit(ProgressEvent::Batch {
                completed: i + 1,
                total,
                failed,
            });
        }
        debug_assert!(raw.len() <= sample.len());

        // 3. Filter
        emit(ProgressEvent::Stage(RunStage::Filtering));
        let filtered = filter_results(
            &raw,
            f64::from(config.max_minutes),
            config.respect_state,
            origin.state.as_deref(),
        );

        // 4. Render + export
        emit(ProgressEvent::Stage(RunStage::Rendering));
        let written = crate::trace_time!("render + export", 50_000, {
            render_map(&filtered, origin.coords, &map_output_path(&config.output_dir)).and_then(
                |map_path| {
                    export_results(&filtered, &csv_output_path(&config.output_dir))
                        .map(|csv_path| (map_path, csv_path))
                },
            )
        });
        let (map_path, csv_path) = match written {
            Ok(paths) => paths,
            Err(e) => {
                emit(ProgressEvent::Stage(RunStage::Failed));
                return Err(RunFailure::Output(format!("{:#}", e)));
            }
        };

        let outcome = RunOutcome {
            origin,
            max_minutes: config.max_minutes,
            sampled: sample.len(),
            raw_count: raw.len(),
            filtered,
            batches_total: total,
            batches_failed: failed,
            map_path,
            csv_path,
        };
        log::info!("{}", outcome.summary());
        emit(ProgressEvent::Stage(RunStage::Done));
        Ok(outcome)
    }

    async fn query_batch(
        &self,
        config: &RunConfig,
        origin: &OriginPoint,
        batch: &[&AreaRecord],
    ) -> anyhow::Result<Vec<TravelResult>> {
        let destinations: Vec<_> = batch.iter().map(|r| r.centroid).collect();
        let durations = self
            .matrix
            .durations(origin.coords, &destinations, config.routing_preference)
            .await?;

        #[cfg(debug_assertions)]
        if DF.log_batches {
            let answered = durations.iter().filter(|d| d.is_some()).count();
            log::info!("Batch answered: {}/{} destinations with a duration", answered, batch.len());
        }

        let mut results = Vec::with_capacity(batch.len());
        // Entries without a duration are dropped rather than defaulted.
        for (record, seconds) in batch.iter().zip(durations) {
            let Some(seconds) = seconds else { continue };
            let mut result = TravelResult::from_seconds(
                record.zip_code.clone(),
                String::new(),
                seconds,
                record.geometry.clone(),
            );
            result.state = self
                .resolve_state(record, config, result.driving_time_minutes)
                .await;
            results.push(result);
        }
        Ok(results)
    }

    /// Dataset state when known. Otherwise, and only when the state filter
    /// needs it for a result that is within range, ask the geocoder.
    async fn resolve_state(&self, record: &AreaRecord, config: &RunConfig, minutes: f64) -> String {
        if let Some(state) = &record.state {
            return state.clone();
        }
        if !config.respect_state || minutes > f64::from(config.max_minutes) {
            return String::new();
        }
        match self.geocoder.reverse_state(record.centroid).await {
            Ok(state) => state.unwrap_or_default(),
            Err(e) => {
                log::warn!("Could not resolve state for {}: {}", record.zip_code, e);
                String::new()
            }
        }
    }
}
