use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use tokio::runtime::Runtime;

use super::core::Calculator;
use super::messages::{ProgressEvent, RunFailure, RunOutcome};

use crate::config::{ProviderApiConfig, RunConfig};
use crate::data::load_area_records;
use crate::domain::AreaRecord;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Loads the boundary dataset off the UI thread and reports back with `Loaded`.
pub fn spawn_load_task(path: PathBuf, tx: Sender<ProgressEvent>) {
    thread::spawn(move || {
        let _ = tx.send(ProgressEvent::Status(format!(
            "Loading zip code boundaries from {}...",
            path.display()
        )));
        let loaded = crate::trace_time!("load dataset", 1_000_000, {
            load_area_records(&path)
        });
        let event = match loaded {
            Ok(records) => ProgressEvent::Loaded(Ok(Arc::new(records))),
            Err(e) => {
                log::error!("Dataset load failed: {:#}", e);
                ProgressEvent::Loaded(Err(format!("Error loading data: {:#}", e)))
            }
        };
        let _ = tx.send(event);
    });
}

/// Runs one calculation on its own thread and tokio runtime.
/// Stage and batch events stream through `tx`; the last event is always `Finished`.
pub fn spawn_calculation_task(
    config: RunConfig,
    api: ProviderApiConfig,
    records: Arc<Vec<AreaRecord>>,
    tx: Sender<ProgressEvent>,
) {
    thread::spawn(move || {
        let finished = match run_blocking(&config, &api, &records, &tx) {
            Ok(outcome) => Ok(outcome),
            Err(failure) => Err(failure.to_string()),
        };

        #[cfg(debug_assertions)]
        if DF.log_worker_events {
            log::info!("Calculation thread finished: ok = {}", finished.is_ok());
        }

        let _ = tx.send(ProgressEvent::Finished(finished));
    });
}

fn run_blocking(
    config: &RunConfig,
    api: &ProviderApiConfig,
    records: &[AreaRecord],
    tx: &Sender<ProgressEvent>,
) -> Result<RunOutcome, RunFailure> {
    let rt = Runtime::new().map_err(|e| RunFailure::Setup(format!("async runtime: {}", e)))?;
    let calculator =
        Calculator::google(config, api).map_err(|e| RunFailure::Setup(format!("{:#}", e)))?;
    rt.block_on(calculator.run(config, records, Some(tx)))
}
