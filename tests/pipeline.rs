//! End-to-end runs of the calculator against in-memory providers.

use {
    drive_radius::{
        Calculator, ProgressEvent, RunConfig, RunFailure, RunStage,
        data::{DistanceMatrixProvider, Geocoder},
    },
    std::{fs, path::Path, sync::Arc, sync::mpsc},
};

mod common;
use common::{FakeGeocoder, FakeMatrix, TestFixtures};

fn config(dir: &Path) -> RunConfig {
    RunConfig::new(TestFixtures::API_KEY, TestFixtures::ADDRESS).with_output_dir(dir)
}

fn calculator(geocoder: &Arc<FakeGeocoder>, matrix: &Arc<FakeMatrix>) -> Calculator {
    let geocoder: Arc<dyn Geocoder> = geocoder.clone();
    let matrix: Arc<dyn DistanceMatrixProvider> = matrix.clone();
    Calculator::new(geocoder, matrix)
}

fn csv_zips(path: &Path) -> Vec<String> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect()
}

#[tokio::test]
async fn run_writes_map_and_csv_for_reachable_areas() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::records(&[
        ("22201", Some("VA")),
        ("22202", Some("VA")),
        ("20001", Some("DC")),
    ]);
    let geocoder = Arc::new(FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))));
    let matrix = Arc::new(FakeMatrix::new(
        &records,
        &[("22201", 10), ("22202", 20), ("20001", 50)],
    ));

    let outcome = calculator(&geocoder, &matrix)
        .run(&config(dir.path()).with_max_minutes(30), &records, None)
        .await
        .unwrap();

    assert_eq!(outcome.sampled, 3);
    assert_eq!(outcome.raw_count, 3);
    assert_eq!(outcome.batches_total, 1);
    assert_eq!(
        outcome.summary(),
        "Analysis complete. Found 2 zip codes within 30 minutes."
    );

    let html = fs::read_to_string(&outcome.map_path).unwrap();
    assert!(html.contains("ZIP: 22201, Time: 10.0 min"));
    assert!(html.contains("ZIP: 22202, Time: 20.0 min"));
    assert!(!html.contains("ZIP: 20001"));

    let csv_path = outcome.csv_path.expect("csv written");
    assert_eq!(csv_path, dir.path().join("zip_codes_in_range.csv"));
    let mut zips = csv_zips(&csv_path);
    zips.sort();
    assert_eq!(zips, vec!["22201", "22202"]);
}

#[tokio::test]
async fn state_lines_drop_other_states() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::records(&[("22201", Some("VA")), ("20001", Some("DC"))]);
    let geocoder = Arc::new(FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))));
    let matrix = Arc::new(FakeMatrix::uniform(&records, 15));

    let outcome = calculator(&geocoder, &matrix)
        .run(&config(dir.path()).with_respect_state(true), &records, None)
        .await
        .unwrap();

    let zips: Vec<&str> = outcome.filtered.iter().map(|r| r.zip_code.as_str()).collect();
    assert_eq!(zips, vec!["22201"]);
    assert_eq!(geocoder.reverse_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_dataset_state_is_resolved_only_when_needed() {
    let records = TestFixtures::records(&[("22201", None), ("22209", None)]);
    let matrix = Arc::new(FakeMatrix::new(&records, &[("22201", 10), ("22209", 90)]));

    // State filter on: reverse lookup for the in-range area only.
    let dir = tempfile::tempdir().unwrap();
    let geocoder = Arc::new(
        FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))).with_reverse_state("VA"),
    );
    let outcome = calculator(&geocoder, &matrix)
        .run(&config(dir.path()).with_respect_state(true), &records, None)
        .await
        .unwrap();
    assert_eq!(outcome.filtered.len(), 1);
    assert_eq!(outcome.filtered[0].state, "VA");
    assert_eq!(geocoder.reverse_calls.load(std::sync::atomic::Ordering::SeqCst), 1);

    // State filter off: no lookups, state left empty.
    let dir = tempfile::tempdir().unwrap();
    let geocoder = Arc::new(
        FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))).with_reverse_state("VA"),
    );
    let outcome = calculator(&geocoder, &matrix)
        .run(&config(dir.path()), &records, None)
        .await
        .unwrap();
    assert_eq!(outcome.filtered.len(), 1);
    assert_eq!(outcome.filtered[0].state, "");
    assert_eq!(geocoder.reverse_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_batch_is_skipped_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::numbered(60, "VA");
    let geocoder = Arc::new(FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))));
    let matrix = Arc::new(FakeMatrix::uniform(&records, 5).failing_on(1));

    let outcome = calculator(&geocoder, &matrix)
        .run(&config(dir.path()), &records, None)
        .await
        .unwrap();

    assert_eq!(*matrix.batch_sizes.lock().unwrap(), vec![25, 25, 10]);
    assert_eq!(outcome.batches_total, 3);
    assert_eq!(outcome.batches_failed, 1);
    assert_eq!(outcome.raw_count, 35);
    assert_eq!(outcome.filtered.len(), 35);
    assert!(
        outcome
            .summary()
            .ends_with("(1 of 3 distance batches failed; results are partial.)")
    );
}

#[tokio::test]
async fn geocode_failure_stops_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::numbered(3, "VA");
    let geocoder = Arc::new(FakeGeocoder::failing("ZERO_RESULTS"));
    let matrix = Arc::new(FakeMatrix::uniform(&records, 5));

    let (tx, rx) = mpsc::channel();
    let err = calculator(&geocoder, &matrix)
        .run(&config(dir.path()), &records, Some(&tx))
        .await
        .unwrap_err();

    assert!(matches!(err, RunFailure::Geocode(_)));
    assert!(err.to_string().starts_with("Geocoding failed. Please check the address."));
    assert_eq!(matrix.calls(), 0);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

    let stages: Vec<RunStage> = rx
        .try_iter()
        .filter_map(|e| match e {
            ProgressEvent::Stage(s) => Some(s),
            _ => None,
        })
        .collect();
    assert_eq!(stages, vec![RunStage::Geocoding, RunStage::Failed]);
}

#[tokio::test]
async fn explicit_zips_are_queried_in_given_order() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::numbered(5, "VA");
    let geocoder = Arc::new(FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))));
    let matrix = Arc::new(FakeMatrix::uniform(&records, 5));

    let cfg = config(dir.path()).with_explicit_zips(vec![
        "00003".into(),
        "00001".into(),
        "99999".into(),
        "00003".into(),
    ]);
    let outcome = calculator(&geocoder, &matrix)
        .run(&cfg, &records, None)
        .await
        .unwrap();

    assert_eq!(outcome.sampled, 2);
    let requested = matrix.requested.lock().unwrap().clone();
    assert_eq!(requested, vec![records[3].centroid, records[1].centroid]);
    let zips: Vec<&str> = outcome.filtered.iter().map(|r| r.zip_code.as_str()).collect();
    assert_eq!(zips, vec!["00003", "00001"]);
}

#[tokio::test]
async fn nothing_in_range_still_renders_map_but_no_csv() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::numbered(4, "VA");
    let geocoder = Arc::new(FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))));
    let matrix = Arc::new(FakeMatrix::uniform(&records, 45));

    let outcome = calculator(&geocoder, &matrix)
        .run(&config(dir.path()).with_max_minutes(30), &records, None)
        .await
        .unwrap();

    assert!(outcome.filtered.is_empty());
    assert!(outcome.map_path.exists());
    assert_eq!(outcome.csv_path, None);
    assert!(!dir.path().join("zip_codes_in_range.csv").exists());
    assert_eq!(
        outcome.summary(),
        "Analysis complete. Found 0 zip codes within 30 minutes."
    );
}

#[tokio::test]
async fn areas_without_a_route_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::records(&[("22201", Some("VA")), ("23450", Some("VA"))]);
    let geocoder = Arc::new(FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))));
    let matrix = Arc::new(FakeMatrix::new(&records, &[("22201", 12)]));

    let outcome = calculator(&geocoder, &matrix)
        .run(&config(dir.path()), &records, None)
        .await
        .unwrap();

    assert_eq!(outcome.sampled, 2);
    assert_eq!(outcome.raw_count, 1);
    assert_eq!(outcome.filtered[0].zip_code, "22201");
}

#[tokio::test]
async fn sample_is_capped_and_batched() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::numbered(150, "VA");
    let geocoder = Arc::new(FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))));
    let matrix = Arc::new(FakeMatrix::uniform(&records, 5));

    let outcome = calculator(&geocoder, &matrix)
        .run(&config(dir.path()), &records, None)
        .await
        .unwrap();

    assert_eq!(outcome.sampled, 100);
    assert_eq!(*matrix.batch_sizes.lock().unwrap(), vec![25, 25, 25, 25]);

    let mut requested = matrix.requested.lock().unwrap().clone();
    let before = requested.len();
    requested.sort_by(|a, b| a.lng.total_cmp(&b.lng));
    requested.dedup();
    assert_eq!(requested.len(), before, "sample must not repeat an area");
}

#[tokio::test]
async fn progress_events_arrive_in_stage_order() {
    let dir = tempfile::tempdir().unwrap();
    let records = TestFixtures::numbered(30, "VA");
    let geocoder = Arc::new(FakeGeocoder::resolving_to(TestFixtures::origin(Some("VA"))));
    let matrix = Arc::new(FakeMatrix::uniform(&records, 5));

    let (tx, rx) = mpsc::channel();
    calculator(&geocoder, &matrix)
        .run(&config(dir.path()), &records, Some(&tx))
        .await
        .unwrap();

    let events: Vec<ProgressEvent> = rx.try_iter().collect();
    let stages: Vec<RunStage> = events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::Stage(s) => Some(*s),
            _ => None,
        })
        .collect();
    assert_eq!(
        stages,
        vec![
            RunStage::Geocoding,
            RunStage::Querying,
            RunStage::Filtering,
            RunStage::Rendering,
            RunStage::Done,
        ]
    );
    assert!(stages.windows(2).all(|w| w[0] < w[1]));

    let batches: Vec<(usize, usize)> = events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::Batch {
                completed, total, ..
            } => Some((*completed, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(batches, vec![(1, 2), (2, 2)]);
}
