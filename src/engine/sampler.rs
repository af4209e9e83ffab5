use {
    crate::domain::AreaRecord,
    rand::{Rng, seq::SliceRandom},
    std::collections::{HashMap, HashSet},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Pick the areas to query for one run.
///
/// With an explicit list the caller's order is kept, duplicates and unknown
/// codes are dropped and `cap` is ignored. Otherwise a uniform random sample
/// of at most `cap` distinct records is drawn.
pub fn sample_areas<'a, R: Rng + ?Sized>(
    records: &'a [AreaRecord],
    explicit: Option<&[String]>,
    cap: usize,
    rng: &mut R,
) -> Vec<&'a AreaRecord> {
    let sample: Vec<&AreaRecord> = match explicit {
        Some(zips) => {
            let by_zip: HashMap<&str, &AreaRecord> =
                records.iter().map(|r| (r.zip_code.as_str(), r)).collect();
            let mut seen = HashSet::new();
            zips.iter()
                .filter(|z| seen.insert(z.as_str()))
                .filter_map(|z| {
                    let found = by_zip.get(z.as_str()).copied();
                    if found.is_none() {
                        log::warn!("Postal code {} is not in the dataset, skipping", z);
                    }
                    found
                })
                .collect()
        }
        None => records
            .choose_multiple(rng, cap.min(records.len()))
            .collect(),
    };

    #[cfg(debug_assertions)]
    if DF.log_sample {
        let zips: Vec<&str> = sample.iter().map(|r| r.zip_code.as_str()).collect();
        log::info!("Sampled {} areas: {:?}", zips.len(), zips);
    }

    sample
}

/// Fixed-size batches; only the last one may be short.
pub fn partition<T>(items: &[T], batch_size: usize) -> Vec<&[T]> {
    items.chunks(batch_size.max(1)).collect()
}
