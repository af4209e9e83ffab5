use {
    crate::domain::TravelResult,
    anyhow::{Context, Result},
    serde::Serialize,
    std::path::{Path, PathBuf},
};

/// One CSV row: every result field except the boundary geometry.
#[derive(Serialize)]
struct ExportRow<'a> {
    zip_code: &'a str,
    state: &'a str,
    driving_time_minutes: f64,
}

/// Write the results to `path` as CSV. Writes nothing and returns `None` when
/// there are no results (any existing file is left alone).
pub fn export_results(results: &[TravelResult], path: &Path) -> Result<Option<PathBuf>> {
    if results.is_empty() {
        return Ok(None);
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV: {}", path.display()))?;
    for r in results {
        writer.serialize(ExportRow {
            zip_code: &r.zip_code,
            state: &r.state,
            driving_time_minutes: r.driving_time_minutes,
        })?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;

    Ok(Some(path.to_path_buf()))
}
