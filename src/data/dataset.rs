// Local GeoJSON dataset of postal-code boundaries

use {
    crate::{
        config::{PERSISTENCE, dataset},
        domain::AreaRecord,
    },
    anyhow::{Context, Result, bail},
    geo::{Coord, LineString, MultiPolygon, Polygon},
    serde::Deserialize,
    serde_json::{Map, Value},
    std::{fs, path::Path},
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<GeometryJson>,
}

/// GeoJSON positions may carry a third (altitude) ordinate, so keep them as Vec.
type Ring = Vec<Vec<f64>>;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum GeometryJson {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Unsupported,
}

/// Load every usable area from a GeoJSON FeatureCollection.
/// Features without a postal code or without polygonal geometry are skipped.
pub fn load_area_records(path: &Path) -> Result<Vec<AreaRecord>> {
    if !path.exists() {
        bail!(
            "Zip code dataset not found at {}. Download the ZCTA boundaries from {}, convert them to GeoJSON and place the file there.",
            path.display(),
            PERSISTENCE.dataset.download_hint_url
        );
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    let records = parse_area_records(&text)
        .with_context(|| format!("Failed to parse dataset: {}", path.display()))?;

    if records.is_empty() {
        bail!("Dataset {} contains no usable postal-code areas", path.display());
    }

    log::info!("Loaded {} postal-code areas from {}", records.len(), path.display());
    Ok(records)
}

pub(crate) fn parse_area_records(text: &str) -> Result<Vec<AreaRecord>> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    let total = collection.features.len();

    let records: Vec<AreaRecord> = collection
        .features
        .into_iter()
        .filter_map(|feature| {
            let record = feature_to_record(feature);
            #[cfg(debug_assertions)]
            if record.is_none() && DF.log_dataset_skips {
                log::info!("Skipping dataset feature without postal code or polygon");
            }
            record
        })
        .collect();

    if records.len() < total {
        log::warn!(
            "Skipped {} of {} features without a postal code or polygon geometry",
            total - records.len(),
            total
        );
    }
    Ok(records)
}

fn feature_to_record(feature: Feature) -> Option<AreaRecord> {
    let properties = feature.properties.unwrap_or_default();
    let zip = zip_property(&properties)?;
    let state = first_property(&properties, dataset::STATE_PROPERTIES);
    let geometry = to_multi_polygon(feature.geometry?)?;
    AreaRecord::new(zip, state, geometry)
}

/// Numeric postal codes lose their leading zeros in some conversions; restore them.
fn zip_property(properties: &Map<String, Value>) -> Option<String> {
    let zip = first_property(properties, dataset::ZIP_PROPERTIES)?;
    if zip.len() < dataset::ZIP_WIDTH && zip.bytes().all(|b| b.is_ascii_digit()) {
        return Some(format!("{:0>width$}", zip, width = dataset::ZIP_WIDTH));
    }
    Some(zip)
}

/// Properties are strings in Census exports but numbers in some conversions.
fn first_property(properties: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match properties.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn to_multi_polygon(geometry: GeometryJson) -> Option<MultiPolygon<f64>> {
    let polygons = match geometry {
        GeometryJson::Polygon { coordinates } => vec![to_polygon(coordinates)?],
        GeometryJson::MultiPolygon { coordinates } => coordinates
            .into_iter()
            .map(to_polygon)
            .collect::<Option<Vec<_>>>()?,
        GeometryJson::Unsupported => return None,
    };
    Some(MultiPolygon::new(polygons))
}

fn to_polygon(rings: Vec<Ring>) -> Option<Polygon<f64>> {
    let mut rings = rings.into_iter().map(to_line_string);
    let exterior = rings.next()??;
    let interiors = rings.collect::<Option<Vec<_>>>()?;
    Some(Polygon::new(exterior, interiors))
}

fn to_line_string(ring: Ring) -> Option<LineString<f64>> {
    ring.into_iter()
        .map(|pos| match pos.as_slice() {
            [x, y, ..] => Some(Coord { x: *x, y: *y }),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(LineString::new)
}
