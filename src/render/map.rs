use {
    crate::{
        config::map,
        domain::{LatLng, TravelResult},
        render::color::hex_for_time,
        utils::format_minutes,
    },
    anyhow::{Context, Result},
    geo::MultiPolygon,
    serde_json::{Value, json},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: LatLng,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapRegion {
    pub zip_code: String,
    pub minutes: f64,
    pub fill_color: String,
    pub geometry: MultiPolygon<f64>,
}

impl MapRegion {
    fn tooltip(&self) -> String {
        format!("ZIP: {}, Time: {}", self.zip_code, format_minutes(self.minutes))
    }
}

/// Everything needed to draw the result map, independent of the HTML output.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub center: LatLng,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    pub regions: Vec<MapRegion>,
}

impl MapDocument {
    /// Origin marker plus one region per result, colored relative to the slowest result.
    pub fn build(results: &[TravelResult], origin: LatLng) -> Self {
        let max_minutes = results
            .iter()
            .map(|r| r.driving_time_minutes)
            .fold(0.0_f64, f64::max);

        let regions = results
            .iter()
            .map(|r| MapRegion {
                zip_code: r.zip_code.clone(),
                minutes: r.driving_time_minutes,
                fill_color: hex_for_time(r.driving_time_minutes, max_minutes),
                geometry: r.geometry.clone(),
            })
            .collect();

        Self {
            center: origin,
            zoom: map::ZOOM_START,
            markers: vec![MapMarker {
                position: origin,
                popup: map::ORIGIN_POPUP.to_string(),
            }],
            regions,
        }
    }

    fn data_json(&self) -> Value {
        let markers: Vec<Value> = self
            .markers
            .iter()
            .map(|m| json!({ "lat": m.position.lat, "lng": m.position.lng, "popup": m.popup }))
            .collect();

        let features: Vec<Value> = self
            .regions
            .iter()
            .map(|r| {
                json!({
                    "type": "Feature",
                    "properties": {
                        "zip_code": r.zip_code,
                        "minutes": r.minutes,
                        "fill_color": r.fill_color,
                        "tooltip": r.tooltip(),
                    },
                    "geometry": multipolygon_geojson(&r.geometry),
                })
            })
            .collect();

        json!({
            "center": [self.center.lat, self.center.lng],
            "zoom": self.zoom,
            "markers": markers,
            "regions": { "type": "FeatureCollection", "features": features },
            "style": {
                "color": map::REGION_STROKE_COLOR,
                "weight": map::REGION_STROKE_WEIGHT,
                "fillOpacity": map::REGION_FILL_OPACITY,
            },
        })
    }

    pub fn to_html(&self) -> Result<String> {
        let data = serde_json::to_string(&self.data_json())
            .context("Failed to serialize map data")?
            // Keep "</script>" inside a zip code or popup from closing the block.
            .replace("</", "<\\/");

        Ok(HTML_TEMPLATE
            .replace("{{LEAFLET_CSS}}", map::LEAFLET_CSS)
            .replace("{{LEAFLET_JS}}", map::LEAFLET_JS)
            .replace("{{TILE_URL}}", map::TILE_URL)
            .replace("{{TILE_ATTRIBUTION}}", map::TILE_ATTRIBUTION)
            .replace("{{DATA}}", &data))
    }

    /// Overwrites any existing file at `path`.
    pub fn save(&self, path: &Path) -> Result<PathBuf> {
        let html = self.to_html()?;
        fs::write(path, html).with_context(|| format!("Failed to write map: {}", path.display()))?;
        Ok(path.to_path_buf())
    }
}

/// Build and save the map in one go. Returns the written path.
pub fn render_map(results: &[TravelResult], origin: LatLng, path: &Path) -> Result<PathBuf> {
    MapDocument::build(results, origin).save(path)
}

/// GeoJSON wants [lng, lat] positions, which is how `geo` stores x/y.
fn multipolygon_geojson(geometry: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Value> = geometry
        .0
        .iter()
        .map(|polygon| {
            let rings: Vec<Value> = std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| ring.coords().map(|c| json!([c.x, c.y])).collect())
                .collect();
            Value::Array(rings)
        })
        .collect();
    json!({ "type": "MultiPolygon", "coordinates": polygons })
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>Driving Time Radius</title>
<link rel="stylesheet" href="{{LEAFLET_CSS}}" />
<script src="{{LEAFLET_JS}}"></script>
<style>
  html, body, #map { height: 100%; margin: 0; }
</style>
</head>
<body>
<div id="map"></div>
<script>
  const data = {{DATA}};
  const map = L.map("map").setView(data.center, data.zoom);
  L.tileLayer("{{TILE_URL}}", { attribution: "{{TILE_ATTRIBUTION}}", maxZoom: 19 }).addTo(map);
  for (const m of data.markers) {
    L.marker([m.lat, m.lng]).bindPopup(m.popup).addTo(map);
  }
  L.geoJSON(data.regions, {
    style: (f) => ({
      fillColor: f.properties.fill_color,
      color: data.style.color,
      weight: data.style.weight,
      fillOpacity: data.style.fillOpacity,
    }),
    onEachFeature: (f, layer) => layer.bindTooltip(f.properties.tooltip),
  }).addTo(map);
</script>
</body>
</html>
"#;
