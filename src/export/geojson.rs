//! GeoJSON export: one hexagon polygon per scored cell

use super::{FieldValue, ScoreExporter};
use crate::hex_grid::hex_boundary;
use crate::scorer::{CellScore, RegionScores};
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::PathBuf;

/// Writes a FeatureCollection of cell polygons
pub struct GeoJsonExporter {
    pub path: PathBuf,
    pub size_lat: f64,
    pub size_lon: f64,
}

impl GeoJsonExporter {
    pub fn new(path: impl Into<PathBuf>, size_lat: f64, size_lon: f64) -> Self {
        Self {
            path: path.into(),
            size_lat,
            size_lon,
        }
    }

    /// Feature for one cell. Ring positions are `[lon, lat]`, closed.
    pub fn feature(&self, cell: &CellScore) -> Value {
        let corners = hex_boundary(cell.lat, cell.lon, self.size_lat, self.size_lon);
        let mut ring: Vec<[f64; 2]> = corners.iter().map(|&(lat, lon)| [lon, lat]).collect();
        ring.push(ring[0]);

        let mut properties = Map::new();
        for (name, value) in cell.to_row() {
            if name == "lat" || name == "lon" {
                continue;
            }
            let value = match value {
                FieldValue::Text(s) => Value::from(s),
                FieldValue::Number(v) => Value::from(v),
            };
            properties.insert(name.to_string(), value);
        }

        json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [ring],
            },
            "properties": properties,
        })
    }

    pub fn feature_collection(&self, scores: &RegionScores) -> Value {
        let features: Vec<Value> = scores.iter().map(|cell| self.feature(cell)).collect();
        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

impl ScoreExporter for GeoJsonExporter {
    fn export(&self, scores: &RegionScores) -> Result<()> {
        let collection = self.feature_collection(scores);
        let text = serde_json::to_string(&collection).context("Failed to serialize GeoJSON")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write GeoJSON file: {}", self.path.display()))?;

        tracing::info!("Saved {} features to {}", scores.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::cell;

    fn exporter() -> GeoJsonExporter {
        GeoJsonExporter::new("unused.geojson", 0.045, 0.052)
    }

    #[test]
    fn test_ring_closed_with_seven_positions() {
        let feature = exporter().feature(&cell("TX_a", 31.0, -100.0, 40.0, 60.0, 49.0));
        let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 7);
        assert_eq!(ring[0], ring[6]);
    }

    #[test]
    fn test_positions_are_lon_lat() {
        let feature = exporter().feature(&cell("TX_a", 31.0, -100.0, 40.0, 60.0, 49.0));
        for position in feature["geometry"]["coordinates"][0].as_array().unwrap() {
            let lon = position[0].as_f64().unwrap();
            let lat = position[1].as_f64().unwrap();
            assert!((lon + 100.0).abs() < 0.06, "lon {}", lon);
            assert!((lat - 31.0).abs() < 0.06, "lat {}", lat);
        }
    }

    #[test]
    fn test_properties_exclude_coordinates() {
        let feature = exporter().feature(&cell("TX_a", 31.0, -100.0, 40.0, 60.0, 49.0));
        let properties = feature["properties"].as_object().unwrap();
        assert!(!properties.contains_key("lat"));
        assert!(!properties.contains_key("lon"));
        assert_eq!(properties["hex_id"], "TX_a");
        assert_eq!(properties["combined_score"], 49.0);
        assert_eq!(properties.len(), 11);
    }

    #[test]
    fn test_empty_collection() {
        let collection = exporter().feature_collection(&RegionScores::default());
        assert_eq!(collection["type"], "FeatureCollection");
        assert!(collection["features"].as_array().unwrap().is_empty());
    }
}
