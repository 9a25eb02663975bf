//! Exporters for scored regions
//!
//! Every exporter consumes a finished [`RegionScores`] and writes it somewhere:
//! - `csv`: one row per cell, flattened fields (polars `CsvWriter`)
//! - `geojson`: FeatureCollection of hexagon polygons for GIS tools
//! - `console`: top-N rankings printed to stdout

pub mod console;
pub mod csv;
pub mod geojson;

use crate::scorer::{CellScore, RegionScores};
use anyhow::Result;

pub use crate::scorer::FieldValue;
pub use console::ConsoleReporter;
pub use csv::CsvExporter;
pub use geojson::GeoJsonExporter;

/// Sink for a scored region
pub trait ScoreExporter {
    fn export(&self, scores: &RegionScores) -> Result<()>;
}

/// Top `n` cells by `key`, descending.
///
/// The sort is stable, so cells with equal keys keep their tiling order.
pub fn rank_by<F>(scores: &[CellScore], key: F, n: usize) -> Vec<&CellScore>
where
    F: Fn(&CellScore) -> f64,
{
    let mut ranked: Vec<&CellScore> = scores.iter().collect();
    ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::metrics::{CoolingBreakdown, StrandedBreakdown};
    use crate::scorer::CellScore;

    /// Hand-built cell with uniform sub-scores
    pub fn cell(id: &str, lat: f64, lon: f64, stranded: f64, cooling: f64, combined: f64) -> CellScore {
        CellScore {
            id: id.to_string(),
            lat,
            lon,
            stranded: StrandedBreakdown {
                substation: stranded,
                renewables: stranded,
                transmission_access: stranded,
                load_inverted: stranded,
                composite: stranded,
            },
            cooling: CoolingBreakdown {
                water_availability: cooling,
                temperature: cooling,
                humidity: cooling,
                composite: cooling,
            },
            combined,
        }
    }
}
