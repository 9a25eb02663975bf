//! Data Center Site Scorer
//!
//! Scores every cell of a flat-top hexagonal grid over Texas for data center
//! suitability from two angles, then blends them.
//!
//! Module layout:
//! - `utils/`: distance geometry, weighting kernels, calibration constants
//! - `data`: static reference tables (substations, corridors, zones, basins,
//!   temperature normals, load centers)
//! - `hex_grid`: grid tiling and stable cell ids
//! - `region`: the Texas outline used to discard out-of-state cells
//! - `metrics/`: stranded capacity, water & cooling, combined score
//! - `scorer`: region-wide coordinator (sequential and Rayon-parallel)
//! - `export/`: CSV, GeoJSON and console outputs

pub mod utils;
pub mod data;
pub mod hex_grid;
pub mod region;
pub mod metrics;
pub mod scorer;
pub mod export;

// Re-export commonly used types
pub use utils::{Calibration, CalibrationError, CombinedWeights, CoolingParams, StrandedParams};
pub use data::ReferenceData;
pub use hex_grid::{BoundingBox, HexCell, HexTiler};
pub use region::RegionOutline;
pub use metrics::*;
pub use scorer::{score_region, CellScore, FieldValue, RegionScorer, RegionScores};
pub use export::{ConsoleReporter, CsvExporter, GeoJsonExporter, ScoreExporter};
