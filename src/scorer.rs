//! Region Scorer - Main coordinator for scoring hex cells
//!
//! Tiles the region, trims it to the outline, and runs both scorers plus the
//! combiner on every surviving cell. Includes both sequential and parallel
//! (Rayon) implementations; they produce identical, identically ordered output.
//!
//! Scoring is a pure per-cell reduction over read-only tables, so the
//! parallel pass needs no locking. Ordering is the tiler's column-major
//! order, preserved by rayon's indexed collect.

use crate::data::ReferenceData;
use crate::hex_grid::{HexCell, HexTiler};
use crate::metrics::{
    calculate_stranded_capacity, calculate_water_cooling, combined_score, CoolingBreakdown,
    StrandedBreakdown,
};
use crate::region::RegionOutline;
use crate::utils::Calibration;
use anyhow::Result;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::ops::Deref;
use std::time::Instant;

/// One value in a flattened output row
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

/// Final per-cell output row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellScore {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub stranded: StrandedBreakdown,
    pub cooling: CoolingBreakdown,
    pub combined: f64,
}

impl CellScore {
    /// Flattened field name -> value pairs, in export column order
    pub fn to_row(&self) -> Vec<(&'static str, FieldValue)> {
        let mut row = Vec::with_capacity(13);
        row.push(("hex_id", FieldValue::Text(self.id.clone())));
        row.push(("lat", FieldValue::Number(self.lat)));
        row.push(("lon", FieldValue::Number(self.lon)));
        row.extend(
            self.stranded
                .named_scores()
                .into_iter()
                .map(|(name, v)| (name, FieldValue::Number(v))),
        );
        row.extend(
            self.cooling
                .named_scores()
                .into_iter()
                .map(|(name, v)| (name, FieldValue::Number(v))),
        );
        row.push(("combined_score", FieldValue::Number(self.combined)));
        row
    }

    /// Every score in the row, sub-scores and composites alike
    pub fn all_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.stranded
            .named_scores()
            .into_iter()
            .map(|(_, v)| v)
            .chain(self.cooling.named_scores().into_iter().map(|(_, v)| v))
            .chain(std::iter::once(self.combined))
    }
}

/// Scored cells in tiling order, indexed by hex id
#[derive(Debug, Clone, Default)]
pub struct RegionScores {
    cells: Vec<CellScore>,
    index: FxHashMap<String, usize>,
}

impl RegionScores {
    pub fn new(cells: Vec<CellScore>) -> Self {
        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.id.clone(), i))
            .collect();
        Self { cells, index }
    }

    /// Look up a cell by its stable id
    pub fn get(&self, id: &str) -> Option<&CellScore> {
        self.index.get(id).map(|&i| &self.cells[i])
    }

    pub fn into_vec(self) -> Vec<CellScore> {
        self.cells
    }
}

impl Deref for RegionScores {
    type Target = [CellScore];

    fn deref(&self) -> &[CellScore] {
        &self.cells
    }
}

/// Main region scorer
pub struct RegionScorer {
    data: ReferenceData,
    calibration: Calibration,
    tiler: HexTiler,
    outline: RegionOutline,
}

impl RegionScorer {
    /// Initialize a scorer; fails if the calibration is inconsistent
    pub fn new(
        data: ReferenceData,
        calibration: Calibration,
        tiler: HexTiler,
        outline: RegionOutline,
    ) -> Result<Self> {
        calibration.validate()?;
        Ok(Self {
            data,
            calibration,
            tiler,
            outline,
        })
    }

    /// Texas tables, grid and outline with the given calibration
    pub fn texas(calibration: Calibration) -> Result<Self> {
        Self::new(
            ReferenceData::texas(),
            calibration,
            HexTiler::texas(),
            RegionOutline::texas(),
        )
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn tiler(&self) -> &HexTiler {
        &self.tiler
    }

    pub fn outline(&self) -> &RegionOutline {
        &self.outline
    }

    /// Tiled cells that fall inside the region outline
    pub fn cells(&self) -> Vec<HexCell> {
        let all = self.tiler.cells();
        let total = all.len();
        let inside: Vec<HexCell> = all
            .into_iter()
            .filter(|cell| self.outline.contains(cell.lat, cell.lon))
            .collect();

        tracing::debug!(total, inside = inside.len(), "Trimmed grid to region outline");
        inside
    }

    /// Score a single cell
    pub fn score_cell(&self, cell: &HexCell) -> CellScore {
        let stranded =
            calculate_stranded_capacity(cell.lat, cell.lon, &self.data, &self.calibration.stranded);
        let cooling =
            calculate_water_cooling(cell.lat, cell.lon, &self.data, &self.calibration.cooling);
        let combined = combined_score(stranded.composite, cooling.composite, &self.calibration.combined);

        CellScore {
            id: cell.id.clone(),
            lat: cell.lat,
            lon: cell.lon,
            stranded,
            cooling,
            combined,
        }
    }

    /// Score every in-region cell IN PARALLEL using Rayon
    pub fn score_region(&self) -> RegionScores {
        let cells = self.cells();
        tracing::info!("Scoring {} hex cells (parallel)...", cells.len());

        let start = Instant::now();
        let scored: Vec<CellScore> = cells.par_iter().map(|cell| self.score_cell(cell)).collect();
        tracing::info!("Scored {} cells in {:?}", scored.len(), start.elapsed());

        RegionScores::new(scored)
    }

    /// Sequential baseline; same output as [`score_region`](Self::score_region)
    pub fn score_region_sequential(&self) -> RegionScores {
        let cells = self.cells();
        tracing::info!("Scoring {} hex cells (sequential)...", cells.len());

        let start = Instant::now();
        let scored: Vec<CellScore> = cells.iter().map(|cell| self.score_cell(cell)).collect();
        tracing::info!("Scored {} cells in {:?}", scored.len(), start.elapsed());

        RegionScores::new(scored)
    }
}

/// Score all of Texas with the default calibration
pub fn score_region() -> Result<RegionScores> {
    Ok(RegionScorer::texas(Calibration::default())?.score_region())
}
