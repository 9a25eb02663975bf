//! CSV export via polars.
//!
//! Columns follow [`CellScore::to_row`](crate::scorer::CellScore::to_row), so
//! the header always matches the flattened record.

use super::{FieldValue, ScoreExporter};
use crate::scorer::RegionScores;
use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::PathBuf;

/// Writes one row per scored cell
pub struct CsvExporter {
    pub path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the export frame; `None` when there is nothing to write
    pub fn to_dataframe(scores: &RegionScores) -> Result<Option<DataFrame>> {
        let Some(first) = scores.first() else {
            return Ok(None);
        };

        let rows: Vec<_> = scores.iter().map(|cell| cell.to_row()).collect();
        let mut columns: Vec<Column> = Vec::with_capacity(rows[0].len());

        for (i, (name, value)) in first.to_row().into_iter().enumerate() {
            let column: Column = match value {
                FieldValue::Text(_) => {
                    let values: Vec<String> = rows
                        .iter()
                        .map(|row| match &row[i].1 {
                            FieldValue::Text(s) => s.clone(),
                            FieldValue::Number(v) => v.to_string(),
                        })
                        .collect();
                    Series::new(name.into(), values).into()
                }
                FieldValue::Number(_) => {
                    let values: Vec<f64> = rows
                        .iter()
                        .map(|row| match &row[i].1 {
                            FieldValue::Number(v) => *v,
                            FieldValue::Text(_) => f64::NAN,
                        })
                        .collect();
                    Series::new(name.into(), values).into()
                }
            };
            columns.push(column);
        }

        Ok(Some(DataFrame::new(columns)?))
    }
}

impl ScoreExporter for CsvExporter {
    fn export(&self, scores: &RegionScores) -> Result<()> {
        let Some(mut df) = Self::to_dataframe(scores)? else {
            tracing::warn!("No scored cells; skipping CSV export");
            return Ok(());
        };

        let mut file = File::create(&self.path)
            .with_context(|| format!("Failed to create CSV file: {}", self.path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("Failed to write CSV file: {}", self.path.display()))?;

        tracing::info!("Saved {} rows to {}", df.height(), self.path.display());
        Ok(())
    }
}
