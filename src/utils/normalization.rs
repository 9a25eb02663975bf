//! Normalization Utilities
//!
//! Score clamping/rounding plus the calibration constants every scorer reads.
//!
//! The divisors, sigmas and thresholds here are empirically tuned against the
//! embedded Texas tables. They are kept exactly as calibrated; a JSON file can
//! override any subset of them (missing fields fall back to the defaults).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Tolerance for "weights sum to 1.0".
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Clamp a score into [0, 100]. Non-finite input maps to 0.
pub fn clamp_score(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Round to two decimals, the precision scores are reported at.
pub fn round2(value: f64) -> f64 {
    crate::utils::geometry::round_to(value, 2)
}

/// Calibration problems detected before any scoring runs.
#[derive(Debug, Error, PartialEq)]
pub enum CalibrationError {
    #[error("{composite} weights sum to {sum:.6}, expected 1.0")]
    WeightsDoNotSumToOne { composite: &'static str, sum: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("temperature range is empty: t_min_f={t_min} t_max_f={t_max}")]
    EmptyTemperatureRange { t_min: f64, t_max: f64 },
}

/// Stranded capacity constants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StrandedParams {
    pub substation_sigma: f64,
    pub substation_divisor: f64,
    pub crez_multiplier: f64,
    pub high_voltage_kv: f64,
    pub high_voltage_bonus: f64,

    pub generation_sigma: f64,
    pub generation_scale: f64,
    pub generation_divisor: f64,

    pub corridor_sigma: f64,
    pub corridor_base: f64,
    pub corridor_high_voltage_bonus: f64,
    pub corridor_multiplier: f64,

    pub load_sigma: f64,
    pub load_scale: f64,

    pub w_substation: f64,
    pub w_renewables: f64,
    pub w_transmission: f64,
    pub w_load: f64,
}

impl Default for StrandedParams {
    fn default() -> Self {
        Self {
            substation_sigma: 0.6, // ~40-mile influence
            substation_divisor: 35.0,
            crez_multiplier: 1.5,
            high_voltage_kv: 500.0,
            high_voltage_bonus: 1.2,

            generation_sigma: 1.2, // ~80-mile influence
            generation_scale: 10.0,
            generation_divisor: 5.0,

            corridor_sigma: 0.3, // ~20-mile influence
            corridor_base: 100.0,
            corridor_high_voltage_bonus: 1.4,
            corridor_multiplier: 1.5,

            load_sigma: 0.5,
            load_scale: 20.0,

            w_substation: 0.35,
            w_renewables: 0.30,
            w_transmission: 0.20,
            w_load: 0.15,
        }
    }
}

/// Water & cooling constants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CoolingParams {
    pub water_power: f64,
    pub water_default: f64,

    pub temp_power: f64,
    pub temp_default_f: f64,
    pub t_min_f: f64,
    pub t_max_f: f64,

    /// Highland bonus applies west of this longitude...
    pub highland_lon: f64,
    /// ...and north of this latitude.
    pub highland_lat: f64,
    pub highland_slope: f64,
    pub highland_cap: f64,

    pub humid_lon: f64,
    pub arid_lon: f64,
    pub humid_baseline: f64,
    pub arid_baseline: f64,
    pub humid_slope: f64,
    pub arid_slope: f64,

    pub w_water: f64,
    pub w_temperature: f64,
    pub w_humidity: f64,
}

impl Default for CoolingParams {
    fn default() -> Self {
        Self {
            water_power: 1.5,
            water_default: 50.0,

            temp_power: 2.0,
            temp_default_f: 65.0,
            t_min_f: 55.0, // Panhandle highlands
            t_max_f: 74.5, // Rio Grande Valley

            highland_lon: -101.0,
            highland_lat: 29.5,
            highland_slope: 2.0,
            highland_cap: 8.0,

            humid_lon: -96.0,
            arid_lon: -100.0,
            humid_baseline: 35.0,
            arid_baseline: 65.0,
            humid_slope: 5.0,
            arid_slope: 7.0,

            w_water: 0.45,
            w_temperature: 0.40,
            w_humidity: 0.15,
        }
    }
}

/// Blend weights for the final suitability score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CombinedWeights {
    pub w_stranded: f64,
    pub w_cooling: f64,
}

impl Default for CombinedWeights {
    /// Power availability is weighted slightly above cooling.
    fn default() -> Self {
        Self {
            w_stranded: 0.55,
            w_cooling: 0.45,
        }
    }
}

impl CombinedWeights {
    /// Weights from the stranded share alone; cooling gets the remainder.
    pub fn from_stranded(w_stranded: f64) -> Self {
        Self {
            w_stranded,
            w_cooling: 1.0 - w_stranded,
        }
    }
}

/// All scoring calibration in one place
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Calibration {
    pub stranded: StrandedParams,
    pub cooling: CoolingParams,
    pub combined: CombinedWeights,
}

impl Calibration {
    /// Load calibration overrides from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read calibration file: {:?}", path))?;

        let calibration: Calibration = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse calibration JSON: {:?}", path))?;

        calibration
            .validate()
            .with_context(|| format!("Invalid calibration in {:?}", path))?;

        Ok(calibration)
    }

    /// Check the invariants scoring relies on.
    pub fn validate(&self) -> std::result::Result<(), CalibrationError> {
        let s = &self.stranded;
        let c = &self.cooling;
        let w = &self.combined;

        check_weights(
            "stranded",
            &[s.w_substation, s.w_renewables, s.w_transmission, s.w_load],
        )?;
        check_weights("cooling", &[c.w_water, c.w_temperature, c.w_humidity])?;
        check_weights("combined", &[w.w_stranded, w.w_cooling])?;

        for (name, value) in [
            ("substation_sigma", s.substation_sigma),
            ("substation_divisor", s.substation_divisor),
            ("generation_sigma", s.generation_sigma),
            ("generation_divisor", s.generation_divisor),
            ("corridor_sigma", s.corridor_sigma),
            ("load_sigma", s.load_sigma),
            ("water_power", c.water_power),
            ("temp_power", c.temp_power),
        ] {
            if !(value > 0.0) {
                return Err(CalibrationError::NonPositive { name, value });
            }
        }

        if !(c.t_max_f > c.t_min_f) {
            return Err(CalibrationError::EmptyTemperatureRange {
                t_min: c.t_min_f,
                t_max: c.t_max_f,
            });
        }

        Ok(())
    }
}

fn check_weights(composite: &'static str, weights: &[f64]) -> std::result::Result<(), CalibrationError> {
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE || weights.iter().any(|w| *w < 0.0) {
        return Err(CalibrationError::WeightsDoNotSumToOne { composite, sum });
    }
    Ok(())
}
