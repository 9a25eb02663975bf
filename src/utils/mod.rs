//! Utility modules for site scoring
//!
//! Contains shared functionality used across both scorers:
//! - Geometry: degree distances and segment proximity
//! - Weighting: Gaussian and inverse-distance kernels, IDW interpolation
//! - Normalization: clamping, rounding and calibration constants

pub mod geometry;
pub mod normalization;
pub mod weighting;

// Re-export commonly used types
pub use geometry::{degree_distance, point_to_segment_distance, round_to};
pub use normalization::{
    clamp_score, round2, Calibration, CalibrationError, CombinedWeights, CoolingParams,
    StrandedParams,
};
pub use weighting::{gaussian_weight, idw_interpolate, inverse_distance_weight};
