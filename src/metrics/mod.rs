//! Metric modules for site scoring
//!
//! Each scorer is a pure function of a coordinate, the reference tables and
//! its calibration block; none of them holds state between calls.

pub mod combined;
pub mod stranded_capacity;
pub mod water_cooling;

// Re-export metric functions
pub use combined::combined_score;
pub use stranded_capacity::{calculate_stranded_capacity, StrandedBreakdown};
pub use water_cooling::{
    calculate_water_cooling, humidity_score, interpolate_temperature, interpolate_water,
    CoolingBreakdown,
};
