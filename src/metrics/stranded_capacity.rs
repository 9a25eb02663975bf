//! STRANDED CAPACITY SCORE
//!
//! Quantifies how much surplus generation/transmission capacity exists near a
//! cell that is going unused for lack of local load.
//!
//! Components:
//!   A. Substation spare capacity  (35%) - Gaussian-weighted spare MW; CREZ
//!      substations (built for export) x1.5, >=500 kV x1.2
//!   B. Renewable surplus          (30%) - Gaussian-weighted installed GW
//!   C. Transmission access        (20%) - proximity to HV corridors; without
//!      lines, generation is curtailed regardless of capacity
//!   D. Load saturation, inverted  (15%) - dense load means lines are already
//!      busy, so the opportunity shrinks

use crate::data::ReferenceData;
use crate::utils::{
    clamp_score, degree_distance, gaussian_weight, point_to_segment_distance, round2,
    StrandedParams,
};
use serde::Serialize;

/// Result of the stranded capacity calculation (all values 0-100, 2 decimals)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrandedBreakdown {
    pub substation: f64,
    pub renewables: f64,
    pub transmission_access: f64,
    /// 100 minus the load-saturation penalty
    pub load_inverted: f64,
    pub composite: f64,
}

impl StrandedBreakdown {
    /// Sub-scores and composite under their export column names
    pub fn named_scores(&self) -> [(&'static str, f64); 5] {
        [
            ("stranded_substation", self.substation),
            ("stranded_renewables", self.renewables),
            ("stranded_tx_access", self.transmission_access),
            ("stranded_load_invert", self.load_inverted),
            ("stranded_score", self.composite),
        ]
    }
}

/// Calculate the stranded capacity breakdown for one coordinate
pub fn calculate_stranded_capacity(
    lat: f64,
    lon: f64,
    data: &ReferenceData,
    params: &StrandedParams,
) -> StrandedBreakdown {
    // A: substation spare capacity
    let substation_signal: f64 = data
        .substations
        .iter()
        .map(|s| {
            let w = gaussian_weight(degree_distance(lat, lon, s.lat, s.lon), params.substation_sigma);
            let crez = if s.in_crez { params.crez_multiplier } else { 1.0 };
            let kv = if s.voltage_kv >= params.high_voltage_kv { params.high_voltage_bonus } else { 1.0 };
            w * s.spare_capacity_mw * crez * kv
        })
        .sum();
    let substation = clamp_score(substation_signal / params.substation_divisor);

    // B: renewable generation surplus
    let generation_signal: f64 = data
        .renewable_zones
        .iter()
        .map(|z| {
            let w = gaussian_weight(degree_distance(lat, lon, z.lat, z.lon), params.generation_sigma);
            w * z.generation_gw * params.generation_scale
        })
        .sum();
    let renewables = clamp_score(generation_signal / params.generation_divisor);

    // C: transmission corridor access
    let corridor_signal: f64 = data
        .corridors
        .iter()
        .map(|c| {
            let d = point_to_segment_distance(lat, lon, c.from, c.to);
            let w = gaussian_weight(d, params.corridor_sigma);
            let kv = if c.voltage_kv >= params.high_voltage_kv {
                params.corridor_high_voltage_bonus
            } else {
                1.0
            };
            w * params.corridor_base * kv
        })
        .sum();
    let transmission_access = clamp_score(corridor_signal * params.corridor_multiplier);

    // D: load saturation (inverted)
    let load_signal: f64 = data
        .population_centers
        .iter()
        .map(|p| {
            let w = gaussian_weight(degree_distance(lat, lon, p.lat, p.lon), params.load_sigma);
            w * p.density_thousands * params.load_scale
        })
        .sum();
    let load_inverted = 100.0 - clamp_score(load_signal);

    let composite = clamp_score(
        params.w_substation * substation
            + params.w_renewables * renewables
            + params.w_transmission * transmission_access
            + params.w_load * load_inverted,
    );

    StrandedBreakdown {
        substation: round2(substation),
        renewables: round2(renewables),
        transmission_access: round2(transmission_access),
        load_inverted: round2(load_inverted),
        composite: round2(composite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Corridor, PopulationCenter, Substation};
    use approx::assert_relative_eq;

    fn texas(lat: f64, lon: f64) -> StrandedBreakdown {
        calculate_stranded_capacity(lat, lon, &ReferenceData::texas(), &StrandedParams::default())
    }

    #[test]
    fn test_permian_basin_breakdown() {
        let b = texas(31.85, -101.96);
        assert_relative_eq!(b.substation, 34.66, epsilon = 0.011);
        assert_relative_eq!(b.renewables, 22.16, epsilon = 0.011);
        assert_relative_eq!(b.transmission_access, 100.0);
        assert_relative_eq!(b.load_inverted, 90.22, epsilon = 0.011);
        assert_relative_eq!(b.composite, 52.31, epsilon = 0.011);
    }

    #[test]
    fn test_houston_breakdown() {
        let b = texas(29.76, -95.37);
        assert_relative_eq!(b.substation, 5.43, epsilon = 0.011);
        assert_relative_eq!(b.load_inverted, 21.42, epsilon = 0.011);
        assert_relative_eq!(b.composite, 25.14, epsilon = 0.011);
    }

    #[test]
    fn test_empty_tables_score_load_only() {
        let b = calculate_stranded_capacity(30.0, -100.0, &ReferenceData::default(), &StrandedParams::default());
        assert_eq!(b.substation, 0.0);
        assert_eq!(b.renewables, 0.0);
        assert_eq!(b.transmission_access, 0.0);
        assert_eq!(b.load_inverted, 100.0);
        assert_relative_eq!(b.composite, 15.0);
    }

    #[test]
    fn test_crez_and_voltage_multipliers() {
        let params = StrandedParams::default();
        let single = |in_crez: bool, voltage_kv: f64| {
            let data = ReferenceData {
                substations: vec![Substation {
                    lat: 30.0,
                    lon: -100.0,
                    spare_capacity_mw: 350.0,
                    voltage_kv,
                    in_crez,
                }],
                ..Default::default()
            };
            calculate_stranded_capacity(30.0, -100.0, &data, &params).substation
        };

        assert_relative_eq!(single(false, 345.0), 10.0);
        assert_relative_eq!(single(true, 345.0), 15.0);
        assert_relative_eq!(single(false, 500.0), 12.0);
        assert_relative_eq!(single(true, 500.0), 18.0);
    }

    #[test]
    fn test_high_voltage_corridor_bonus() {
        let params = StrandedParams::default();
        let on_line = |voltage_kv: f64| {
            let data = ReferenceData {
                corridors: vec![Corridor { from: (30.0, -101.0), to: (30.0, -99.0), voltage_kv }],
                ..Default::default()
            };
            // 0.4° north of the line's midpoint
            calculate_stranded_capacity(30.4, -100.0, &data, &params).transmission_access
        };

        let w = (-0.16f64 / 0.18).exp();
        assert_relative_eq!(on_line(345.0), w * 100.0 * 1.5, epsilon = 0.011);
        assert_relative_eq!(on_line(500.0), w * 100.0 * 1.4 * 1.5, epsilon = 0.011);
        assert!(on_line(500.0) > on_line(345.0));
    }

    #[test]
    fn test_dense_load_saturates_penalty() {
        let data = ReferenceData {
            population_centers: vec![PopulationCenter { lat: 30.0, lon: -100.0, density_thousands: 9.0 }],
            ..Default::default()
        };
        let b = calculate_stranded_capacity(30.0, -100.0, &data, &StrandedParams::default());
        assert_eq!(b.load_inverted, 0.0);
    }

    #[test]
    fn test_named_scores_order() {
        let names: Vec<_> = texas(31.0, -99.0).named_scores().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "stranded_substation",
                "stranded_renewables",
                "stranded_tx_access",
                "stranded_load_invert",
                "stranded_score"
            ]
        );
    }
}
