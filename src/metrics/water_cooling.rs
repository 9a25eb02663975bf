//! WATER & COOLING SCORE
//!
//! Higher = better site for water-cooled or air-cooled facilities.
//!
//! Components:
//!   A. Water availability (45%) - IDW (power 1.5) over basin indices
//!   B. Temperature        (40%) - IDW (power 2) over annual normals, mapped
//!      onto the region's coolest..hottest range, plus a highland bonus for
//!      the elevated west where nights run cool
//!   C. Humidity           (15%) - longitude proxy: humid east penalised,
//!      arid west rewarded for evaporative cooling

use crate::data::ReferenceData;
use crate::utils::{clamp_score, idw_interpolate, round2, CoolingParams};
use serde::Serialize;

/// Result of the water & cooling calculation (all values 0-100, 2 decimals)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoolingBreakdown {
    pub water_availability: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub composite: f64,
}

impl CoolingBreakdown {
    /// Sub-scores and composite under their export column names
    pub fn named_scores(&self) -> [(&'static str, f64); 4] {
        [
            ("cooling_water_avail", self.water_availability),
            ("cooling_temp_score", self.temperature),
            ("cooling_humidity", self.humidity),
            ("cooling_score", self.composite),
        ]
    }
}

/// Water availability index at a point; 50.0 when no basin contributes
pub fn interpolate_water(lat: f64, lon: f64, data: &ReferenceData, params: &CoolingParams) -> f64 {
    idw_interpolate(
        lat,
        lon,
        data.water_basins.iter().map(|b| (b.lat, b.lon, b.availability)),
        params.water_power,
    )
    .unwrap_or(params.water_default)
}

/// Annual mean temperature (°F) at a point; 65.0 when no normal contributes
pub fn interpolate_temperature(lat: f64, lon: f64, data: &ReferenceData, params: &CoolingParams) -> f64 {
    idw_interpolate(
        lat,
        lon,
        data.temperature_normals.iter().map(|t| (t.lat, t.lon, t.avg_temp_f)),
        params.temp_power,
    )
    .unwrap_or(params.temp_default_f)
}

/// Highland bonus, 0 outside the elevated north-west quadrant
pub fn highland_bonus(lat: f64, lon: f64, params: &CoolingParams) -> f64 {
    if lon < params.highland_lon && lat > params.highland_lat {
        ((lon.abs() - params.highland_lon.abs()) * params.highland_slope).min(params.highland_cap)
    } else {
        0.0
    }
}

/// Evaporative-cooling suitability from longitude alone.
///
/// East of `humid_lon` it falls from the humid baseline; west of `arid_lon`
/// it climbs from the arid baseline; in between it runs linearly from one
/// baseline to the other.
pub fn humidity_score(lon: f64, params: &CoolingParams) -> f64 {
    let score = if lon > params.humid_lon {
        params.humid_baseline - (lon - params.humid_lon) * params.humid_slope
    } else if lon < params.arid_lon {
        params.arid_baseline + (params.arid_lon - lon) * params.arid_slope
    } else {
        let fraction = (params.humid_lon - lon) / (params.humid_lon - params.arid_lon);
        params.humid_baseline + fraction * (params.arid_baseline - params.humid_baseline)
    };
    clamp_score(score)
}

/// Calculate the water & cooling breakdown for one coordinate
pub fn calculate_water_cooling(
    lat: f64,
    lon: f64,
    data: &ReferenceData,
    params: &CoolingParams,
) -> CoolingBreakdown {
    let water_availability = clamp_score(interpolate_water(lat, lon, data, params));

    let temp_f = interpolate_temperature(lat, lon, data, params);
    let temp_range = params.t_max_f - params.t_min_f;
    let temp_base = clamp_score(100.0 * (1.0 - (temp_f - params.t_min_f) / temp_range));
    let temperature = clamp_score(temp_base + highland_bonus(lat, lon, params));

    let humidity = humidity_score(lon, params);

    let composite = clamp_score(
        params.w_water * water_availability
            + params.w_temperature * temperature
            + params.w_humidity * humidity,
    );

    CoolingBreakdown {
        water_availability: round2(water_availability),
        temperature: round2(temperature),
        humidity: round2(humidity),
        composite: round2(composite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TemperatureNormal;
    use approx::assert_relative_eq;

    fn texas(lat: f64, lon: f64) -> CoolingBreakdown {
        calculate_water_cooling(lat, lon, &ReferenceData::texas(), &CoolingParams::default())
    }

    #[test]
    fn test_empty_tables_use_defaults() {
        let empty = ReferenceData::default();
        let params = CoolingParams::default();
        assert_eq!(interpolate_water(30.0, -100.0, &empty, &params), 50.0);
        assert_eq!(interpolate_temperature(30.0, -100.0, &empty, &params), 65.0);

        // 65 °F on a 55..74.5 range -> 48.72; lon -98 sits mid-band -> 50
        let b = calculate_water_cooling(30.0, -98.0, &empty, &params);
        assert_eq!(b.water_availability, 50.0);
        assert_relative_eq!(b.temperature, 48.72, epsilon = 0.011);
        assert_relative_eq!(b.humidity, 50.0);
    }

    #[test]
    fn test_panhandle_cooler_than_rio_grande_valley() {
        let panhandle = texas(35.2, -101.8);
        let valley = texas(26.2, -97.7);
        assert!(panhandle.temperature > valley.temperature);
        assert_relative_eq!(panhandle.temperature, 88.26, epsilon = 0.011);
        assert_relative_eq!(valley.temperature, 5.13, epsilon = 0.011);
    }

    #[test]
    fn test_permian_breakdown() {
        let b = texas(31.85, -101.96);
        assert_relative_eq!(b.water_availability, 37.08, epsilon = 0.011);
        assert_relative_eq!(b.temperature, 63.89, epsilon = 0.011);
        assert_relative_eq!(b.humidity, 78.72, epsilon = 0.011);
    }

    #[test]
    fn test_humidity_piecewise() {
        let p = CoolingParams::default();
        assert_relative_eq!(humidity_score(-96.0, &p), 35.0);
        assert_relative_eq!(humidity_score(-100.0, &p), 65.0);
        assert_relative_eq!(humidity_score(-98.0, &p), 50.0);
        assert_relative_eq!(humidity_score(-95.0, &p), 30.0);
        assert_relative_eq!(humidity_score(-104.0, &p), 93.0);
        // Capped at the extremes
        assert_eq!(humidity_score(-110.0, &p), 100.0);
        assert_eq!(humidity_score(-80.0, &p), 0.0);
    }

    #[test]
    fn test_humidity_west_beats_east() {
        let p = CoolingParams::default();
        assert!(humidity_score(-104.0, &p) > humidity_score(-94.5, &p));
    }

    #[test]
    fn test_humidity_non_increasing_eastward() {
        let p = CoolingParams::default();
        let mut lon = -107.0;
        let mut previous = humidity_score(lon, &p);
        while lon < -93.0 {
            lon += 0.1;
            let h = humidity_score(lon, &p);
            assert!(h <= previous + 1e-9, "humidity rose at lon {}", lon);
            previous = h;
        }
    }

    #[test]
    fn test_highland_bonus_region_and_cap() {
        let p = CoolingParams::default();
        assert_eq!(highland_bonus(29.0, -104.0, &p), 0.0); // too far south
        assert_eq!(highland_bonus(32.0, -100.0, &p), 0.0); // too far east
        assert_relative_eq!(highland_bonus(32.0, -102.0, &p), 2.0, epsilon = 1e-9);
        assert_eq!(highland_bonus(32.0, -106.0, &p), 8.0);
    }

    #[test]
    fn test_temperature_clamped_for_extreme_normals() {
        let data = ReferenceData {
            temperature_normals: vec![TemperatureNormal { lat: 30.0, lon: -99.0, avg_temp_f: 90.0 }],
            ..Default::default()
        };
        let b = calculate_water_cooling(30.0, -99.0, &data, &CoolingParams::default());
        assert_eq!(b.temperature, 0.0);

        let data = ReferenceData {
            temperature_normals: vec![TemperatureNormal { lat: 30.0, lon: -99.0, avg_temp_f: 40.0 }],
            ..Default::default()
        };
        let b = calculate_water_cooling(30.0, -99.0, &data, &CoolingParams::default());
        assert_eq!(b.temperature, 100.0);
    }
}
