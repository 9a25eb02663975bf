//! Distance weighting kernels
//!
//! Two kernels drive every spatial signal in the scorers:
//! - Gaussian decay for point sources whose influence fades past a
//!   characteristic radius (substations, generation, corridors, load).
//! - Inverse-distance weighting for interpolating sampled fields
//!   (basin water availability, temperature normals).

use super::geometry::degree_distance;

/// Distances below this are floored before inverse-distance weighting.
pub const MIN_IDW_DISTANCE: f64 = 0.01;

/// Gaussian decay: 1.0 at the source, ~0.61 at one sigma.
pub fn gaussian_weight(distance: f64, sigma: f64) -> f64 {
    (-(distance * distance) / (2.0 * sigma * sigma)).exp()
}

/// Inverse-distance weight `1 / d^power` with `d` floored at [`MIN_IDW_DISTANCE`].
pub fn inverse_distance_weight(distance: f64, power: f64) -> f64 {
    1.0 / distance.max(MIN_IDW_DISTANCE).powf(power)
}

/// Inverse-distance-weighted mean of `(lat, lon, value)` samples at a point.
///
/// Returns `None` when nothing contributes (empty table or a total weight
/// that is zero or not finite); callers substitute their documented default.
pub fn idw_interpolate<I>(lat: f64, lon: f64, samples: I, power: f64) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64, f64)>,
{
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (slat, slon, value) in samples {
        let w = inverse_distance_weight(degree_distance(lat, lon, slat, slon), power);
        numerator += w * value;
        denominator += w;
    }

    if denominator > 0.0 && denominator.is_finite() {
        Some(numerator / denominator)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_is_one_at_source() {
        for sigma in [0.3, 0.5, 0.6, 1.2, 10.0] {
            assert_eq!(gaussian_weight(0.0, sigma), 1.0);
        }
    }

    #[test]
    fn test_gaussian_strictly_decreasing() {
        let mut previous = gaussian_weight(0.0, 0.6);
        for step in 1..50 {
            let w = gaussian_weight(step as f64 * 0.05, 0.6);
            assert!(w < previous, "weight must drop as distance grows (step {})", step);
            previous = w;
        }
    }

    #[test]
    fn test_gaussian_at_one_sigma() {
        assert_relative_eq!(gaussian_weight(0.6, 0.6), (-0.5f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_distance_floor() {
        // Coincident point uses the 0.01 floor instead of dividing by zero
        assert_relative_eq!(inverse_distance_weight(0.0, 2.0), 10_000.0, epsilon = 1e-6);
        assert_relative_eq!(inverse_distance_weight(0.005, 1.5), inverse_distance_weight(0.01, 1.5));
        assert_relative_eq!(inverse_distance_weight(2.0, 2.0), 0.25);
    }

    #[test]
    fn test_idw_empty_is_none() {
        let empty: Vec<(f64, f64, f64)> = Vec::new();
        assert_eq!(idw_interpolate(30.0, -100.0, empty, 2.0), None);
    }

    #[test]
    fn test_idw_single_sample_returns_its_value() {
        let v = idw_interpolate(30.0, -100.0, [(31.0, -99.0, 42.0)], 1.5).unwrap();
        assert_relative_eq!(v, 42.0, epsilon = 1e-12);
    }

    #[test]
    fn test_idw_midpoint_of_two_samples_is_mean() {
        let samples = [(30.0, -100.0, 10.0), (32.0, -100.0, 30.0)];
        let v = idw_interpolate(31.0, -100.0, samples, 2.0).unwrap();
        assert_relative_eq!(v, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_idw_dominated_by_coincident_sample() {
        let samples = [(30.0, -100.0, 10.0), (35.0, -95.0, 90.0)];
        let v = idw_interpolate(30.0, -100.0, samples, 2.0).unwrap();
        assert!(v < 10.1, "coincident sample should dominate, got {}", v);
    }
}
