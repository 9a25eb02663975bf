//! Degree-space geometry
//!
//! Planar approximations that are good enough for a state-sized region at
//! ~5 km resolution. Distances are in degrees of latitude; longitude
//! differences are foreshortened by the cosine of the mean latitude.
//! None of this is great-circle math.

/// Round to a fixed number of decimal places.
///
/// Negative zero comes back as positive zero so that formatted output
/// (and anything keyed on it) is stable.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor + 0.0
}

/// Approximate distance between two points, in degrees.
pub fn degree_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat1 - lat2;
    let mean_lat = ((lat1 + lat2) / 2.0).to_radians();
    let dlon = (lon1 - lon2) * mean_lat.cos();
    (dlat * dlat + dlon * dlon).sqrt()
}

/// Minimum distance from point P to segment AB, in degrees.
///
/// The projection is done in raw (lon, lat) space and clamped to the
/// segment endpoints; the final distance uses [`degree_distance`].
/// A zero-length segment degrades to the distance to its start point.
pub fn point_to_segment_distance(
    plat: f64,
    plon: f64,
    a: (f64, f64),
    b: (f64, f64),
) -> f64 {
    let (alat, alon) = a;
    let (blat, blon) = b;

    let abx = blon - alon;
    let aby = blat - alat;
    let apx = plon - alon;
    let apy = plat - alat;

    let ab2 = abx * abx + aby * aby;
    if ab2 == 0.0 {
        return degree_distance(plat, plon, alat, alon);
    }

    let t = ((apx * abx + apy * aby) / ab2).clamp(0.0, 1.0);
    let closest_lon = alon + t * abx;
    let closest_lat = alat + t * aby;

    degree_distance(plat, plon, closest_lat, closest_lon)
}
