//! Coarse region outline
//!
//! The tiler covers a rectangle; this trims it to the region with a bounding
//! box check followed by a short list of half-plane exclusions. It is not a
//! polygon test. Cells near the real border may land on the wrong side.
//!
//! Tie-break: a point lying exactly on a cutoff is excluded.

use crate::hex_grid::BoundingBox;

/// One side of a coordinate cutoff, boundary included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HalfLine {
    AtOrBelow(f64),
    AtOrAbove(f64),
}

impl HalfLine {
    fn holds(self, value: f64) -> bool {
        match self {
            HalfLine::AtOrBelow(cut) => value <= cut,
            HalfLine::AtOrAbove(cut) => value >= cut,
        }
    }
}

/// A cell is dropped when a rule matches it.
#[derive(Debug, Clone, PartialEq)]
pub enum ExclusionRule {
    /// Both coordinate cutoffs hold (a corner of the box)
    Quadrant { lon: HalfLine, lat: HalfLine },
    Longitude(HalfLine),
    Latitude(HalfLine),
    /// Cell at or below a line through two (lat, lon) calibration points,
    /// lowered by `margin` degrees of latitude
    BelowLine {
        from: (f64, f64),
        to: (f64, f64),
        margin: f64,
    },
}

impl ExclusionRule {
    pub fn excludes(&self, lat: f64, lon: f64) -> bool {
        match *self {
            ExclusionRule::Quadrant { lon: lon_cut, lat: lat_cut } => {
                lon_cut.holds(lon) && lat_cut.holds(lat)
            }
            ExclusionRule::Longitude(cut) => cut.holds(lon),
            ExclusionRule::Latitude(cut) => cut.holds(lat),
            ExclusionRule::BelowLine { from, to, margin } => {
                let (lat1, lon1) = from;
                let (lat2, lon2) = to;
                let line_lat = lat1 + (lon - lon1) * (lat2 - lat1) / (lon2 - lon1);
                lat <= line_lat - margin
            }
        }
    }
}

/// Bounding box plus ordered exclusions; every rule must pass
#[derive(Debug, Clone)]
pub struct RegionOutline {
    pub bounds: BoundingBox,
    pub rules: Vec<ExclusionRule>,
}

impl RegionOutline {
    /// Texas with New Mexico, Oklahoma, Mexico and the Gulf trimmed off
    pub fn texas() -> Self {
        use ExclusionRule::*;
        use HalfLine::*;

        Self {
            bounds: BoundingBox::texas(),
            rules: vec![
                // New Mexico overhang west of the Panhandle
                Quadrant { lon: AtOrBelow(-103.1), lat: AtOrAbove(32.0) },
                // New Mexico diagonal toward El Paso
                Quadrant { lon: AtOrBelow(-104.5), lat: AtOrAbove(30.5) },
                Longitude(AtOrBelow(-105.5)),
                // Oklahoma
                Latitude(AtOrAbove(36.49)),
                // Rio Grande, Brownsville to Big Bend
                BelowLine { from: (25.83, -97.15), to: (29.70, -103.0), margin: 0.3 },
                // Gulf of Mexico
                Quadrant { lon: AtOrAbove(-94.1), lat: AtOrBelow(29.5) },
            ],
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.bounds.contains(lat, lon) && !self.rules.iter().any(|rule| rule.excludes(lat, lon))
    }
}
