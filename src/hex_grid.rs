//! Flat-top hexagonal tiling
//!
//! An H3-resolution-7 lookalike (~5 km cells) built directly in degree space.
//! Columns are spaced at 3/4 of the cell width and every odd column is shifted
//! up by half a cell height, so neighbouring columns interlock into hexagons.
//! Centroids are rounded to 5 decimals; ids and boundaries derive from the
//! rounded values only, which keeps both deterministic across runs.

use crate::utils::geometry::round_to;
use serde::Serialize;

/// Decimal places kept on centroids and corners
pub const COORD_DECIMALS: i32 = 5;

/// Texas envelope and ~5 km cell size
pub const TEXAS_LAT_MIN: f64 = 25.83;
pub const TEXAS_LAT_MAX: f64 = 36.50;
pub const TEXAS_LON_MIN: f64 = -106.65;
pub const TEXAS_LON_MAX: f64 = -93.51;
pub const TEXAS_HEX_SIZE_LAT: f64 = 0.045; // ~5 km N-S
pub const TEXAS_HEX_SIZE_LON: f64 = 0.052; // ~5 km E-W at ~31°N

/// Inclusive lat/lon box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn texas() -> Self {
        Self {
            lat_min: TEXAS_LAT_MIN,
            lat_max: TEXAS_LAT_MAX,
            lon_min: TEXAS_LON_MIN,
            lon_max: TEXAS_LON_MAX,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

/// One grid cell: rounded centroid plus its stable id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexCell {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

/// Generates the centroid grid for a bounding box
#[derive(Debug, Clone)]
pub struct HexTiler {
    pub bounds: BoundingBox,
    /// Cell height, degrees latitude
    pub size_lat: f64,
    /// Cell width, degrees longitude
    pub size_lon: f64,
    pub id_prefix: String,
}

impl HexTiler {
    pub fn new(bounds: BoundingBox, size_lat: f64, size_lon: f64, id_prefix: &str) -> Self {
        Self {
            bounds,
            size_lat,
            size_lon,
            id_prefix: id_prefix.to_string(),
        }
    }

    pub fn texas() -> Self {
        Self::new(BoundingBox::texas(), TEXAS_HEX_SIZE_LAT, TEXAS_HEX_SIZE_LON, "TX")
    }

    /// Centroids in column-major order (west to east, south to north).
    ///
    /// Positions come from integer column/row indices rather than a running
    /// sum, so the sequence has no accumulated floating-point drift.
    pub fn centroids(&self) -> Vec<(f64, f64)> {
        let mut centroids = Vec::new();
        if !(self.size_lat > 0.0 && self.size_lon > 0.0) {
            return centroids;
        }

        let col_step = self.size_lon * 0.75;

        let mut col: u32 = 0;
        loop {
            let lon = self.bounds.lon_min + f64::from(col) * col_step;
            if lon > self.bounds.lon_max {
                break;
            }

            let row_offset = if col % 2 == 1 { self.size_lat / 2.0 } else { 0.0 };

            let mut row: u32 = 0;
            loop {
                let lat = self.bounds.lat_min + row_offset + f64::from(row) * self.size_lat;
                if lat > self.bounds.lat_max {
                    break;
                }
                centroids.push((round_to(lat, COORD_DECIMALS), round_to(lon, COORD_DECIMALS)));
                row += 1;
            }

            col += 1;
        }

        centroids
    }

    /// Centroids paired with their ids
    pub fn cells(&self) -> Vec<HexCell> {
        self.centroids()
            .into_iter()
            .map(|(lat, lon)| HexCell {
                id: hex_id(&self.id_prefix, lat, lon),
                lat,
                lon,
            })
            .collect()
    }

    /// Corner ring for a cell of this grid
    pub fn boundary(&self, cell: &HexCell) -> [(f64, f64); 6] {
        hex_boundary(cell.lat, cell.lon, self.size_lat, self.size_lon)
    }
}

/// Deterministic id from a centroid, e.g. `TX_31p85000_N101p96000`.
///
/// Both coordinates are written at full 5-decimal precision; `-` becomes `N`
/// and `.` becomes `p`. Neither letter appears in a formatted number, so the
/// mapping is lossless and two distinct rounded centroids never share an id.
pub fn hex_id(prefix: &str, lat: f64, lon: f64) -> String {
    let lat = round_to(lat, COORD_DECIMALS);
    let lon = round_to(lon, COORD_DECIMALS);
    let encoded = format!("{:.5}_{:.5}", lat, lon).replace('-', "N").replace('.', "p");
    format!("{}_{}", prefix, encoded)
}

/// Six flat-top corners as (lat, lon), starting at 0° (due east) and
/// stepping 60° counter-clockwise.
///
/// Each corner sits half a cell height/width from the centroid. This is an
/// outline for rendering; corners of neighbouring cells need not coincide.
pub fn hex_boundary(lat: f64, lon: f64, size_lat: f64, size_lon: f64) -> [(f64, f64); 6] {
    let r_lat = size_lat / 2.0;
    let r_lon = size_lon / 2.0;

    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64).to_radians();
        (
            round_to(lat + r_lat * angle.sin(), COORD_DECIMALS),
            round_to(lon + r_lon * angle.cos(), COORD_DECIMALS),
        )
    })
}
