//! Reference Data Layers
//!
//! Static datasets the scorers read: transmission substations, corridors,
//! renewable generation zones, water basins, temperature normals and
//! population centers. Everything is built once into a [`ReferenceData`]
//! and handed to the scorer by reference; nothing mutates it afterwards.
//!
//! The Texas values are synthesized from public sources:
//!   - ERCOT nodal model, EIA Form-411, CREZ build-out (substations, corridors)
//!   - ERCOT renewable zones (generation)
//!   - TWDB river basin runoff and reservoir storage (water)
//!   - NOAA 1991-2020 annual normals (temperature)
//!   - Census density for the major metros (load saturation)

use serde::Serialize;

/// High-voltage substation with estimated spare capacity
#[derive(Debug, Clone, Serialize)]
pub struct Substation {
    pub lat: f64,
    pub lon: f64,
    /// Spare capacity, MW
    pub spare_capacity_mw: f64,
    pub voltage_kv: f64,
    /// Built as part of a Competitive Renewable Energy Zone (export-oriented)
    pub in_crez: bool,
}

/// Transmission line simplified to one straight segment
#[derive(Debug, Clone, Serialize)]
pub struct Corridor {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub voltage_kv: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationKind {
    Wind,
    Solar,
}

/// Installed renewable generation with little co-located load
#[derive(Debug, Clone, Serialize)]
pub struct RenewableZone {
    pub lat: f64,
    pub lon: f64,
    pub generation_gw: f64,
    pub kind: GenerationKind,
}

/// River basin centroid with a 0-100 water availability index
#[derive(Debug, Clone, Serialize)]
pub struct WaterBasin {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub availability: f64,
}

/// 30-year average annual temperature at a station, °F
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureNormal {
    pub lat: f64,
    pub lon: f64,
    pub avg_temp_f: f64,
}

/// Load center; density in thousands of people per square mile
#[derive(Debug, Clone, Serialize)]
pub struct PopulationCenter {
    pub lat: f64,
    pub lon: f64,
    pub density_thousands: f64,
}

/// Main data holder for site scoring
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceData {
    pub substations: Vec<Substation>,
    pub corridors: Vec<Corridor>,
    pub renewable_zones: Vec<RenewableZone>,
    pub water_basins: Vec<WaterBasin>,
    pub temperature_normals: Vec<TemperatureNormal>,
    pub population_centers: Vec<PopulationCenter>,
}

impl ReferenceData {
    /// The embedded Texas dataset
    pub fn texas() -> Self {
        let data = Self {
            substations: SUBSTATIONS
                .iter()
                .map(|&(lat, lon, spare_capacity_mw, voltage_kv, in_crez)| Substation {
                    lat,
                    lon,
                    spare_capacity_mw,
                    voltage_kv,
                    in_crez,
                })
                .collect(),
            corridors: CORRIDORS
                .iter()
                .map(|&(from, to, voltage_kv)| Corridor { from, to, voltage_kv })
                .collect(),
            renewable_zones: RENEWABLE_ZONES
                .iter()
                .map(|&(lat, lon, generation_gw, kind)| RenewableZone {
                    lat,
                    lon,
                    generation_gw,
                    kind,
                })
                .collect(),
            water_basins: WATER_BASINS
                .iter()
                .map(|&(name, lat, lon, availability)| WaterBasin {
                    name,
                    lat,
                    lon,
                    availability,
                })
                .collect(),
            temperature_normals: TEMPERATURE_NORMALS
                .iter()
                .map(|&(lat, lon, avg_temp_f)| TemperatureNormal { lat, lon, avg_temp_f })
                .collect(),
            population_centers: POPULATION_CENTERS
                .iter()
                .map(|&(lat, lon, density_thousands)| PopulationCenter {
                    lat,
                    lon,
                    density_thousands,
                })
                .collect(),
        };

        tracing::debug!(
            substations = data.substations.len(),
            corridors = data.corridors.len(),
            renewable_zones = data.renewable_zones.len(),
            water_basins = data.water_basins.len(),
            temperature_normals = data.temperature_normals.len(),
            population_centers = data.population_centers.len(),
            "Loaded Texas reference layers"
        );

        data
    }
}

// ---------------------------------------------------------------------------
// Texas tables
// ---------------------------------------------------------------------------

use GenerationKind::{Solar, Wind};

// (lat, lon, spare_capacity_MW, voltage_kV, in_crez)
const SUBSTATIONS: &[(f64, f64, f64, f64, bool)] = &[
    // West Texas wind CREZ
    (31.85, -101.96, 450.0, 345.0, true),  // Midland
    (31.43, -102.73, 520.0, 345.0, true),  // Odessa
    (32.45, -100.91, 380.0, 345.0, true),  // Abilene
    (33.12, -101.84, 490.0, 345.0, true),  // Lubbock South
    (30.28, -103.65, 410.0, 345.0, true),  // Pecos
    (31.10, -104.82, 360.0, 345.0, true),  // Fort Stockton
    (29.72, -102.88, 330.0, 345.0, true),  // Del Rio
    (28.70, -100.50, 280.0, 345.0, true),  // Eagle Pass wind
    // Panhandle wind
    (35.22, -101.83, 500.0, 345.0, true),  // Amarillo
    (34.18, -101.72, 420.0, 345.0, true),  // Plainview
    (33.58, -102.38, 390.0, 345.0, true),  // Levelland
    (35.85, -100.12, 460.0, 345.0, true),  // Pampa
    // Dallas-Fort Worth load center
    (32.78, -97.35, 40.0, 500.0, false),   // Fort Worth
    (32.90, -97.04, 30.0, 500.0, false),   // DFW
    (32.78, -96.80, 25.0, 500.0, false),   // Dallas
    (33.15, -96.65, 35.0, 500.0, false),   // McKinney
    (32.45, -97.79, 60.0, 345.0, false),   // Granbury
    // Houston load center
    (29.76, -95.37, 20.0, 500.0, false),   // Houston central
    (29.62, -95.01, 30.0, 500.0, false),   // Pasadena
    (29.95, -95.55, 45.0, 345.0, false),   // Spring
    (29.56, -95.22, 35.0, 500.0, false),   // Pearland
    // San Antonio
    (29.42, -98.49, 55.0, 345.0, false),
    (29.18, -98.65, 80.0, 345.0, false),   // Pleasanton
    // Austin
    (30.27, -97.74, 45.0, 345.0, false),
    (30.60, -97.68, 70.0, 345.0, false),   // Georgetown
    // I-35 corridor
    (31.55, -97.12, 110.0, 345.0, false),  // Waco
    (30.52, -97.82, 90.0, 345.0, false),   // Round Rock
    (31.10, -97.36, 100.0, 345.0, false),  // Temple
    // South Texas solar CREZ
    (26.20, -98.23, 300.0, 345.0, true),   // McAllen
    (27.51, -99.50, 320.0, 345.0, true),   // Laredo
    (28.45, -99.12, 350.0, 345.0, true),   // Cotulla
    (26.92, -101.30, 290.0, 345.0, true),  // Eagle Pass solar
    // East Texas gas
    (32.35, -94.73, 130.0, 345.0, false),  // Longview
    (31.56, -94.65, 120.0, 345.0, false),  // Nacogdoches
    (30.16, -94.13, 110.0, 345.0, false),  // Beaumont
    (33.43, -94.04, 95.0, 345.0, false),   // Texarkana
    // Coast
    (27.80, -97.40, 140.0, 345.0, false),  // Corpus Christi
    (26.20, -97.67, 150.0, 345.0, true),   // Brownsville wind
    (28.95, -95.35, 90.0, 345.0, false),   // Bay City nuclear
];

// ((lat1, lon1), (lat2, lon2), kV)
const CORRIDORS: &[((f64, f64), (f64, f64), f64)] = &[
    // CREZ West Texas -> DFW (345 kV, 2013)
    ((31.85, -101.96), (31.55, -99.10), 345.0),
    ((31.55, -99.10), (32.45, -97.89), 345.0),
    ((32.45, -97.89), (32.78, -97.35), 345.0),
    // CREZ Panhandle -> DFW
    ((35.22, -101.83), (34.00, -100.50), 345.0),
    ((34.00, -100.50), (33.12, -99.20), 345.0),
    ((33.12, -99.20), (32.78, -97.35), 345.0),
    // South Texas -> San Antonio
    ((26.20, -98.23), (27.51, -99.50), 345.0),
    ((27.51, -99.50), (28.45, -99.12), 345.0),
    ((28.45, -99.12), (29.42, -98.49), 345.0),
    // Houston -> Austin
    ((29.76, -95.37), (30.27, -97.74), 345.0),
    // 500 kV backbone DFW -> Houston
    ((32.78, -97.35), (31.55, -96.80), 500.0),
    ((31.55, -96.80), (30.27, -97.00), 500.0),
    ((30.27, -97.00), (29.76, -95.37), 500.0),
];

// (lat, lon, generation_GW, kind)
const RENEWABLE_ZONES: &[(f64, f64, f64, GenerationKind)] = &[
    (31.85, -101.96, 8.2, Wind),   // Permian Basin
    (35.22, -101.83, 6.5, Wind),   // Panhandle
    (33.58, -102.38, 4.1, Wind),   // South Plains
    (28.70, -100.50, 2.8, Wind),   // Eagle Pass
    (26.92, -101.30, 3.2, Solar),  // Uvalde
    (28.45, -99.12, 2.5, Solar),   // Cotulla
    (30.28, -103.65, 3.8, Solar),  // Pecos
    (26.20, -97.67, 1.9, Wind),    // Brownsville
    (31.10, -104.82, 2.2, Solar),  // Fort Stockton
    (29.72, -102.88, 1.8, Solar),  // Del Rio
];

// (basin, lat, lon, availability 0-100)
const WATER_BASINS: &[(&str, f64, f64, f64)] = &[
    ("Sabine", 31.5, -94.0, 92.0),
    ("Neches", 31.0, -94.5, 88.0),
    ("Trinity", 32.0, -96.5, 72.0),
    ("San Jacinto", 30.1, -95.2, 70.0),
    ("Brazos_upper", 33.0, -99.0, 38.0),
    ("Brazos_lower", 29.5, -95.9, 62.0),
    ("Colorado_upper", 31.5, -100.5, 28.0),
    ("Colorado_lower", 29.6, -97.5, 58.0),
    ("Guadalupe", 29.8, -98.2, 55.0),
    ("San Antonio", 29.2, -98.8, 42.0),
    ("Nueces", 28.2, -99.8, 35.0),
    ("Rio Grande_low", 26.5, -98.8, 48.0),
    ("Rio Grande_up", 29.5, -103.5, 18.0),
    ("Pecos", 30.5, -102.5, 12.0),
    ("Canadian", 35.5, -100.5, 30.0),
    ("Red_upper", 34.5, -100.5, 32.0),
    ("Red_lower", 33.8, -96.5, 55.0),
    ("Sulphur", 33.3, -95.0, 68.0),
    ("Cypress", 32.8, -94.5, 78.0),
    ("East_Texas", 31.8, -94.5, 85.0),
    ("Gulf_Coast", 29.0, -95.5, 65.0),
    ("Panhandle_playa", 35.2, -102.0, 15.0), // Ogallala depleting
];

// (lat, lon, avg annual °F)
const TEMPERATURE_NORMALS: &[(f64, f64, f64)] = &[
    (26.2, -97.7, 73.5),   // Brownsville
    (27.5, -99.5, 72.1),   // Laredo
    (29.8, -95.4, 68.2),   // Houston
    (30.3, -97.7, 66.9),   // Austin
    (29.4, -98.5, 66.4),   // San Antonio
    (32.8, -97.0, 64.7),   // Dallas-Fort Worth
    (31.5, -97.1, 64.9),   // Waco
    (31.5, -100.4, 63.8),  // San Angelo
    (31.9, -102.3, 62.4),  // Midland
    (31.8, -106.4, 62.5),  // El Paso
    (35.2, -101.8, 57.6),  // Amarillo
    (33.6, -101.8, 58.2),  // Lubbock
    (32.4, -100.4, 62.3),  // Abilene
    (30.5, -103.5, 60.8),  // Alpine
    (30.1, -94.1, 67.4),   // Beaumont
    (32.4, -94.7, 63.8),   // Longview
    (33.4, -94.0, 62.5),   // Texarkana
    (27.8, -97.4, 70.8),   // Corpus Christi
    (28.9, -95.3, 69.2),   // Bay City
    (36.0, -100.0, 55.9),  // Higgins
    (34.0, -96.4, 60.5),   // Sherman
    (29.0, -102.0, 62.0),  // Sanderson
];

// (lat, lon, density, thousands per sq mi)
const POPULATION_CENTERS: &[(f64, f64, f64)] = &[
    (29.76, -95.37, 3.9),   // Houston
    (32.78, -96.80, 4.0),   // Dallas
    (32.78, -97.35, 2.8),   // Fort Worth
    (30.27, -97.74, 2.6),   // Austin
    (29.42, -98.49, 2.4),   // San Antonio
    (31.55, -97.12, 0.6),   // Waco
    (27.80, -97.40, 0.7),   // Corpus Christi
    (26.20, -98.23, 0.9),   // McAllen
    (33.58, -101.85, 0.4),  // Lubbock
    (31.85, -102.36, 0.3),  // Midland
    (31.85, -101.96, 0.25), // Odessa
    (32.45, -99.73, 0.2),   // Abilene
    (35.22, -101.83, 0.3),  // Amarillo
    (30.16, -94.13, 0.4),   // Beaumont
    (32.35, -94.73, 0.25),  // Longview
    (33.43, -94.04, 0.15),  // Texarkana
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texas_layer_sizes() {
        let data = ReferenceData::texas();
        assert_eq!(data.substations.len(), 39);
        assert_eq!(data.corridors.len(), 13);
        assert_eq!(data.renewable_zones.len(), 10);
        assert_eq!(data.water_basins.len(), 22);
        assert_eq!(data.temperature_normals.len(), 22);
        assert_eq!(data.population_centers.len(), 16);
    }

    #[test]
    fn test_water_availability_within_index_range() {
        for basin in ReferenceData::texas().water_basins {
            assert!(
                (0.0..=100.0).contains(&basin.availability),
                "basin '{}' availability out of range: {}",
                basin.name,
                basin.availability
            );
        }
    }

    #[test]
    fn test_no_duplicate_basin_names() {
        let mut seen = rustc_hash::FxHashSet::default();
        for basin in ReferenceData::texas().water_basins {
            assert!(seen.insert(basin.name), "duplicate basin '{}'", basin.name);
        }
    }

    #[test]
    fn test_all_points_inside_texas_envelope() {
        let data = ReferenceData::texas();
        let points = data
            .substations
            .iter()
            .map(|s| (s.lat, s.lon))
            .chain(data.renewable_zones.iter().map(|z| (z.lat, z.lon)))
            .chain(data.water_basins.iter().map(|b| (b.lat, b.lon)))
            .chain(data.temperature_normals.iter().map(|t| (t.lat, t.lon)))
            .chain(data.population_centers.iter().map(|p| (p.lat, p.lon)));

        for (lat, lon) in points {
            assert!((25.0..=37.0).contains(&lat), "lat {} outside envelope", lat);
            assert!((-107.0..=-93.0).contains(&lon), "lon {} outside envelope", lon);
        }
    }

    #[test]
    fn test_corridors_are_345_or_500_kv() {
        for corridor in ReferenceData::texas().corridors {
            assert!(corridor.voltage_kv == 345.0 || corridor.voltage_kv == 500.0);
        }
    }
}
