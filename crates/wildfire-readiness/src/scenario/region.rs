//! Static ZIP-range lookup tables.
//!
//! Geocoding, scenario weather, and the synthetic distance estimate all key
//! off the same ordered rule table. Rules are evaluated top to bottom and the
//! first match wins, so the order below is load-bearing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    SanJose,
    SantaCruz,
    BayArea,
    InlandValley,
    Default,
}

/// Inclusive ZIP ranges matched by a rule.
pub struct RegionRule {
    pub region: Region,
    pub ranges: &'static [(u32, u32)],
}

impl RegionRule {
    pub fn matches(&self, zip: u32) -> bool {
        self.ranges
            .iter()
            .any(|(low, high)| (*low..=*high).contains(&zip))
    }
}

pub const REGION_RULES: &[RegionRule] = &[
    RegionRule {
        region: Region::SanJose,
        ranges: &[(95100, 95199)],
    },
    RegionRule {
        region: Region::SantaCruz,
        ranges: &[(95060, 95067), (95073, 95073)],
    },
    RegionRule {
        region: Region::BayArea,
        ranges: &[(94000, 94999), (95000, 95059), (95070, 95099)],
    },
    RegionRule {
        region: Region::InlandValley,
        ranges: &[(90000, 93999)],
    },
];

/// Representative fire-season weather for a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherProfile {
    pub tmax: f64,
    pub awnd: f64,
    pub prcp: f64,
    pub evap: f64,
    pub description: &'static str,
}

/// `base + (zip mod modulus) * step` parameters for the distance estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceParams {
    pub base_km: f64,
    pub modulus: u32,
    pub step_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

const BAY_AREA_SUMMER: WeatherProfile = WeatherProfile {
    tmax: 28.0,
    awnd: 15.0,
    prcp: 0.0,
    evap: 4.5,
    description: "Typical Bay Area summer conditions (dry, moderate wind)",
};

const SAN_FRANCISCO: Coordinates = Coordinates {
    lat: 37.7749,
    lon: -122.4194,
};

impl Region {
    pub fn classify(zip: u32) -> Self {
        REGION_RULES
            .iter()
            .find(|rule| rule.matches(zip))
            .map(|rule| rule.region)
            .unwrap_or(Region::Default)
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::SanJose => "San Jose",
            Region::SantaCruz => "Santa Cruz",
            Region::BayArea => "Bay Area",
            Region::InlandValley => "Inland Valley",
            Region::Default => "California",
        }
    }

    pub fn weather(self) -> WeatherProfile {
        match self {
            Region::SanJose | Region::BayArea => BAY_AREA_SUMMER,
            Region::SantaCruz => WeatherProfile {
                tmax: 24.0,
                awnd: 18.0,
                prcp: 0.0,
                evap: 3.5,
                description: "Typical coastal conditions",
            },
            Region::InlandValley => WeatherProfile {
                tmax: 32.0,
                awnd: 12.0,
                prcp: 0.0,
                evap: 5.5,
                description: "Typical inland valley conditions (hot, dry)",
            },
            Region::Default => WeatherProfile {
                tmax: 26.0,
                awnd: 14.0,
                prcp: 0.0,
                evap: 4.0,
                description: "Representative California fire season conditions",
            },
        }
    }

    pub fn distance_params(self) -> DistanceParams {
        let (base_km, modulus, step_km) = match self {
            Region::SanJose => (55.0, 20, 2.5),
            Region::SantaCruz => (25.0, 15, 2.0),
            Region::BayArea => (50.0, 25, 3.0),
            Region::InlandValley => (40.0, 30, 2.5),
            Region::Default => (50.0, 20, 3.0),
        };
        DistanceParams {
            base_km,
            modulus,
            step_km,
        }
    }

    /// City-center approximation; unknown regions fall back to San Francisco.
    pub fn coordinates(self) -> Coordinates {
        match self {
            Region::SanJose => Coordinates {
                lat: 37.3382,
                lon: -121.8863,
            },
            Region::SantaCruz => Coordinates {
                lat: 36.9741,
                lon: -122.0308,
            },
            Region::InlandValley => Coordinates {
                lat: 34.0522,
                lon: -118.2437,
            },
            Region::BayArea | Region::Default => SAN_FRANCISCO,
        }
    }
}
