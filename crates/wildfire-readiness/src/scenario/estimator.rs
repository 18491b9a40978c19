use serde::Serialize;
use tracing::debug;

use super::region::{Coordinates, Region};
use super::zip::ZipCode;
use crate::scoring::FeatureVector;

pub const SCENARIO_SOURCE: &str = "historical-scenario";

/// Synthetic inputs for a ZIP code, built from static historical patterns
/// rather than live weather.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRecord {
    #[serde(flatten)]
    pub features: FeatureVector,
    /// Human-readable scenario description.
    pub scenario: &'static str,
    pub source: &'static str,
    pub region: Region,
    pub lat: f64,
    pub lon: f64,
}

/// Deterministic scenario for a ZIP: region weather plus the synthetic
/// distance estimate.
pub fn estimate(zip: ZipCode) -> ScenarioRecord {
    let region = Region::classify(zip.value());
    let weather = region.weather();
    let Coordinates { lat, lon } = coordinates(zip);

    let record = ScenarioRecord {
        features: FeatureVector {
            tmax: weather.tmax,
            awnd: weather.awnd,
            prcp: weather.prcp,
            evap: weather.evap,
            distance_to_fire_km: estimate_distance(zip),
        },
        scenario: weather.description,
        source: SCENARIO_SOURCE,
        region,
        lat,
        lon,
    };

    debug!(%zip, ?region, distance_km = record.features.distance_to_fire_km, "generated scenario");
    record
}

/// Demo approximation of the distance to the nearest historical fire
/// perimeter, in km.
///
/// This is not a geospatial computation. It spreads ZIPs within a region
/// across a plausible band (`base + (zip mod M) * step`) so neighboring
/// codes feed the model different inputs.
pub fn estimate_distance(zip: ZipCode) -> f64 {
    let params = Region::classify(zip.value()).distance_params();
    let variation = f64::from(zip.value() % params.modulus) * params.step_km;
    round_one_decimal(params.base_km + variation)
}

/// Approximate location of the ZIP's region.
pub fn coordinates(zip: ZipCode) -> Coordinates {
    Region::classify(zip.value()).coordinates()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
