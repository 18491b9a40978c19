use super::features::FeatureVector;

const DISTANCE_VERY_CLOSE: &str = "Distance to historical fire perimeters is very close.";
const DISTANCE_MODERATELY_CLOSE: &str =
    "Proximity to historical fire activity is moderately close.";
const DISTANCE_MODERATE: &str = "Distance to historical fire perimeters is moderate.";
const DISTANCE_FAR: &str = "Distance to historical fire perimeters is relatively far today.";

const WIND_ELEVATED: &str =
    "Winds are elevated, which can increase spread potential under dry conditions.";
const WIND_MODERATE: &str = "Winds are moderate.";
const WIND_CALM: &str = "Winds are relatively calm.";

const DRYNESS_HIGH: &str =
    "Dryness is high and precipitation is low, creating favorable conditions for fire spread.";
const DRYNESS_ELEVATED: &str = "Dryness (evaporation) is elevated for the season.";

const TEMPERATURE_HIGH: &str = "Temperatures are high, which can contribute to drier fuels.";

/// Plain-language rationale, ordered for display: distance, wind,
/// precipitation or dryness, then temperature.
///
/// Works from the request's raw feature values. The adjusted probability is
/// accepted so callers pass the same pair they return, though no sentence
/// depends on it today.
pub fn explain(features: &FeatureVector, _p_elevated: f64) -> Vec<String> {
    let mut why = Vec::with_capacity(4);

    why.push(distance_reason(features.distance_to_fire_km).to_string());
    why.push(wind_reason(features.awnd).to_string());
    if let Some(reason) = moisture_reason(features.prcp, features.evap) {
        why.push(reason);
    }
    if features.tmax >= 32.0 {
        why.push(TEMPERATURE_HIGH.to_string());
    }

    why
}

fn distance_reason(distance_km: f64) -> &'static str {
    if distance_km <= 10.0 {
        DISTANCE_VERY_CLOSE
    } else if distance_km <= 25.0 {
        DISTANCE_MODERATELY_CLOSE
    } else if distance_km <= 50.0 {
        DISTANCE_MODERATE
    } else {
        DISTANCE_FAR
    }
}

fn wind_reason(wind_kmh: f64) -> &'static str {
    if wind_kmh >= 20.0 {
        WIND_ELEVATED
    } else if wind_kmh >= 15.0 {
        WIND_MODERATE
    } else {
        WIND_CALM
    }
}

fn moisture_reason(prcp: f64, evap: f64) -> Option<String> {
    if prcp >= 5.0 {
        Some(format!(
            "Significant precipitation ({prcp:.1}mm) significantly reduces short-term fire readiness risk."
        ))
    } else if prcp >= 2.0 {
        Some(format!(
            "Moderate precipitation ({prcp:.1}mm) helps reduce fire readiness risk."
        ))
    } else if prcp >= 1.0 {
        Some(format!(
            "Light precipitation ({prcp:.1}mm) provides some moisture to reduce risk."
        ))
    } else if evap >= 5.0 && prcp <= 1.0 {
        Some(DRYNESS_HIGH.to_string())
    } else if evap >= 4.0 {
        Some(DRYNESS_ELEVATED.to_string())
    } else {
        None
    }
}
