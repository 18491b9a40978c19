//! Precipitation correction applied on top of the classifier output.
//!
//! The trained model underweights rainfall, so a fixed set of reductions is
//! subtracted from the raw elevated-risk probability. Thresholds and amounts
//! are part of the service's observable behavior and must not drift.

use serde::Serialize;
use tracing::debug;

use super::model::{LABEL_ELEVATED, LABEL_LOW};

pub const HEAVY_PRECIPITATION_MM: f64 = 5.0;
pub const MODERATE_PRECIPITATION_MM: f64 = 2.0;
pub const LIGHT_PRECIPITATION_MM: f64 = 1.0;
/// Evaporation at or below this (with moderate rain) marks very wet conditions.
pub const WET_EVAPORATION_MM: f64 = 1.0;
/// Adjusted probabilities at or above this are labeled elevated.
pub const ELEVATED_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRule {
    HeavyPrecipitation,
    ModeratePrecipitation,
    LightPrecipitation,
    VeryWetConditions,
}

impl AdjustmentRule {
    pub const fn reduction(self) -> f64 {
        match self {
            Self::HeavyPrecipitation => 0.50,
            Self::ModeratePrecipitation => 0.35,
            Self::LightPrecipitation => 0.15,
            Self::VeryWetConditions => 0.15,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HeavyPrecipitation => "heavy precipitation",
            Self::ModeratePrecipitation => "moderate precipitation",
            Self::LightPrecipitation => "light precipitation",
            Self::VeryWetConditions => "very wet conditions",
        }
    }
}

/// Elevated-risk probability after the correction layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedRisk {
    pub p_elevated: f64,
    pub risk_level: u8,
    /// Rules that fired, in evaluation order.
    pub applied: Vec<AdjustmentRule>,
}

/// Rules that fire for the given conditions: at most one precipitation tier,
/// plus the independent very-wet reduction.
pub fn applicable_rules(prcp: f64, evap: f64) -> Vec<AdjustmentRule> {
    let mut rules = Vec::with_capacity(2);

    if prcp >= HEAVY_PRECIPITATION_MM {
        rules.push(AdjustmentRule::HeavyPrecipitation);
    } else if prcp >= MODERATE_PRECIPITATION_MM {
        rules.push(AdjustmentRule::ModeratePrecipitation);
    } else if prcp >= LIGHT_PRECIPITATION_MM {
        rules.push(AdjustmentRule::LightPrecipitation);
    }

    if evap <= WET_EVAPORATION_MM && prcp >= MODERATE_PRECIPITATION_MM {
        rules.push(AdjustmentRule::VeryWetConditions);
    }

    rules
}

pub fn adjust_risk(raw_p_elevated: f64, prcp: f64, evap: f64) -> AdjustedRisk {
    // NaN.clamp propagates NaN, so fall back to zero first.
    let mut p_elevated = if raw_p_elevated.is_nan() {
        0.0
    } else {
        raw_p_elevated.clamp(0.0, 1.0)
    };

    let applied = applicable_rules(prcp, evap);
    for rule in &applied {
        p_elevated = (p_elevated - rule.reduction()).max(0.0);
        debug!(
            rule = rule.label(),
            reduction = rule.reduction(),
            prcp,
            evap,
            p_elevated,
            "applied precipitation adjustment"
        );
    }

    AdjustedRisk {
        p_elevated,
        risk_level: risk_label(p_elevated),
        applied,
    }
}

/// Adjusted elevated-risk probability; always within `[0, 1]`.
pub fn adjust(raw_p_elevated: f64, prcp: f64, evap: f64) -> f64 {
    adjust_risk(raw_p_elevated, prcp, evap).p_elevated
}

pub fn risk_label(p_elevated: f64) -> u8 {
    if p_elevated >= ELEVATED_THRESHOLD {
        LABEL_ELEVATED
    } else {
        LABEL_LOW
    }
}
