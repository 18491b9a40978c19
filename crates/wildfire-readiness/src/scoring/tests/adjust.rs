use crate::scoring::adjust::{adjust, adjust_risk, applicable_rules, risk_label, AdjustmentRule};
use crate::scoring::model::{LABEL_ELEVATED, LABEL_LOW};

const EPSILON: f64 = 1e-9;

fn raw_grid() -> impl Iterator<Item = f64> {
    (0..=20).map(|step| f64::from(step) / 20.0)
}

#[test]
fn dry_conditions_leave_probability_untouched() {
    let adjusted = adjust_risk(0.73, 0.0, 4.5);
    assert_eq!(adjusted.p_elevated, 0.73);
    assert!(adjusted.applied.is_empty());
    assert_eq!(adjusted.risk_level, LABEL_ELEVATED);
}

#[test]
fn precipitation_tiers_subtract_fixed_amounts() {
    assert!((adjust(0.9, 0.99, 3.0) - 0.9).abs() < EPSILON);
    assert!((adjust(0.9, 1.0, 3.0) - 0.75).abs() < EPSILON);
    assert!((adjust(0.9, 1.99, 3.0) - 0.75).abs() < EPSILON);
    assert!((adjust(0.9, 2.0, 3.0) - 0.55).abs() < EPSILON);
    assert!((adjust(0.9, 4.99, 3.0) - 0.55).abs() < EPSILON);
    assert!((adjust(0.9, 5.0, 3.0) - 0.4).abs() < EPSILON);
}

#[test]
fn only_one_precipitation_tier_applies() {
    assert_eq!(
        applicable_rules(7.5, 3.0),
        vec![AdjustmentRule::HeavyPrecipitation]
    );
    assert_eq!(
        applicable_rules(1.5, 0.2),
        vec![AdjustmentRule::LightPrecipitation]
    );
}

#[test]
fn very_wet_reduction_stacks_with_tier() {
    assert_eq!(
        applicable_rules(2.0, 1.0),
        vec![
            AdjustmentRule::ModeratePrecipitation,
            AdjustmentRule::VeryWetConditions
        ]
    );
    assert!((adjust(0.9, 2.0, 1.0) - 0.4).abs() < EPSILON);
    // low evaporation alone, without moderate rain, does nothing
    assert_eq!(
        applicable_rules(1.9, 0.0),
        vec![AdjustmentRule::LightPrecipitation]
    );
    assert!(applicable_rules(0.0, 0.0).is_empty());
}

#[test]
fn heavy_rain_override_removes_at_least_sixty_five_points() {
    for raw in raw_grid() {
        let adjusted = adjust(raw, 6.0, 0.5);
        let expected = (raw - 0.65).max(0.0);
        assert!(
            adjusted <= expected + EPSILON,
            "raw {raw} adjusted to {adjusted}"
        );
        assert!(adjusted >= 0.0);
    }
}

#[test]
fn clamps_after_each_step() {
    // 0.4 - 0.5 clamps to 0 before the wet reduction; it never goes negative
    let adjusted = adjust_risk(0.4, 6.0, 0.5);
    assert_eq!(adjusted.p_elevated, 0.0);
    assert_eq!(adjusted.risk_level, LABEL_LOW);
    assert_eq!(adjusted.applied.len(), 2);
}

#[test]
fn result_stays_in_unit_interval_for_any_raw_output() {
    for raw in [-3.0, -0.1, 0.0, 0.5, 1.0, 1.7, f64::INFINITY, f64::NAN] {
        for (prcp, evap) in [
            (0.0, 9.0),
            (1.2, 3.0),
            (3.0, 0.4),
            (80.0, 0.0),
            (-4.0, -1.0),
        ] {
            let p = adjust(raw, prcp, evap);
            assert!((0.0..=1.0).contains(&p), "raw {raw} prcp {prcp} -> {p}");
        }
    }
}

#[test]
fn monotonic_in_precipitation_tier() {
    for raw in raw_grid() {
        for evap in [0.5, 1.0, 3.0, 6.0] {
            let heavy = adjust(raw, 5.0, evap);
            let moderate = adjust(raw, 2.0, evap);
            let light = adjust(raw, 1.0, evap);
            let dry = adjust(raw, 0.0, evap);
            assert!(heavy <= moderate, "raw {raw} evap {evap}");
            assert!(moderate <= light, "raw {raw} evap {evap}");
            assert!(light <= dry, "raw {raw} evap {evap}");
        }
    }
}

#[test]
fn label_tracks_adjusted_probability() {
    for raw in raw_grid() {
        for prcp in [0.0, 1.0, 2.0, 5.0] {
            let adjusted = adjust_risk(raw, prcp, 0.8);
            let expected = if adjusted.p_elevated >= 0.5 { 1 } else { 0 };
            assert_eq!(adjusted.risk_level, expected);
        }
    }
    assert_eq!(risk_label(0.5), LABEL_ELEVATED);
    assert_eq!(risk_label(0.4999), LABEL_LOW);
}

#[test]
fn moderate_rain_can_flip_the_label() {
    let adjusted = adjust_risk(0.8, 2.5, 3.0);
    assert!((adjusted.p_elevated - 0.45).abs() < EPSILON);
    assert_eq!(adjusted.risk_level, LABEL_LOW);
}
