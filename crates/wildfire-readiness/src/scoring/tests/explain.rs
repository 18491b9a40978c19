use super::common::features;
use crate::scoring::explain::explain;

#[test]
fn dry_hot_close_day_lists_every_category_in_order() {
    let why = explain(&features(35.0, 22.0, 0.0, 6.0, 8.0), 0.9);
    assert_eq!(
        why,
        vec![
            "Distance to historical fire perimeters is very close.",
            "Winds are elevated, which can increase spread potential under dry conditions.",
            "Dryness is high and precipitation is low, creating favorable conditions for fire spread.",
            "Temperatures are high, which can contribute to drier fuels.",
        ]
    );
}

const VERY_CLOSE: &str = "Distance to historical fire perimeters is very close.";
const MODERATELY_CLOSE: &str = "Proximity to historical fire activity is moderately close.";
const MODERATE: &str = "Distance to historical fire perimeters is moderate.";
const FAR: &str = "Distance to historical fire perimeters is relatively far today.";

#[test]
fn distance_tiers_are_inclusive_upper_bounds() {
    let cases = [
        (10.0, VERY_CLOSE),
        (10.1, MODERATELY_CLOSE),
        (25.0, MODERATELY_CLOSE),
        (50.0, MODERATE),
        (50.1, FAR),
    ];
    for (distance, expected) in cases {
        let why = explain(&features(20.0, 5.0, 0.0, 2.0, distance), 0.3);
        assert_eq!(why[0], expected, "distance {distance}");
    }
}

#[test]
fn wind_tiers() {
    let wind = |awnd: f64| explain(&features(20.0, awnd, 0.0, 2.0, 80.0), 0.3)[1].clone();
    assert_eq!(wind(14.9), "Winds are relatively calm.");
    assert_eq!(wind(15.0), "Winds are moderate.");
    assert_eq!(
        wind(20.0),
        "Winds are elevated, which can increase spread potential under dry conditions."
    );
}

#[test]
fn precipitation_sentences_interpolate_one_decimal() {
    let moisture = |prcp: f64, evap: f64| {
        explain(&features(20.0, 5.0, prcp, evap, 80.0), 0.2)
            .get(2)
            .cloned()
    };
    assert_eq!(
        moisture(6.3, 6.0).as_deref(),
        Some("Significant precipitation (6.3mm) significantly reduces short-term fire readiness risk.")
    );
    assert_eq!(
        moisture(2.0, 6.0).as_deref(),
        Some("Moderate precipitation (2.0mm) helps reduce fire readiness risk.")
    );
    assert_eq!(
        moisture(1.04, 6.0).as_deref(),
        Some("Light precipitation (1.0mm) provides some moisture to reduce risk.")
    );
}

#[test]
fn precipitation_outranks_dryness() {
    let why = explain(&features(20.0, 5.0, 1.5, 7.0, 80.0), 0.2);
    assert_eq!(why.len(), 3);
    assert!(why[2].starts_with("Light precipitation"));
}

#[test]
fn dryness_falls_back_to_evaporation_only() {
    let why = explain(&features(20.0, 5.0, 0.5, 4.0, 80.0), 0.4);
    assert_eq!(why[2], "Dryness (evaporation) is elevated for the season.");

    let why = explain(&features(20.0, 5.0, 0.5, 3.9, 80.0), 0.4);
    assert_eq!(why.len(), 2, "no moisture sentence expected: {why:?}");
}

#[test]
fn temperature_sentence_is_independent() {
    let why = explain(&features(32.0, 5.0, 6.0, 0.5, 80.0), 0.0);
    assert_eq!(why.len(), 4);
    assert_eq!(
        why[3],
        "Temperatures are high, which can contribute to drier fuels."
    );

    let why = explain(&features(31.9, 5.0, 0.0, 0.0, 80.0), 0.0);
    assert!(why.iter().all(|line| !line.starts_with("Temperatures")));
}
