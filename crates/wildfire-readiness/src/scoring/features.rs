use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FEATURE_COUNT: usize = 5;

/// Column order the classifier was trained on. Reordering silently corrupts
/// predictions, so [`FeatureVector::to_array`] is the only place that lays
/// values out for the model.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["TMAX", "AWND", "PRCP", "EVAP", "DISTANCE_TO_FIRE_KM"];

/// Daily weather and proximity inputs for a single readiness assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Maximum temperature (°C).
    #[serde(rename = "TMAX")]
    pub tmax: f64,
    /// Average wind speed (km/h).
    #[serde(rename = "AWND")]
    pub awnd: f64,
    /// Precipitation (mm).
    #[serde(rename = "PRCP")]
    pub prcp: f64,
    /// Evaporation (mm).
    #[serde(rename = "EVAP")]
    pub evap: f64,
    /// Distance to the nearest historical fire perimeter (km).
    #[serde(rename = "DISTANCE_TO_FIRE_KM")]
    pub distance_to_fire_km: f64,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.tmax,
            self.awnd,
            self.prcp,
            self.evap,
            self.distance_to_fire_km,
        ]
    }

    fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [tmax, awnd, prcp, evap, distance_to_fire_km] = values;
        Self {
            tmax,
            awnd,
            prcp,
            evap,
            distance_to_fire_km,
        }
    }

    /// Validate a loosely typed request body.
    ///
    /// Presence is checked for every field before any coercion so the error
    /// names all missing fields at once, in training order.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        let missing: Vec<&'static str> = FEATURE_NAMES
            .iter()
            .copied()
            .filter(|name| !object.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::Missing { fields: missing });
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            *slot = coerce(name, &object[name])?;
        }

        Ok(Self::from_array(values))
    }

    /// Reject already-typed inputs that could not have come through
    /// [`FeatureVector::from_payload`], naming the first offending field.
    pub fn validate(self) -> Result<Self, ValidationError> {
        match self
            .to_array()
            .iter()
            .zip(FEATURE_NAMES)
            .find(|(value, _)| !value.is_finite())
        {
            Some((_, field)) => Err(ValidationError::Invalid { field }),
            None => Ok(self),
        }
    }
}

/// Numbers, numeric strings, and booleans are accepted; the result must be finite.
fn coerce(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    number
        .filter(|number| number.is_finite())
        .ok_or(ValidationError::Invalid { field })
}

/// Request body problems, reported to callers as 400s.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .fields.join(", "))]
    Missing { fields: Vec<&'static str> },
    #[error("Invalid input: {field} must be numeric")]
    Invalid { field: &'static str },
    #[error("Invalid input: request body must be a JSON object")]
    NotAnObject,
    #[error("Invalid input: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_names_first_non_finite_field() {
        let features = FeatureVector {
            tmax: 30.0,
            awnd: f64::INFINITY,
            prcp: f64::NAN,
            evap: 4.0,
            distance_to_fire_km: 5.0,
        };
        assert_eq!(
            features.validate(),
            Err(ValidationError::Invalid { field: "AWND" })
        );
    }

    #[test]
    fn array_follows_training_order() {
        let features = FeatureVector {
            tmax: 1.0,
            awnd: 2.0,
            prcp: 3.0,
            evap: 4.0,
            distance_to_fire_km: 5.0,
        };
        assert_eq!(features.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn payload_key_order_does_not_leak_into_vector() {
        let payload = json!({
            "DISTANCE_TO_FIRE_KM": 50.0,
            "EVAP": 4.0,
            "PRCP": 3.0,
            "AWND": 2.0,
            "TMAX": 1.0,
        });
        let features = FeatureVector::from_payload(&payload).expect("valid payload");
        assert_eq!(features.to_array(), [1.0, 2.0, 3.0, 4.0, 50.0]);
    }

    #[test]
    fn lists_every_missing_field() {
        let err = FeatureVector::from_payload(&json!({ "TMAX": 28 })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                fields: vec!["AWND", "PRCP", "EVAP", "DISTANCE_TO_FIRE_KM"],
            }
        );
        assert_eq!(
            err.to_string(),
            "Missing required fields: AWND, PRCP, EVAP, DISTANCE_TO_FIRE_KM"
        );
    }

    #[test]
    fn coerces_numeric_strings_and_booleans() {
        let payload = json!({
            "TMAX": " 31.5 ",
            "AWND": 12,
            "PRCP": false,
            "EVAP": true,
            "DISTANCE_TO_FIRE_KM": "8",
        });
        let features = FeatureVector::from_payload(&payload).expect("coercible payload");
        assert_eq!(features.to_array(), [31.5, 12.0, 0.0, 1.0, 8.0]);
    }

    #[test]
    fn rejects_values_that_are_not_numbers() {
        for bad in [
            json!("hot"),
            Value::Null,
            json!([1.0]),
            json!({ "v": 1 }),
            json!("NaN"),
        ] {
            let payload = json!({
                "TMAX": 28,
                "AWND": bad,
                "PRCP": 0,
                "EVAP": 4.5,
                "DISTANCE_TO_FIRE_KM": 10,
            });
            assert_eq!(
                FeatureVector::from_payload(&payload),
                Err(ValidationError::Invalid { field: "AWND" })
            );
        }
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert_eq!(
            FeatureVector::from_payload(&json!([28, 15, 0, 4.5, 5])),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn serializes_with_feature_names() {
        let features = FeatureVector {
            tmax: 28.0,
            awnd: 15.0,
            prcp: 0.0,
            evap: 4.5,
            distance_to_fire_km: 5.0,
        };
        let value = serde_json::to_value(features).expect("serializes");
        for name in FEATURE_NAMES {
            assert!(value.get(name).is_some(), "missing {name}");
        }
    }
}
