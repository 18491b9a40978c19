use serde::{Deserialize, Serialize};

/// How far the adjusted probability sits from the decision boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Moderate,
    High,
}

impl ConfidenceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Moderate => "Moderate",
            ConfidenceLevel::High => "High",
        }
    }
}

/// Bands are evaluated in order; the first match wins.
pub fn band(p_elevated: f64) -> ConfidenceLevel {
    if p_elevated < 0.20 || p_elevated > 0.80 {
        ConfidenceLevel::High
    } else if p_elevated < 0.35 || p_elevated > 0.65 {
        ConfidenceLevel::Moderate
    } else {
        ConfidenceLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_into_the_inner_band() {
        assert_eq!(band(0.1999), ConfidenceLevel::High);
        assert_eq!(band(0.20), ConfidenceLevel::Moderate);
        assert_eq!(band(0.3499), ConfidenceLevel::Moderate);
        assert_eq!(band(0.35), ConfidenceLevel::Low);
        assert_eq!(band(0.5), ConfidenceLevel::Low);
        assert_eq!(band(0.65), ConfidenceLevel::Low);
        assert_eq!(band(0.6501), ConfidenceLevel::Moderate);
        assert_eq!(band(0.80), ConfidenceLevel::Moderate);
        assert_eq!(band(0.8001), ConfidenceLevel::High);
    }

    #[test]
    fn extremes_are_high_confidence() {
        assert_eq!(band(0.0), ConfidenceLevel::High);
        assert_eq!(band(1.0), ConfidenceLevel::High);
    }

    #[test]
    fn serializes_as_title_case() {
        assert_eq!(
            serde_json::to_value(ConfidenceLevel::Moderate).expect("serializes"),
            serde_json::json!("Moderate")
        );
        assert_eq!(ConfidenceLevel::High.label(), "High");
    }
}
