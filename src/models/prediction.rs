//! Prediction response model

use serde::Serialize;

/// Response body for `/predict`.
///
/// `probability` carries the raw integer class label, not a calibrated
/// probability. The name is historical and downstream consumers depend on
/// the exact shape, so it stays.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub city: String,
    pub risk_level: &'static str,
    pub probability: i32,
}

/// Map a classifier label to its human-readable risk tier.
pub fn risk_level(label: i32) -> &'static str {
    if label == 1 {
        "High Risk"
    } else {
        "Low Risk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_one_is_high_risk() {
        assert_eq!(risk_level(1), "High Risk");
    }

    #[test]
    fn other_labels_are_low_risk() {
        assert_eq!(risk_level(0), "Low Risk");
        assert_eq!(risk_level(-1), "Low Risk");
        assert_eq!(risk_level(2), "Low Risk");
    }

    #[test]
    fn response_serializes_with_stable_field_order() {
        let response = PredictionResponse {
            city: "Pune".to_string(),
            risk_level: risk_level(1),
            probability: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"city":"Pune","risk_level":"High Risk","probability":1}"#
        );
    }
}
