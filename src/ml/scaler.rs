//! Standard scaler artifact

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Features, ModelError, Scaler, FEATURE_COUNT};

/// Per-feature mean/scale parameters exported from the training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: [f64; FEATURE_COUNT],
    pub scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Load scaler parameters from a JSON artifact.
    pub fn load(path: &str) -> Result<Self, ModelError> {
        let file = File::open(Path::new(path)).map_err(|e| ModelError::Load {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| ModelError::Load {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: Features) -> Features {
        let mut scaled = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_centers_and_scales_each_feature() {
        let scaler = StandardScaler {
            mean: [20.0, 60.0, 1000.0, 10.0],
            scale: [5.0, 10.0, 2.5, 4.0],
        };

        let scaled = scaler.transform([25.0, 80.0, 1005.0, 12.0]);
        assert_eq!(scaled, [1.0, 2.0, 2.0, 0.5]);
    }

    #[test]
    fn transform_is_position_wise() {
        let scaler = StandardScaler {
            mean: [1.0, 2.0, 3.0, 4.0],
            scale: [1.0, 1.0, 1.0, 1.0],
        };

        let scaled = scaler.transform([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(scaled, [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn load_rejects_missing_artifact() {
        let err = StandardScaler::load("/nonexistent/scaler.json").unwrap_err();
        assert!(matches!(err, ModelError::Load { .. }));
    }
}
