//! Random forest classifier artifact

use std::fs;
use std::path::Path;

use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::{Classifier, Features, ModelError, FEATURE_COUNT};

/// Pre-fit binary random forest, deserialized from a bincode artifact
/// exported by the training pipeline. Internals are opaque to this service;
/// only the predict contract matters.
#[derive(Debug)]
pub struct RandomForestModel {
    forest: RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>,
}

impl RandomForestModel {
    /// Load the classifier artifact from disk.
    pub fn load(path: &str) -> Result<Self, ModelError> {
        let bytes = fs::read(Path::new(path)).map_err(|e| ModelError::Load {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let forest = bincode::deserialize(&bytes).map_err(|e| ModelError::Load {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { forest })
    }
}

impl Classifier for RandomForestModel {
    fn predict(&self, features: Features) -> Result<i32, ModelError> {
        let x = DenseMatrix::new(1, FEATURE_COUNT, features.to_vec(), false);
        let labels = self
            .forest
            .predict(&x)
            .map_err(|e| ModelError::Predict(e.to_string()))?;

        labels
            .first()
            .copied()
            .ok_or_else(|| ModelError::Predict("classifier returned no label".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_missing_artifact() {
        let err = RandomForestModel::load("/nonexistent/model.bin").unwrap_err();
        assert!(matches!(err, ModelError::Load { .. }));
    }
}
