//! Pre-fit model artifacts
//!
//! The scaler and classifier are opaque, pre-trained artifacts loaded from
//! disk once at startup and shared read-only across requests. Both sit
//! behind small traits so handlers never see artifact internals and tests
//! can inject deterministic stubs.

pub mod scaler;
pub mod classifier;

pub use scaler::StandardScaler;
pub use classifier::RandomForestModel;

use thiserror::Error;

/// Number of features the artifacts were fit with.
pub const FEATURE_COUNT: usize = 4;

/// Fixed-order feature vector: temperature, humidity, pressure, wind_speed.
pub type Features = [f64; FEATURE_COUNT];

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load model artifact {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("prediction failed: {0}")]
    Predict(String),
}

/// Feature-wise affine transform fit offline.
pub trait Scaler: Send + Sync {
    fn transform(&self, features: Features) -> Features;
}

/// Binary decision function fit offline. Returns the discrete class label.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: Features) -> Result<i32, ModelError>;
}
