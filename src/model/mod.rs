//! Pre-trained classifiers and the model registry
//!
//! A classifier is an opaque, pre-fitted binary predictor for one disease.
//! The `Classifier` trait is the substitution seam: anything exposing a
//! single-vector-in, single-label-out inference operation can occupy a
//! registry slot, regardless of how it was trained or serialized.

pub mod linear;
pub mod registry;

pub use linear::LinearModel;
pub use registry::ModelRegistry;

use crate::disease::DiseaseKey;

/// Capability contract for a pre-fitted binary classifier.
///
/// Implementations are immutable after construction and safe to share
/// across concurrent requests. `predict` must be deterministic: repeated
/// calls with an identical vector return the same label.
pub trait Classifier: Send + Sync {
    /// Disease this classifier screens for
    fn disease(&self) -> DiseaseKey;

    /// Number of features the classifier expects
    fn feature_count(&self) -> usize;

    /// Run inference on one feature vector and return the raw label.
    ///
    /// The dispatcher interprets the label strictly: `1` is positive, any
    /// other value is negative. Errors are wrapped as `PredictionFailed`
    /// and never retried.
    fn predict(&self, features: &[f64]) -> anyhow::Result<i64>;
}
