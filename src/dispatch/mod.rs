//! Prediction dispatcher
//!
//! Routes a fixed-shape feature vector to the classifier registered for a
//! disease and interprets the model's raw label as a `Diagnosis`. The
//! dispatcher is stateless and side-effect free beyond the read-only
//! inference call; it borrows the immutable registry snapshot and can be
//! shared freely across concurrent requests.

use crate::disease::{Diagnosis, DiseaseKey};
use crate::error::{Result, TriageError};
use crate::model::ModelRegistry;

/// Dispatches feature vectors to the matching pre-trained classifier
pub struct Dispatcher<'r> {
    registry: &'r ModelRegistry,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher over a loaded registry
    #[must_use]
    pub const fn new(registry: &'r ModelRegistry) -> Self {
        Self { registry }
    }

    /// Predict the presence of a disease from one feature vector.
    ///
    /// Preconditions: the vector length must exactly match the disease's
    /// expected feature count and every element must be finite. Range
    /// constraints (for example age within 0–120) are the caller's
    /// responsibility; the core validates shape only.
    ///
    /// The raw label is interpreted strictly: `1` is positive, any other
    /// value (including `0`) is negative. No probability thresholding, no
    /// multi-class handling.
    pub fn predict(&self, disease: DiseaseKey, features: &[f64]) -> Result<Diagnosis> {
        let expected = disease.feature_count();
        if features.len() != expected {
            return Err(TriageError::InvalidFeatureVector {
                disease,
                expected,
                actual: features.len(),
            });
        }
        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(TriageError::NonFiniteFeature { disease, index });
        }

        let classifier = self.registry.get(disease)?;
        let label = classifier
            .predict(features)
            .map_err(|source| TriageError::PredictionFailed { disease, source })?;

        Ok(Diagnosis::new(disease, label == 1))
    }
}
