//! Serialized linear-model artifacts
//!
//! The model-training tooling exports each fitted classifier as a JSON
//! document holding a linear decision function: feature weights, an
//! intercept, and an optional standardization step. This is the bundled
//! artifact format; other formats plug in through the `Classifier` trait.

use super::Classifier;
use crate::disease::DiseaseKey;
use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Standardization parameters fitted alongside the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    /// Per-feature means subtracted before scoring
    pub mean: Vec<f64>,
    /// Per-feature standard deviations divided out before scoring
    pub std: Vec<f64>,
}

/// A pre-fitted linear binary classifier loaded from a JSON artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Disease the model was trained for
    pub disease: DiseaseKey,
    /// Feature weights, one per expected feature
    pub weights: Vec<f64>,
    /// Decision-function intercept
    pub intercept: f64,
    /// Optional standardization applied before the decision function
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

impl LinearModel {
    /// Deserialize an artifact from disk and validate its shape.
    ///
    /// Validation failures are load failures: the registry records them and
    /// degrades the entry to unavailable instead of serving a misshapen
    /// model.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open model artifact {}", path.display()))?;
        let model: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to deserialize model artifact {}", path.display()))?;
        model.validate()?;
        Ok(model)
    }

    /// Check that the artifact matches the disease's fixed feature shape
    pub fn validate(&self) -> anyhow::Result<()> {
        let expected = self.disease.feature_count();
        if self.weights.len() != expected {
            anyhow::bail!(
                "artifact for {} has {} weights, expected {}",
                self.disease,
                self.weights.len(),
                expected
            );
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != expected || scaler.std.len() != expected {
                anyhow::bail!(
                    "artifact for {} has a scaler of {} means and {} stds, expected {}",
                    self.disease,
                    scaler.mean.len(),
                    scaler.std.len(),
                    expected
                );
            }
            if scaler.std.iter().any(|s| *s == 0.0) {
                anyhow::bail!("artifact for {} has a zero standard deviation", self.disease);
            }
        }
        Ok(())
    }

    /// Decision function value for one feature vector
    fn decision(&self, features: &[f64]) -> f64 {
        let score = match &self.scaler {
            Some(scaler) => features
                .iter()
                .zip(&self.weights)
                .zip(scaler.mean.iter().zip(&scaler.std))
                .map(|((x, w), (m, s))| w * ((x - m) / s))
                .sum::<f64>(),
            None => features.iter().zip(&self.weights).map(|(x, w)| w * x).sum(),
        };
        score + self.intercept
    }
}

impl Classifier for LinearModel {
    fn disease(&self) -> DiseaseKey {
        self.disease
    }

    fn feature_count(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, features: &[f64]) -> anyhow::Result<i64> {
        if features.len() != self.weights.len() {
            anyhow::bail!(
                "model for {} scored a vector of {} features, expected {}",
                self.disease,
                features.len(),
                self.weights.len()
            );
        }
        Ok(i64::from(self.decision(features) > 0.0))
    }
}

/// Load the artifact for one disease from a model directory
pub(crate) fn load_artifact(model_dir: &Path, disease: DiseaseKey) -> Result<LinearModel> {
    let path = model_dir.join(disease.artifact_file_name());
    let model = LinearModel::from_path(&path).map_err(|e| crate::error::TriageError::ModelUnavailable {
        disease,
        reason: format!("{e:#}"),
    })?;
    if model.disease != disease {
        return Err(crate::error::TriageError::ModelUnavailable {
            disease,
            reason: format!(
                "artifact {} declares disease {}, expected {}",
                path.display(),
                model.disease,
                disease
            ),
        });
    }
    Ok(model)
}
