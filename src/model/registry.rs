//! Model registry: load-once, process-lifetime classifier slots
//!
//! The registry attempts to deserialize each configured artifact exactly
//! once at startup. An artifact that is missing or fails to deserialize
//! degrades its slot to "unavailable" with the retained failure reason;
//! other slots keep serving. Load failures are permanent for the process
//! lifetime, there is no retry or reload.

use super::linear::load_artifact;
use super::Classifier;
use crate::disease::DiseaseKey;
use crate::error::{Result, TriageError};
use crate::utils::{log_load_complete, log_load_start, log_warning};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

/// One registry slot: a loaded classifier or the reason loading failed
enum ModelEntry {
    Loaded(Arc<dyn Classifier>),
    Unavailable { reason: String },
}

/// Immutable collection of named classifiers, one slot per disease.
///
/// Read-only after construction; safe to share across any number of
/// concurrent requests without locking.
pub struct ModelRegistry {
    entries: FxHashMap<DiseaseKey, ModelEntry>,
}

impl ModelRegistry {
    /// Load the three configured model artifacts from a directory.
    ///
    /// Never fails as a whole: a slot whose artifact is missing or corrupt
    /// becomes unavailable and is reported by `get` and `availability`.
    #[must_use]
    pub fn load(model_dir: &Path) -> Self {
        log_load_start("Loading model artifacts from", model_dir);

        let mut entries = FxHashMap::default();
        for disease in DiseaseKey::ALL {
            let entry = match load_artifact(model_dir, disease) {
                Ok(model) => ModelEntry::Loaded(Arc::new(model)),
                Err(e) => {
                    let reason = match e {
                        TriageError::ModelUnavailable { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    log_warning(
                        &format!("model for {disease} is unavailable: {reason}"),
                        Some(model_dir),
                    );
                    ModelEntry::Unavailable { reason }
                }
            };
            entries.insert(disease, entry);
        }

        let loaded = entries
            .values()
            .filter(|e| matches!(e, ModelEntry::Loaded(_)))
            .count();
        log_load_complete("loaded", model_dir, loaded);

        Self { entries }
    }

    /// Build a registry from already-constructed classifiers.
    ///
    /// Any `Classifier` implementation can occupy a slot; diseases without
    /// a supplied classifier become unavailable.
    #[must_use]
    pub fn from_classifiers<I>(classifiers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Classifier>>,
    {
        let mut entries: FxHashMap<DiseaseKey, ModelEntry> = FxHashMap::default();
        for classifier in classifiers {
            entries.insert(classifier.disease(), ModelEntry::Loaded(classifier));
        }
        for disease in DiseaseKey::ALL {
            entries.entry(disease).or_insert(ModelEntry::Unavailable {
                reason: "no classifier registered".to_string(),
            });
        }
        Self { entries }
    }

    /// Get the classifier for a disease, or `ModelUnavailable` if its slot
    /// is degraded
    pub fn get(&self, disease: DiseaseKey) -> Result<&Arc<dyn Classifier>> {
        match self.entries.get(&disease) {
            Some(ModelEntry::Loaded(classifier)) => Ok(classifier),
            Some(ModelEntry::Unavailable { reason }) => Err(TriageError::ModelUnavailable {
                disease,
                reason: reason.clone(),
            }),
            // Construction inserts a slot for every disease
            None => Err(TriageError::ModelUnavailable {
                disease,
                reason: "no classifier registered".to_string(),
            }),
        }
    }

    /// The retained load-failure reason for a disease, or `None` if its
    /// classifier is available
    #[must_use]
    pub fn availability(&self, disease: DiseaseKey) -> Option<&str> {
        match self.entries.get(&disease) {
            Some(ModelEntry::Loaded(_)) => None,
            Some(ModelEntry::Unavailable { reason }) => Some(reason.as_str()),
            None => Some("no classifier registered"),
        }
    }
}
