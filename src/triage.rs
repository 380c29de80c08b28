//! Triage facade owning the process-wide snapshots
//!
//! The original deployment cached loaded models and the doctors dataset as
//! ambient process state. Here that state is explicit: `Triage::load`
//! performs both startup loads exactly once, synchronously, and the
//! resulting object is passed by reference to whoever serves requests.
//! Everything inside is read-only after construction, so one `Triage` can
//! back any number of concurrent, independent requests without locking.

use crate::config::TriageConfig;
use crate::directory::DoctorDirectory;
use crate::disease::{Diagnosis, DiseaseKey};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::model::ModelRegistry;
use crate::recommend::{Recommendation, Resolver};

/// Loaded triage core: one model registry and one doctor directory
pub struct Triage {
    registry: ModelRegistry,
    directory: DoctorDirectory,
}

impl Triage {
    /// Load models and the doctors dataset per the configuration.
    ///
    /// Individual model artifacts that fail to load degrade their slot
    /// without failing the whole load; a missing doctors dataset degrades
    /// to an empty directory. A present but unparsable dataset is an error.
    pub fn load(config: &TriageConfig) -> Result<Self> {
        let registry = ModelRegistry::load(&config.model_dir);
        let directory = DoctorDirectory::load(&config.doctors_path)?;
        Ok(Self::new(registry, directory))
    }

    /// Assemble a triage core from already-loaded parts
    #[must_use]
    pub const fn new(registry: ModelRegistry, directory: DoctorDirectory) -> Self {
        Self { registry, directory }
    }

    /// Predict the presence of a disease from one feature vector
    pub fn predict(&self, disease: DiseaseKey, features: &[f64]) -> Result<Diagnosis> {
        Dispatcher::new(&self.registry).predict(disease, features)
    }

    /// Recommend a doctor for a disease
    #[must_use]
    pub fn recommend(&self, disease: DiseaseKey) -> Recommendation {
        Resolver::new(&self.directory).recommend(disease)
    }

    /// Recommend a doctor for a positive diagnosis; `None` when the
    /// diagnosis is negative and no referral applies
    #[must_use]
    pub fn recommend_for(&self, diagnosis: &Diagnosis) -> Option<Recommendation> {
        diagnosis
            .is_positive()
            .then(|| self.recommend(diagnosis.disease))
    }

    /// The loaded model registry
    #[must_use]
    pub const fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// The loaded doctor directory
    #[must_use]
    pub const fn directory(&self) -> &DoctorDirectory {
        &self.directory
    }
}
