//! Configuration for the triage core.

use std::path::PathBuf;

/// Startup configuration: where the model artifacts and the doctors
/// dataset live on disk
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Directory holding one serialized model artifact per disease
    pub model_dir: PathBuf,
    /// Path to the doctors CSV dataset
    pub doctors_path: PathBuf,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("saved_models"),
            doctors_path: PathBuf::from("dataset").join("doctors.csv"),
        }
    }
}
