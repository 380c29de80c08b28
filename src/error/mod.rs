//! Error handling for the triage core.
//!
//! Per-request failures are returned to the caller as typed variants; load
//! failures at startup degrade the affected registry or directory entry
//! instead of surfacing here (see `ModelRegistry` and `DoctorDirectory`).

use crate::disease::DiseaseKey;
use arrow::error::ArrowError;
use std::io;

/// Specialized error type for triage operations
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    /// The classifier for a disease was never loaded; permanent for the
    /// process lifetime, a restart is required to pick up a repaired artifact
    #[error("model for {disease} is unavailable: {reason}")]
    ModelUnavailable {
        /// Disease whose registry entry is degraded
        disease: DiseaseKey,
        /// Load failure retained from startup
        reason: String,
    },

    /// Feature vector arity does not match the disease's expected count;
    /// always a caller bug, never truncated or padded
    #[error("invalid feature vector for {disease}: expected {expected} features, got {actual}")]
    InvalidFeatureVector {
        /// Disease the vector was intended for
        disease: DiseaseKey,
        /// Expected feature count
        expected: usize,
        /// Length the caller supplied
        actual: usize,
    },

    /// A feature element is NaN or infinite
    #[error("non-finite feature for {disease} at position {index}")]
    NonFiniteFeature {
        /// Disease the vector was intended for
        disease: DiseaseKey,
        /// Position of the offending element
        index: usize,
    },

    /// The classifier rejected the vector internally; surfaced verbatim and
    /// never retried, inference is deterministic
    #[error("prediction failed for {disease}: {source}")]
    PredictionFailed {
        /// Disease whose classifier failed
        disease: DiseaseKey,
        /// Cause reported by the classifier implementation
        #[source]
        source: anyhow::Error,
    },

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error deserializing a model artifact
    #[error("artifact error: {0}")]
    Artifact(#[from] serde_json::Error),
}

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;
