//! Disease keys, specializations, and diagnosis results
//!
//! This module defines the closed set of diseases the system screens for,
//! their fixed feature-vector shapes, and the disease-to-specialization
//! table used for physician recommendations. Adding a disease is a
//! compile-time-visible change: every match over `DiseaseKey` in the crate
//! is exhaustive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which classifier/specialization pair applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseKey {
    /// Diabetes screening (Pima-style indicators)
    Diabetes,
    /// Heart disease screening (Cleveland-style indicators)
    HeartDisease,
    /// Parkinson's disease screening (voice-measure indicators)
    Parkinsons,
}

impl DiseaseKey {
    /// All diseases the system screens for
    pub const ALL: [Self; 3] = [Self::Diabetes, Self::HeartDisease, Self::Parkinsons];

    /// Number of features the disease's classifier expects
    #[must_use]
    pub const fn feature_count(self) -> usize {
        match self {
            Self::Diabetes => 8,
            Self::HeartDisease => 13,
            Self::Parkinsons => 22,
        }
    }

    /// File name of the serialized model artifact for this disease
    #[must_use]
    pub const fn artifact_file_name(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes_model.json",
            Self::HeartDisease => "heart_disease_model.json",
            Self::Parkinsons => "parkinsons_model.json",
        }
    }

    /// Physician specialization treating this disease.
    ///
    /// The table is closed: every current key maps to a specialist. A future
    /// key added without a mapping must return `None` here, which resolves
    /// to a general-physician recommendation rather than an error.
    #[must_use]
    pub const fn specialization(self) -> Option<Specialization> {
        match self {
            Self::Diabetes => Some(Specialization::Endocrinologist),
            Self::HeartDisease => Some(Specialization::Cardiologist),
            Self::Parkinsons => Some(Specialization::Neurologist),
        }
    }
}

impl fmt::Display for DiseaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Diabetes => "Diabetes",
            Self::HeartDisease => "Heart Disease",
            Self::Parkinsons => "Parkinson's Disease",
        };
        write!(f, "{name}")
    }
}

/// Physician category mapped from a `DiseaseKey`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialization {
    /// Treats diabetes and other hormonal disorders
    Endocrinologist,
    /// Treats heart disease
    Cardiologist,
    /// Treats Parkinson's and other nervous-system disorders
    Neurologist,
}

impl Specialization {
    /// Specialization name as it appears in the doctors dataset
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endocrinologist => "Endocrinologist",
            Self::Cardiologist => "Cardiologist",
            Self::Neurologist => "Neurologist",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of dispatching one feature vector to a classifier.
///
/// Ephemeral: produced and consumed within a single request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnosis {
    /// Disease that was screened for
    pub disease: DiseaseKey,
    /// Whether the classifier labeled the vector positive
    pub positive: bool,
}

impl Diagnosis {
    /// Create a new diagnosis
    #[must_use]
    pub const fn new(disease: DiseaseKey, positive: bool) -> Self {
        Self { disease, positive }
    }

    /// Whether the diagnosis is positive
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.positive
    }

    /// Human-readable result sentence for the presentation layer
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match (self.disease, self.positive) {
            (DiseaseKey::Diabetes, true) => "The person is diabetic",
            (DiseaseKey::Diabetes, false) => "The person is not diabetic",
            (DiseaseKey::HeartDisease, true) => "The person has heart disease",
            (DiseaseKey::HeartDisease, false) => "The person does not have heart disease",
            (DiseaseKey::Parkinsons, true) => "The person has Parkinson's disease",
            (DiseaseKey::Parkinsons, false) => "The person does not have Parkinson's disease",
        }
    }
}
