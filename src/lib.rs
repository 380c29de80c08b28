//! A Rust library for routing user-entered physiological measurements to
//! pre-trained disease classifiers and mapping positive diagnoses to
//! physician recommendations.
//!
//! The core is four components: a model registry of named classifiers, a
//! doctor directory indexed by specialization, a prediction dispatcher, and
//! a recommendation resolver. Presentation concerns (input widgets, pages,
//! rendering) live outside this crate and call in with already-validated
//! numeric inputs.

pub mod config;
pub mod directory;
pub mod disease;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod recommend;
pub mod triage;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::TriageConfig;
pub use disease::{Diagnosis, DiseaseKey, Specialization};
pub use error::{Result, TriageError};
pub use triage::Triage;

// Component surfaces
pub use directory::{DoctorDirectory, DoctorRecord};
pub use dispatch::Dispatcher;
pub use model::{Classifier, LinearModel, ModelRegistry};
pub use recommend::{Recommendation, Resolver};
