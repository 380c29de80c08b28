//! Recommendation resolver
//!
//! Maps a positive diagnosis to a physician specialization through the
//! closed disease table and looks up a matching doctor. A pure, synchronous
//! function of its inputs and the immutable directory snapshot; the three
//! distinct "no doctor" outcomes stay distinguishable so callers can render
//! different messages for each.

use crate::directory::{DoctorDirectory, DoctorRecord};
use crate::disease::{DiseaseKey, Specialization};
use std::fmt;

/// Outcome of resolving a disease to a doctor recommendation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// A matching doctor was found (the first in source order)
    Doctor(DoctorRecord),
    /// The specialization is valid but no record matches it; a normal
    /// outcome, not an error
    NoMatch {
        /// Specialization that had no matching records
        specialization: Specialization,
    },
    /// The directory holds no records at all
    DirectoryEmpty,
    /// The dataset carried no `Specialization` column, so no lookup is
    /// possible
    MissingSpecializationColumn,
    /// The disease has no specialist mapping; soft fallback, not an error
    GeneralPhysician,
}

impl Recommendation {
    /// Whether a doctor record was found
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Doctor(_))
    }

    /// The recommended doctor, if one was found
    #[must_use]
    pub const fn doctor(&self) -> Option<&DoctorRecord> {
        match self {
            Self::Doctor(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctor(record) => write!(f, "{record}"),
            Self::NoMatch { specialization } => {
                write!(f, "No doctors found for specialization: {specialization}")
            }
            Self::DirectoryEmpty => f.write_str("Doctors dataset is empty."),
            Self::MissingSpecializationColumn => {
                f.write_str("Doctors dataset is missing 'Specialization' column.")
            }
            Self::GeneralPhysician => {
                f.write_str("Consult a general physician for further advice.")
            }
        }
    }
}

/// Resolves diseases to doctor recommendations against one directory
/// snapshot
pub struct Resolver<'d> {
    directory: &'d DoctorDirectory,
}

impl<'d> Resolver<'d> {
    /// Create a resolver over a loaded directory
    #[must_use]
    pub const fn new(directory: &'d DoctorDirectory) -> Self {
        Self { directory }
    }

    /// Recommend a doctor for a disease.
    ///
    /// A disease outside the specialization table resolves to the
    /// general-physician fallback. Otherwise the first doctor in source
    /// order with the mapped specialization wins; ranking by quality,
    /// distance, or availability is out of scope.
    #[must_use]
    pub fn recommend(&self, disease: DiseaseKey) -> Recommendation {
        match disease.specialization() {
            Some(specialization) => self.recommend_specialist(specialization),
            None => Recommendation::GeneralPhysician,
        }
    }

    /// Recommend a doctor with a given specialization
    #[must_use]
    pub fn recommend_specialist(&self, specialization: Specialization) -> Recommendation {
        if self.directory.is_empty() {
            return Recommendation::DirectoryEmpty;
        }
        if !self.directory.has_specialization_column() {
            return Recommendation::MissingSpecializationColumn;
        }
        match self
            .directory
            .find_by_specialization(specialization.as_str())
            .first()
        {
            Some(record) => Recommendation::Doctor((*record).clone()),
            None => Recommendation::NoMatch { specialization },
        }
    }
}
