//! Doctor directory: in-memory, read-only physician records
//!
//! The directory is loaded once at startup from a tabular CSV source into
//! an ordered collection of `DoctorRecord`, with a specialization index for
//! lookups. A missing source file yields an empty directory plus a logged
//! warning, not an error; downstream lookups handle "no doctors known"
//! through `Recommendation` reasons instead of crashing.

use crate::error::Result;
use crate::utils::{log_load_complete, log_load_start, log_warning};
use arrow::array::{Array, StringArray};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

/// Placeholder substituted for absent fields
pub const MISSING_FIELD: &str = "N/A";

/// Recognized dataset columns
const NAME_COLUMN: &str = "Name";
const SPECIALIZATION_COLUMN: &str = "Specialization";
const CONTACT_COLUMN: &str = "Contact";
const HOSPITAL_COLUMN: &str = "Hospital";

/// One physician record from the doctors dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRecord {
    /// Physician name
    pub name: String,
    /// Specialization as it appears in the dataset
    pub specialization: String,
    /// Contact information
    pub contact: String,
    /// Hospital the physician practices at
    pub hospital: String,
}

impl fmt::Display for DoctorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor: {}, Contact: {}, Hospital: {}",
            self.name, self.contact, self.hospital
        )
    }
}

/// Immutable collection of doctor records indexed by specialization.
///
/// Records keep their source order; `find_by_specialization` returns
/// matches in that order, so the first match is the stable tie-break
/// choice when several doctors share a specialization.
pub struct DoctorDirectory {
    records: Vec<DoctorRecord>,
    index: FxHashMap<String, Vec<usize>>,
    has_specialization_column: bool,
}

impl DoctorDirectory {
    /// Load the doctors dataset from a CSV file.
    ///
    /// A missing file yields an empty directory with a logged warning. A
    /// present but unparsable file is an error. Absent recognized columns
    /// degrade per field to the `"N/A"` placeholder; whether the
    /// `Specialization` column existed at all is retained for lookups.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log_warning("Doctors dataset file not found", Some(path));
            return Ok(Self::from_records(Vec::new()));
        }

        log_load_start("Loading doctors dataset from", path);
        let batches = read_csv_as_strings(path)?;

        let mut records = Vec::new();
        let mut has_specialization_column = false;
        for batch in &batches {
            has_specialization_column |=
                batch.schema().column_with_name(SPECIALIZATION_COLUMN).is_some();
            append_records(batch, &mut records);
        }

        log_load_complete("loaded", path, records.len());

        let mut directory = Self::from_records(records);
        directory.has_specialization_column = has_specialization_column;
        Ok(directory)
    }

    /// Build a directory from already-constructed records, preserving order
    #[must_use]
    pub fn from_records(records: Vec<DoctorRecord>) -> Self {
        let mut index: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (position, record) in records.iter().enumerate() {
            index
                .entry(record.specialization.clone())
                .or_default()
                .push(position);
        }
        Self {
            records,
            index,
            has_specialization_column: true,
        }
    }

    /// All matching records for a specialization, in source order
    #[must_use]
    pub fn find_by_specialization(&self, specialization: &str) -> Vec<&DoctorRecord> {
        self.index
            .get(specialization)
            .map(|positions| positions.iter().map(|&p| &self.records[p]).collect())
            .unwrap_or_default()
    }

    /// All records in source order
    #[must_use]
    pub fn records(&self) -> &[DoctorRecord] {
        &self.records
    }

    /// Number of records in the directory
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source dataset carried a `Specialization` column
    #[must_use]
    pub fn has_specialization_column(&self) -> bool {
        self.has_specialization_column
    }
}

/// Read a CSV file with every column as a string.
///
/// Column names come from schema inference over the header; the field types
/// are then forced to Utf8 so numeric contact or name columns degrade to
/// their textual form instead of failing extraction.
fn read_csv_as_strings(path: &Path) -> Result<Vec<RecordBatch>> {
    let mut file = File::open(path)?;
    let format = Format::default().with_header(true);
    let (inferred, _) = format.infer_schema(&mut file, Some(100))?;
    file.rewind()?;

    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let reader = ReaderBuilder::new(schema).with_format(format).build(file)?;
    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    Ok(batches)
}

/// Convert one record batch into doctor records, substituting the
/// placeholder for absent columns and null cells
fn append_records(batch: &RecordBatch, records: &mut Vec<DoctorRecord>) {
    let column = |name: &str| -> Option<&StringArray> {
        batch
            .column_by_name(name)
            .and_then(|c| c.as_any().downcast_ref::<StringArray>())
    };

    let names = column(NAME_COLUMN);
    let specializations = column(SPECIALIZATION_COLUMN);
    let contacts = column(CONTACT_COLUMN);
    let hospitals = column(HOSPITAL_COLUMN);

    let cell = |array: Option<&StringArray>, row: usize| -> String {
        match array {
            Some(values) if !values.is_null(row) => values.value(row).to_string(),
            _ => MISSING_FIELD.to_string(),
        }
    };

    for row in 0..batch.num_rows() {
        records.push(DoctorRecord {
            name: cell(names, row),
            specialization: cell(specializations, row),
            contact: cell(contacts, row),
            hospital: cell(hospitals, row),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, specialization: &str) -> DoctorRecord {
        DoctorRecord {
            name: name.to_string(),
            specialization: specialization.to_string(),
            contact: "555".to_string(),
            hospital: "General".to_string(),
        }
    }

    #[test]
    fn lookup_preserves_source_order() {
        let directory = DoctorDirectory::from_records(vec![
            record("Dr. A", "Cardiologist"),
            record("Dr. B", "Neurologist"),
            record("Dr. C", "Cardiologist"),
        ]);

        let cardiologists = directory.find_by_specialization("Cardiologist");
        assert_eq!(cardiologists.len(), 2);
        assert_eq!(cardiologists[0].name, "Dr. A");
        assert_eq!(cardiologists[1].name, "Dr. C");
    }

    #[test]
    fn unknown_specialization_yields_no_records() {
        let directory = DoctorDirectory::from_records(vec![record("Dr. A", "Cardiologist")]);
        assert!(directory.find_by_specialization("Endocrinologist").is_empty());
    }

    #[test]
    fn display_matches_recommendation_format() {
        let doctor = record("Dr. A", "Endocrinologist");
        assert_eq!(
            doctor.to_string(),
            "Doctor: Dr. A, Contact: 555, Hospital: General"
        );
    }
}
