use med_triage::{DoctorDirectory, Result};
use std::fs;
use std::path::Path;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_csv(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("doctors.csv");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_rows_in_source_order() -> Result<()> {
    init_logging();
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        dir.path(),
        "Name,Specialization,Contact,Hospital\n\
         Dr. A,Cardiologist,111,North General\n\
         Dr. B,Endocrinologist,222,City Clinic\n\
         Dr. C,Cardiologist,333,South General\n\
         Dr. D,Neurologist,444,City Clinic\n",
    );

    let directory = DoctorDirectory::load(&path)?;
    assert_eq!(directory.len(), 4);
    assert!(directory.has_specialization_column());

    let cardiologists = directory.find_by_specialization("Cardiologist");
    assert_eq!(cardiologists.len(), 2);
    assert_eq!(cardiologists[0].name, "Dr. A");
    assert_eq!(cardiologists[1].name, "Dr. C");

    assert_eq!(directory.find_by_specialization("Endocrinologist").len(), 1);
    assert_eq!(directory.find_by_specialization("Neurologist").len(), 1);
    assert!(directory.find_by_specialization("Dermatologist").is_empty());
    Ok(())
}

#[test]
fn missing_file_yields_empty_directory() -> Result<()> {
    init_logging();
    let dir = tempfile::tempdir()?;
    let directory = DoctorDirectory::load(&dir.path().join("no_such.csv"))?;
    assert!(directory.is_empty());
    assert!(directory.find_by_specialization("Cardiologist").is_empty());
    Ok(())
}

#[test]
fn absent_optional_columns_become_placeholders() -> Result<()> {
    init_logging();
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        dir.path(),
        "Name,Specialization\nDr. A,Cardiologist\n",
    );

    let directory = DoctorDirectory::load(&path)?;
    assert_eq!(directory.len(), 1);
    let record = &directory.records()[0];
    assert_eq!(record.name, "Dr. A");
    assert_eq!(record.specialization, "Cardiologist");
    assert_eq!(record.contact, "N/A");
    assert_eq!(record.hospital, "N/A");
    Ok(())
}

#[test]
fn missing_specialization_column_is_tracked() -> Result<()> {
    init_logging();
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        dir.path(),
        "Name,Contact,Hospital\nDr. A,111,North General\n",
    );

    let directory = DoctorDirectory::load(&path)?;
    assert_eq!(directory.len(), 1);
    assert!(!directory.has_specialization_column());
    assert_eq!(directory.records()[0].specialization, "N/A");
    Ok(())
}

#[test]
fn numeric_columns_load_as_text() -> Result<()> {
    init_logging();
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        dir.path(),
        "Name,Specialization,Contact,Hospital\nDr. A,Cardiologist,5551234,North General\n",
    );

    let directory = DoctorDirectory::load(&path)?;
    assert_eq!(directory.records()[0].contact, "5551234");
    Ok(())
}

#[test]
fn extra_columns_are_ignored() -> Result<()> {
    init_logging();
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        dir.path(),
        "Name,Specialization,Contact,Hospital,Rating\nDr. A,Cardiologist,111,North General,4.5\n",
    );

    let directory = DoctorDirectory::load(&path)?;
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.records()[0].hospital, "North General");
    Ok(())
}
