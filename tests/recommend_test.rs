use med_triage::{
    DiseaseKey, DoctorDirectory, DoctorRecord, Recommendation, Resolver, Specialization,
};

fn record(name: &str, specialization: &str, contact: &str, hospital: &str) -> DoctorRecord {
    DoctorRecord {
        name: name.to_string(),
        specialization: specialization.to_string(),
        contact: contact.to_string(),
        hospital: hospital.to_string(),
    }
}

#[test]
fn diabetes_resolves_to_an_endocrinologist() {
    let directory = DoctorDirectory::from_records(vec![record(
        "Dr. A",
        "Endocrinologist",
        "555",
        "General",
    )]);
    let resolver = Resolver::new(&directory);

    match resolver.recommend(DiseaseKey::Diabetes) {
        Recommendation::Doctor(doctor) => {
            assert_eq!(doctor.name, "Dr. A");
            assert_eq!(doctor.specialization, "Endocrinologist");
            assert_eq!(doctor.contact, "555");
            assert_eq!(doctor.hospital, "General");
        }
        other => panic!("expected a doctor, got {other:?}"),
    }
}

#[test]
fn empty_directory_is_distinguishable_for_every_disease() {
    let directory = DoctorDirectory::from_records(Vec::new());
    let resolver = Resolver::new(&directory);

    for disease in DiseaseKey::ALL {
        let recommendation = resolver.recommend(disease);
        assert_eq!(recommendation, Recommendation::DirectoryEmpty);
        assert!(!recommendation.is_found());
    }
}

#[test]
fn absent_specialization_is_a_normal_no_match() {
    let directory =
        DoctorDirectory::from_records(vec![record("Dr. A", "Cardiologist", "111", "North")]);
    let resolver = Resolver::new(&directory);

    match resolver.recommend(DiseaseKey::Parkinsons) {
        Recommendation::NoMatch { specialization } => {
            assert_eq!(specialization, Specialization::Neurologist);
        }
        other => panic!("expected NoMatch, got {other:?}"),
    }

    // The cardiologist is still found
    assert!(resolver.recommend(DiseaseKey::HeartDisease).is_found());
}

#[test]
fn first_record_in_source_order_wins_ties() {
    let directory = DoctorDirectory::from_records(vec![
        record("Dr. First", "Cardiologist", "111", "North"),
        record("Dr. Second", "Cardiologist", "222", "South"),
    ]);
    let resolver = Resolver::new(&directory);

    let recommendation = resolver.recommend(DiseaseKey::HeartDisease);
    assert_eq!(recommendation.doctor().unwrap().name, "Dr. First");
}

#[test]
fn recommendation_renders_user_facing_messages() {
    let doctor = Recommendation::Doctor(record("Dr. A", "Endocrinologist", "555", "General"));
    assert_eq!(
        doctor.to_string(),
        "Doctor: Dr. A, Contact: 555, Hospital: General"
    );

    let no_match = Recommendation::NoMatch {
        specialization: Specialization::Neurologist,
    };
    assert_eq!(
        no_match.to_string(),
        "No doctors found for specialization: Neurologist"
    );

    assert_eq!(
        Recommendation::GeneralPhysician.to_string(),
        "Consult a general physician for further advice."
    );
    assert_eq!(
        Recommendation::MissingSpecializationColumn.to_string(),
        "Doctors dataset is missing 'Specialization' column."
    );
    assert_eq!(Recommendation::DirectoryEmpty.to_string(), "Doctors dataset is empty.");
}

#[test]
fn recommend_specialist_queries_the_table_directly() {
    let directory = DoctorDirectory::from_records(vec![
        record("Dr. A", "Cardiologist", "111", "North"),
        record("Dr. B", "Neurologist", "222", "South"),
    ]);
    let resolver = Resolver::new(&directory);

    assert!(resolver
        .recommend_specialist(Specialization::Neurologist)
        .is_found());
    assert!(matches!(
        resolver.recommend_specialist(Specialization::Endocrinologist),
        Recommendation::NoMatch { .. }
    ));
}
