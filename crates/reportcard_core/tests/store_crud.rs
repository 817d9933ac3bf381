use reportcard_core::{
    GradeService, GradeServiceError, MemoryStudentStore, StoreError, StudentRepository,
    StudentValidationError, Subjects,
};
use std::error::Error;

fn error_chain(err: &dyn Error) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        messages.push(inner.to_string());
        source = inner.source();
    }
    messages
}

fn subjects(pairs: &[(&str, f64)]) -> Subjects {
    pairs
        .iter()
        .map(|(subject, score)| (subject.to_string(), *score))
        .collect()
}

fn seeded_service() -> GradeService<MemoryStudentStore> {
    let mut service = GradeService::new(MemoryStudentStore::new());
    service
        .add_student("Ada", "s-1", &subjects(&[("Math", 80.0), ("Sci", 100.0)]))
        .unwrap();
    service
        .add_student("Grace", "s-2", &subjects(&[("Art", 55.0)]))
        .unwrap();
    service
}

#[test]
fn add_and_find_roundtrip() {
    let service = seeded_service();

    let found = service.find_student("s-1").unwrap();
    assert_eq!(found.name(), "Ada");
    assert_eq!(found.average(), 90.0);
    assert!(service.find_student("missing").is_none());
}

#[test]
fn add_returns_stored_id() {
    let mut service = GradeService::new(MemoryStudentStore::new());
    let id = service.add_student("Ada", "s-42", &Subjects::new()).unwrap();
    assert_eq!(id, "s-42");
}

#[test]
fn add_duplicate_id_fails_without_mutation() {
    let mut service = seeded_service();
    let before = service.repo().clone();

    let err = service
        .add_student("Impostor", "s-1", &subjects(&[("Math", 10.0)]))
        .unwrap_err();

    assert_eq!(err, StoreError::DuplicateId("s-1".to_string()));
    assert_eq!(service.repo(), &before);
}

#[test]
fn add_with_out_of_range_score_fails_without_mutation() {
    let mut service = seeded_service();
    let before = service.repo().clone();

    let err = service
        .add_student("Eve", "s-3", &subjects(&[("Math", -5.0)]))
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(StudentValidationError::ScoreOutOfRange { .. })
    ));
    assert_eq!(service.repo(), &before);
}

#[test]
fn update_score_inserts_and_overwrites() {
    let mut service = seeded_service();

    assert!(service.update_score("s-2", "Art", 95.0).unwrap());
    assert!(service.update_score("s-2", "Music", 85.0).unwrap());

    let student = service.find_student("s-2").unwrap();
    assert_eq!(student.score("Art"), Some(95.0));
    assert_eq!(student.score("Music"), Some(85.0));
    assert_eq!(student.average(), 90.0);
}

#[test]
fn update_unknown_id_returns_false_and_leaves_store_unchanged() {
    let mut service = seeded_service();
    let before = service.repo().clone();

    assert!(!service.update_score("ghost", "Math", 50.0).unwrap());
    assert_eq!(service.repo(), &before);
}

#[test]
fn update_out_of_range_score_is_an_error() {
    let mut service = seeded_service();
    let before = service.repo().clone();

    let err = service.update_score("s-1", "Math", 100.5).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(service.repo(), &before);
}

#[test]
fn delete_removes_only_the_match() {
    let mut service = seeded_service();

    assert!(service.delete_student("s-1"));
    assert!(service.find_student("s-1").is_none());
    assert_eq!(service.list_students().len(), 1);
    assert_eq!(service.list_students()[0].id(), "s-2");
}

#[test]
fn delete_unknown_id_returns_false_and_leaves_store_unchanged() {
    let mut service = seeded_service();
    let before = service.repo().clone();

    assert!(!service.delete_student("ghost"));
    assert_eq!(service.repo(), &before);
}

#[test]
fn list_preserves_insertion_order() {
    let mut store = MemoryStudentStore::new();
    for id in ["z", "a", "m"] {
        store.add_student("name", id, &Subjects::new()).unwrap();
    }

    let ids: Vec<&str> = store.list_students().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn report_formats_scores_average_and_grade() {
    let service = seeded_service();

    let report = service.report("s-2").unwrap();
    assert_eq!(
        report.to_string(),
        "Report for Grace (ID: s-2)\nArt: 55.0\nAverage: 55.00\nGrade: Fail\n"
    );
    assert!(service.report("ghost").is_none());
}

#[test]
fn rejected_score_error_chain_has_no_repeated_messages() {
    let mut service = seeded_service();
    let err = service.update_score("s-1", "Math", 101.0).unwrap_err();

    let chain = error_chain(&err);
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0], "invalid student data");
    assert!(chain[1].contains("score 101 for subject `Math`"), "{chain:?}");

    let wrapped = GradeServiceError::from(err);
    let wrapped_chain = error_chain(&wrapped);
    assert_eq!(wrapped_chain, chain);
}
