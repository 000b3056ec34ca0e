use staffdir_core::{Employee, EmployeeRepository, InMemoryEmployeeRepository, RepoError};

fn ann() -> Employee {
    Employee::new("Ann", "Lee", "a@x.com", "Eng", "Dev")
}

fn dan() -> Employee {
    Employee::new("Dan", "Roe", "d@x.com", "Ops", "Lead")
}

#[test]
fn add_appends_in_insertion_order() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.add(dan()).unwrap();
    repo.add(ann()).unwrap();
    assert_eq!(repo.all(), &[dan(), ann()]);
}

#[test]
fn duplicate_add_fails_and_keeps_size() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.add(ann()).unwrap();

    let mut clash = dan();
    clash.email = "a@x.com".to_string();
    let err = repo.add(clash).unwrap_err();

    assert_eq!(err, RepoError::DuplicateEmail("a@x.com".to_string()));
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.all()[0], ann());
}

#[test]
fn remove_missing_email_is_noop() {
    let mut repo = InMemoryEmployeeRepository::from_records(vec![ann(), dan()]).unwrap();
    let before = repo.clone();

    assert!(!repo.remove("nobody@x.com"));
    assert_eq!(repo, before);

    assert!(repo.remove("a@x.com"));
    assert_eq!(repo.all(), &[dan()]);
}

#[test]
fn update_roundtrip_keeps_count_and_contains_record_once() {
    let mut repo = InMemoryEmployeeRepository::from_records(vec![ann(), dan()]).unwrap();
    let replacement = Employee::new("Annie", "Lee", "annie@x.com", "Eng", "Manager");

    repo.update("a@x.com", replacement.clone()).unwrap();

    assert_eq!(repo.len(), 2);
    assert_eq!(
        repo.all().iter().filter(|e| **e == replacement).count(),
        1
    );
    assert!(repo.get("a@x.com").is_none());
}

#[test]
fn update_missing_email_is_not_found() {
    let mut repo = InMemoryEmployeeRepository::from_records(vec![ann()]).unwrap();
    let err = repo.update("x@x.com", dan()).unwrap_err();
    assert_eq!(err, RepoError::NotFound("x@x.com".to_string()));
    assert_eq!(repo.all(), &[ann()]);
}

#[test]
fn update_onto_another_records_email_is_rejected() {
    let mut repo = InMemoryEmployeeRepository::from_records(vec![ann(), dan()]).unwrap();
    let mut renamed = ann();
    renamed.email = "d@x.com".to_string();

    let err = repo.update("a@x.com", renamed).unwrap_err();

    assert_eq!(err, RepoError::DuplicateEmail("d@x.com".to_string()));
    assert_eq!(repo.all(), &[ann(), dan()]);
}

#[test]
fn update_keeping_same_email_is_allowed() {
    let mut repo = InMemoryEmployeeRepository::from_records(vec![ann()]).unwrap();
    let mut changed = ann();
    changed.role = "Lead".to_string();
    repo.update("a@x.com", changed.clone()).unwrap();
    assert_eq!(repo.get("a@x.com"), Some(&changed));
}
