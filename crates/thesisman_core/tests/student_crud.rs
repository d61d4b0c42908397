use thesisman_core::db::open_db_in_memory;
use thesisman_core::{
    EntityRef, RepoError, SqliteStudentRepository, SqliteThesisRepository, Student,
    StudentRepository, Thesis, ThesisRepository, ThesisType, ValidationError,
};

#[test]
fn create_assigns_id_and_get_returns_equal_copy() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let mut student = Student::new("Joshua", "Bloch");
    let id = repo.create_student(&mut student).unwrap();
    assert_eq!(student.id, Some(id));

    let mut loaded = repo.get_student(id).unwrap().unwrap();
    assert_eq!(loaded, student);

    loaded.name = "Josh".to_string();
    assert_eq!(student.name, "Joshua");
    assert_eq!(repo.get_student(id).unwrap().unwrap().name, "Joshua");
}

#[test]
fn create_accepts_names_with_spaces() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let mut student = Student::new("Anna Maria", "de la Cruz");
    let id = repo.create_student(&mut student).unwrap();
    assert_eq!(repo.get_student(id).unwrap().unwrap().surname, "de la Cruz");
}

#[test]
fn create_rejects_preassigned_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let mut student = Student::new("Joshua", "Bloch");
    student.id = Some(1);
    let err = repo.create_student(&mut student).unwrap_err();
    assert!(matches!(err, RepoError::InvalidArgument(_)));
    assert!(repo.list_students().unwrap().is_empty());
}

#[test]
fn create_rejects_invalid_names() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let cases = [
        (
            Student::new("", "Bloch"),
            ValidationError::EmptyField { field: "name" },
        ),
        (
            Student::new("Joshua", "  "),
            ValidationError::EmptyField { field: "surname" },
        ),
        (
            Student::new("J0shua", "Bloch"),
            ValidationError::InvalidCharacters { field: "name" },
        ),
        (
            Student::new("Joshua", "Bloch-Smith"),
            ValidationError::InvalidCharacters { field: "surname" },
        ),
    ];

    for (mut student, expected) in cases {
        let err = repo.create_student(&mut student).unwrap_err();
        match err {
            RepoError::Validation(actual) => assert_eq!(actual, expected),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(student.id, None);
    }
    assert!(repo.list_students().unwrap().is_empty());
}

#[test]
fn update_replaces_fields_of_existing_row_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let mut first = Student::new("Joshua", "Bloch");
    let mut second = Student::new("Brian", "Goetz");
    repo.create_student(&mut first).unwrap();
    repo.create_student(&mut second).unwrap();

    first.name = "Josh".to_string();
    first.surname = "Blochy".to_string();
    repo.update_student(&first).unwrap();

    assert_eq!(repo.get_student(first.id.unwrap()).unwrap(), Some(first));
    assert_eq!(
        repo.get_student(second.id.unwrap()).unwrap(),
        Some(second)
    );
}

#[test]
fn update_requires_id_and_valid_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let err = repo
        .update_student(&Student::new("Joshua", "Bloch"))
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidArgument(_)));

    let mut student = Student::new("Joshua", "Bloch");
    repo.create_student(&mut student).unwrap();
    student.name = "Joshua2".to_string();
    let err = repo.update_student(&student).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let stored = repo.get_student(student.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.name, "Joshua");
}

#[test]
fn update_missing_row_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let mut ghost = Student::new("Nobody", "Here");
    ghost.id = Some(999);
    let err = repo.update_student(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(EntityRef::Student(999))));
}

#[test]
fn delete_removes_only_target_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let mut first = Student::new("Joshua", "Bloch");
    let mut second = Student::new("Brian", "Goetz");
    repo.create_student(&mut first).unwrap();
    repo.create_student(&mut second).unwrap();

    repo.delete_student(&first).unwrap();

    assert_eq!(repo.get_student(first.id.unwrap()).unwrap(), None);
    assert_eq!(
        repo.get_student(second.id.unwrap()).unwrap(),
        Some(second)
    );
}

#[test]
fn delete_requires_id_and_existing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let err = repo
        .delete_student(&Student::new("Joshua", "Bloch"))
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidArgument(_)));

    let mut student = Student::new("Joshua", "Bloch");
    repo.create_student(&mut student).unwrap();
    repo.delete_student(&student).unwrap();

    let err = repo.delete_student(&student).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(EntityRef::Student(id)) if Some(id) == student.id));
}

#[test]
fn delete_is_blocked_while_theses_reference_student() {
    let conn = open_db_in_memory().unwrap();
    let students = SqliteStudentRepository::try_new(&conn).unwrap();
    let theses = SqliteThesisRepository::try_new(&conn).unwrap();

    let mut author = Student::new("Noel", "Mad");
    students.create_student(&mut author).unwrap();
    let mut thesis = Thesis::new("RocketScience", ThesisType::Master, 2012, author.clone());
    theses.create_thesis(&mut thesis).unwrap();

    let err = students.delete_student(&author).unwrap_err();
    assert!(matches!(err, RepoError::StudentHasTheses(id) if Some(id) == author.id));
    assert!(students.get_student(author.id.unwrap()).unwrap().is_some());

    theses.delete_thesis(&thesis).unwrap();
    students.delete_student(&author).unwrap();
    assert!(students.get_student(author.id.unwrap()).unwrap().is_none());
}

#[test]
fn get_unknown_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    assert_eq!(repo.get_student(42).unwrap(), None);
}

#[test]
fn list_returns_every_created_student() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    assert!(repo.list_students().unwrap().is_empty());

    let mut expected = Vec::new();
    for (name, surname) in [("Joshua", "Bloch"), ("Brian", "Goetz"), ("Doug", "Lea")] {
        let mut student = Student::new(name, surname);
        repo.create_student(&mut student).unwrap();
        expected.push(student);
    }

    let mut actual = repo.list_students().unwrap();
    actual.sort_by_key(|student| student.id);
    expected.sort_by_key(|student| student.id);
    assert_eq!(actual, expected);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let mut first = Student::new("Joshua", "Bloch");
    repo.create_student(&mut first).unwrap();
    repo.delete_student(&first).unwrap();

    let mut recreated = Student::new("Joshua", "Bloch");
    repo.create_student(&mut recreated).unwrap();
    assert_ne!(recreated.id, first.id);
}
