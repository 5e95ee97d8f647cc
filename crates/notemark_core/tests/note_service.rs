use notemark_core::db::open_db_in_memory;
use notemark_core::{NoteDraft, NoteService, NoteServiceError, SqliteNoteRepository};

#[test]
fn create_returns_the_persisted_row() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service
        .create_note(NoteDraft::new("meeting", "agenda items"))
        .unwrap();

    assert!(created.id > 0);
    assert!(created.created_at > 0);
    assert_eq!(created.title, "meeting");
    assert_eq!(created.content, "agenda items");
}

#[test]
fn create_then_get_roundtrip_matches() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note(NoteDraft::new("a", "b")).unwrap();
    let fetched = service.get_note(created.id).unwrap();

    assert_eq!(fetched, created);
}

#[test]
fn update_returns_the_fresh_row() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note(NoteDraft::new("a", "b")).unwrap();
    let updated = service
        .update_note(created.id, NoteDraft::new("a2", "b2"))
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "a2");
    assert_eq!(updated.content, "b2");
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_unknown_id_is_note_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service
        .update_note(404, NoteDraft::new("title", "content"))
        .unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(404)));
}

#[test]
fn get_unknown_id_is_note_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.get_note(404).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(404)));
}

#[test]
fn delete_twice_fails_on_the_second_call() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note(NoteDraft::new("tmp", "tmp")).unwrap();
    service.delete_note(created.id).unwrap();

    let err = service.delete_note(created.id).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(id) if id == created.id));
}

#[test]
fn validation_failures_perform_no_write() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.create_note(NoteDraft::new("", "body")).unwrap_err();
    assert!(matches!(err, NoteServiceError::Validation(_)));
    assert!(service.list_notes().unwrap().is_empty());
}
