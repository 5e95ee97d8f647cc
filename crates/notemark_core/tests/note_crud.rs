use notemark_core::db::open_db_in_memory;
use notemark_core::{NoteDraft, NoteRepository, RepoError, SqliteNoteRepository};

#[test]
fn insert_and_get_roundtrip_echoes_submitted_text() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo
        .insert_note(&NoteDraft::new("groceries", "milk, eggs"))
        .unwrap();

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.title, "groceries");
    assert_eq!(loaded.content, "milk, eggs");
    assert!(loaded.created_at > 0);
}

#[test]
fn surrounding_whitespace_is_stored_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo
        .insert_note(&NoteDraft::new("  padded  ", " body "))
        .unwrap();

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.title, "  padded  ");
    assert_eq!(loaded.content, " body ");
}

#[test]
fn list_returns_notes_in_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let first = repo.insert_note(&NoteDraft::new("first", "a")).unwrap();
    let second = repo.insert_note(&NoteDraft::new("second", "b")).unwrap();
    let third = repo.insert_note(&NoteDraft::new("third", "c")).unwrap();

    let listed = repo.list_notes().unwrap();
    let ids: Vec<_> = listed.iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn update_replaces_title_and_content() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo.insert_note(&NoteDraft::new("draft", "old")).unwrap();
    repo.update_note(id, &NoteDraft::new("final", "new"))
        .unwrap();

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.title, "final");
    assert_eq!(loaded.content, "new");
}

#[test]
fn update_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let err = repo
        .update_note(999, &NoteDraft::new("title", "content"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
}

#[test]
fn delete_removes_row_and_second_delete_fails() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo.insert_note(&NoteDraft::new("gone", "soon")).unwrap();
    repo.delete_note(id).unwrap();

    assert!(repo.get_note(id).unwrap().is_none());
    let err = repo.delete_note(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(deleted) if deleted == id));
}

#[test]
fn blank_draft_is_rejected_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let err = repo.insert_note(&NoteDraft::new("  ", "body")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list_notes().unwrap().is_empty());

    let id = repo.insert_note(&NoteDraft::new("keep", "me")).unwrap();
    let err = repo
        .update_note(id, &NoteDraft::new("keep", "   "))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.content, "me");
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let first = repo.insert_note(&NoteDraft::new("one", "a")).unwrap();
    repo.delete_note(first).unwrap();
    let second = repo.insert_note(&NoteDraft::new("two", "b")).unwrap();

    assert!(second > first);
}
