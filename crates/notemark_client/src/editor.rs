//! Edit-in-place session for a single note.
//!
//! An open editor means the note is in its editing state; dropping the
//! session returns it to viewing. Drafts are seeded from the note's last
//! known server values, so a cancelled session leaves nothing behind and
//! the next one starts from the server truth again.

use notemark_core::{Note, NoteId};

/// Draft fields for one note being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditor {
    note_id: NoteId,
    title_edit: String,
    content_edit: String,
}

impl NoteEditor {
    /// Opens an edit session seeded from the note's current server values.
    pub fn open(note: &Note) -> Self {
        Self {
            note_id: note.id,
            title_edit: note.title.clone(),
            content_edit: note.content.clone(),
        }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    pub fn title_edit(&self) -> &str {
        &self.title_edit
    }

    pub fn content_edit(&self) -> &str {
        &self.content_edit
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title_edit = value.into();
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.content_edit = value.into();
    }
}
