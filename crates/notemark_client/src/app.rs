//! Client application glue: transport, reducer and edit session.
//!
//! # Invariants
//! - Every mutating action applies only the server-confirmed result;
//!   nothing is updated optimistically.
//! - A failed request sets `last_error` and leaves the note list as-is.
//! - Saving an edit leaves editing mode only when the update succeeded.

use log::warn;
use notemark_core::{Note, NoteId};

use crate::api::{ApiError, NotesApi};
use crate::editor::NoteEditor;
use crate::state::{apply, filter_notes, ClientState, NoteEvent};

pub struct NotesApp<A> {
    api: A,
    state: ClientState,
    editor: Option<NoteEditor>,
}

impl<A: NotesApi> NotesApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ClientState::default(),
            editor: None,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn editor(&self) -> Option<&NoteEditor> {
        self.editor.as_ref()
    }

    /// Notes visible under the current search filter.
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_notes(&self.state.notes, &self.state.search_query)
    }

    /// Replaces local state with the server's full list.
    pub async fn load(&mut self) {
        match self.api.list_notes().await {
            Ok(notes) => self.dispatch(NoteEvent::Loaded(notes)),
            Err(err) => self.fail("load", err),
        }
    }

    /// Creates a note and appends the server-returned row.
    pub async fn add_note(&mut self, title: &str, content: &str) {
        match self.api.create_note(title, content).await {
            Ok(note) => self.dispatch(NoteEvent::Added(note)),
            Err(err) => self.fail("add", err),
        }
    }

    /// Removes the note locally only once the server confirmed the delete.
    pub async fn delete_note(&mut self, id: NoteId) {
        match self.api.delete_note(id).await {
            Ok(()) => self.dispatch(NoteEvent::Removed(id)),
            Err(err) => self.fail("delete", err),
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.dispatch(NoteEvent::SearchChanged(query.into()));
    }

    /// Opens an edit session for the given note id. Returns `false` when
    /// the id is not in local state.
    pub fn begin_edit(&mut self, id: NoteId) -> bool {
        match self.state.notes.iter().find(|note| note.id == id) {
            Some(note) => {
                self.editor = Some(NoteEditor::open(note));
                true
            }
            None => false,
        }
    }

    pub fn edit_title(&mut self, value: impl Into<String>) {
        if let Some(editor) = self.editor.as_mut() {
            editor.set_title(value);
        }
    }

    pub fn edit_content(&mut self, value: impl Into<String>) {
        if let Some(editor) = self.editor.as_mut() {
            editor.set_content(value);
        }
    }

    /// Discards the drafts; the next session reseeds from the note's last
    /// known server values.
    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Sends the drafts as an update. On success the matching note is
    /// replaced with the server row and editing mode ends; on failure the
    /// session stays open with the drafts intact.
    pub async fn save_edit(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        let id = editor.note_id();
        let title = editor.title_edit().to_string();
        let content = editor.content_edit().to_string();

        match self.api.update_note(id, &title, &content).await {
            Ok(note) => {
                self.dispatch(NoteEvent::Updated(note));
                self.editor = None;
            }
            Err(err) => self.fail("save", err),
        }
    }

    fn dispatch(&mut self, event: NoteEvent) {
        self.state = apply(&self.state, event);
    }

    fn fail(&mut self, action: &str, err: ApiError) {
        warn!("event=request_failed module=client action={action} error={err}");
        self.dispatch(NoteEvent::RequestFailed(err.to_string()));
    }
}
