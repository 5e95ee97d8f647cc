//! Client-side state container.
//!
//! # Responsibility
//! - Hold the note list and search text the view renders from.
//! - Apply server-confirmed events through a pure reducer.
//!
//! # Invariants
//! - `apply` never mutates its input; every event yields a new state.
//! - Mutating events carry the server-returned row; the client never
//!   invents ids or applies changes optimistically.
//! - Filtering derives a view; it never reorders or mutates `notes`.

use notemark_core::{Note, NoteId};

/// Whole-view state: the note list plus the live search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    pub notes: Vec<Note>,
    pub search_query: String,
    /// Last failed action, surfaced to the UI instead of being swallowed.
    pub last_error: Option<String>,
}

/// State transitions, one per server-confirmed action or UI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    /// Full list replacement after a load.
    Loaded(Vec<Note>),
    /// Server-confirmed create; carries the persisted row.
    Added(Note),
    /// Server-confirmed update; replaces the matching note by id.
    Updated(Note),
    /// Server-confirmed delete.
    Removed(NoteId),
    /// Search text changed.
    SearchChanged(String),
    /// A request failed; notes are left untouched.
    RequestFailed(String),
}

/// Pure reducer: current state plus one event yields the next state.
pub fn apply(state: &ClientState, event: NoteEvent) -> ClientState {
    let mut next = state.clone();
    match event {
        NoteEvent::Loaded(notes) => {
            next.notes = notes;
            next.last_error = None;
        }
        NoteEvent::Added(note) => {
            next.notes.push(note);
            next.last_error = None;
        }
        NoteEvent::Updated(note) => {
            for existing in &mut next.notes {
                if existing.id == note.id {
                    *existing = note.clone();
                }
            }
            next.last_error = None;
        }
        NoteEvent::Removed(id) => {
            next.notes.retain(|note| note.id != id);
            next.last_error = None;
        }
        NoteEvent::SearchChanged(query) => {
            next.search_query = query;
        }
        NoteEvent::RequestFailed(message) => {
            next.last_error = Some(message);
        }
    }
    next
}

/// Case-insensitive substring filter over title OR content.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{apply, filter_notes, ClientState, NoteEvent};
    use notemark_core::Note;

    fn note(id: i64, title: &str, content: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn loaded_replaces_notes_and_clears_error() {
        let state = ClientState {
            last_error: Some("old failure".to_string()),
            ..ClientState::default()
        };

        let next = apply(&state, NoteEvent::Loaded(vec![note(1, "a", "b")]));
        assert_eq!(next.notes.len(), 1);
        assert_eq!(next.last_error, None);
    }

    #[test]
    fn added_appends_the_server_row() {
        let state = ClientState {
            notes: vec![note(1, "a", "b")],
            ..ClientState::default()
        };

        let next = apply(&state, NoteEvent::Added(note(2, "c", "d")));
        assert_eq!(next.notes.len(), 2);
        assert_eq!(next.notes[1].id, 2);
        // input state untouched
        assert_eq!(state.notes.len(), 1);
    }

    #[test]
    fn updated_replaces_only_the_matching_note() {
        let state = ClientState {
            notes: vec![note(1, "a", "b"), note(2, "c", "d")],
            ..ClientState::default()
        };

        let next = apply(&state, NoteEvent::Updated(note(2, "c2", "d2")));
        assert_eq!(next.notes[0].title, "a");
        assert_eq!(next.notes[1].title, "c2");
    }

    #[test]
    fn updated_with_unknown_id_is_a_no_op() {
        let state = ClientState {
            notes: vec![note(1, "a", "b")],
            ..ClientState::default()
        };

        let next = apply(&state, NoteEvent::Updated(note(9, "x", "y")));
        assert_eq!(next.notes, state.notes);
    }

    #[test]
    fn removed_filters_by_id() {
        let state = ClientState {
            notes: vec![note(1, "a", "b"), note(2, "c", "d")],
            ..ClientState::default()
        };

        let next = apply(&state, NoteEvent::Removed(1));
        assert_eq!(next.notes.len(), 1);
        assert_eq!(next.notes[0].id, 2);
    }

    #[test]
    fn request_failed_sets_error_and_keeps_notes() {
        let state = ClientState {
            notes: vec![note(1, "a", "b")],
            ..ClientState::default()
        };

        let next = apply(&state, NoteEvent::RequestFailed("boom".to_string()));
        assert_eq!(next.notes, state.notes);
        assert_eq!(next.last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn filter_matches_title_or_content_case_insensitively() {
        let notes = vec![
            note(1, "Shopping List", "milk"),
            note(2, "work", "Quarterly REPORT"),
            note(3, "misc", "nothing here"),
        ];

        let hits = filter_notes(&notes, "shopping");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = filter_notes(&notes, "report");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn empty_query_matches_everything() {
        let notes = vec![note(1, "a", "b"), note(2, "c", "d")];
        assert_eq!(filter_notes(&notes, "").len(), 2);
    }

    #[test]
    fn filter_never_mutates_or_reorders_the_source() {
        let notes = vec![note(2, "b", "x"), note(1, "a", "x")];
        let snapshot = notes.clone();

        let hits = filter_notes(&notes, "x");
        assert_eq!(hits.iter().map(|n| n.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(notes, snapshot);
    }
}
