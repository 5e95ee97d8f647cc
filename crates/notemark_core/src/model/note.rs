//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its write model.
//! - Validate user-supplied fields before they reach storage.
//!
//! # Invariants
//! - `id` is store-assigned and never reused for another note.
//! - `title` and `content` are rejected when empty after trimming.
//! - Persisted values echo the submitted text exactly; trimming is only
//!   applied for the emptiness check.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by the store at insert time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Canonical persisted note record.
///
/// This struct doubles as the wire representation: the server serializes
/// it into response envelopes and the client deserializes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned row id, immutable for the note lifetime.
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Creation time in epoch milliseconds, assigned by the store.
    pub created_at: i64,
}

/// Write model for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// Validation failure for user-supplied note fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is missing or whitespace-only.
    BlankTitle,
    /// Content is missing or whitespace-only.
    BlankContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "note title must not be blank"),
            Self::BlankContent => write!(f, "note content must not be blank"),
        }
    }
}

impl Error for NoteValidationError {}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Checks both fields before any write path may run.
    ///
    /// A field is invalid when it is empty after trimming. Absent and
    /// `null` JSON fields are normalized to `""` at the HTTP boundary, so
    /// they fail here as well.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::BlankTitle);
        }
        if self.content.trim().is_empty() {
            return Err(NoteValidationError::BlankContent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteDraft, NoteValidationError};

    #[test]
    fn draft_with_text_in_both_fields_is_valid() {
        assert_eq!(NoteDraft::new("groceries", "milk, eggs").validate(), Ok(()));
    }

    #[test]
    fn blank_title_is_rejected() {
        let draft = NoteDraft::new("   \t", "body");
        assert_eq!(draft.validate(), Err(NoteValidationError::BlankTitle));
    }

    #[test]
    fn blank_content_is_rejected() {
        let draft = NoteDraft::new("title", "\n  ");
        assert_eq!(draft.validate(), Err(NoteValidationError::BlankContent));
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            NoteDraft::new("", "body").validate(),
            Err(NoteValidationError::BlankTitle)
        );
        assert_eq!(
            NoteDraft::new("title", "").validate(),
            Err(NoteValidationError::BlankContent)
        );
    }

    #[test]
    fn validation_does_not_trim_stored_values() {
        let draft = NoteDraft::new("  padded  ", "  body  ");
        assert_eq!(draft.validate(), Ok(()));
        assert_eq!(draft.title, "  padded  ");
        assert_eq!(draft.content, "  body  ");
    }

    #[test]
    fn note_wire_shape_is_stable() {
        let note = super::Note {
            id: 3,
            title: "a".to_string(),
            content: "b".to_string(),
            created_at: 1_700_000_000_000,
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "title": "a",
                "content": "b",
                "created_at": 1_700_000_000_000_i64,
            })
        );
    }
}
