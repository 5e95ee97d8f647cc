//! Note use-case service.
//!
//! # Responsibility
//! - Provide the create/update/get/list/delete entry points used by the
//!   HTTP surface.
//! - Guarantee that mutating calls return the authoritative persisted row.
//!
//! # Invariants
//! - Create and update re-read the affected row and return the fresh
//!   record, never an echo of the caller's input.
//! - Updates and deletes against unknown ids fail with `NoteNotFound`.

use crate::model::note::{Note, NoteDraft, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// User-supplied fields failed validation.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note and returns the persisted row.
    pub fn create_note(&self, draft: NoteDraft) -> Result<Note, NoteServiceError> {
        let id = self.repo.insert_note(&draft)?;
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note missing in read-back",
            ))
    }

    /// Replaces title and content of one note and returns the fresh row.
    pub fn update_note(&self, id: NoteId, draft: NoteDraft) -> Result<Note, NoteServiceError> {
        self.repo.update_note(id, &draft)?;
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "updated note missing in read-back",
            ))
    }

    /// Gets one note by its stable id.
    pub fn get_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))
    }

    /// Lists all notes in creation order.
    pub fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.list_notes()?)
    }

    /// Deletes one note by id. A second delete of the same id fails with
    /// `NoteNotFound`.
    pub fn delete_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.delete_note(id)?;
        Ok(())
    }
}
