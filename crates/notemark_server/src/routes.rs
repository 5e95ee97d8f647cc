//! CRUD request handlers for the `/notes` surface.
//!
//! Every mutating handler returns the re-read persisted row, never an
//! echo of the request payload.

use std::sync::{Arc, MutexGuard};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notemark_core::{Note, NoteDraft, NoteId, NoteService, SqliteNoteRepository};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ApiError;
use super::state::AppState;

/// Incoming JSON body for create/update. Absent and `null` fields
/// collapse to empty strings so validation treats them as blank.
#[derive(Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NotePayload {
    fn into_draft(self) -> NoteDraft {
        NoteDraft::new(
            self.title.unwrap_or_default(),
            self.content.unwrap_or_default(),
        )
    }
}

/// Success envelope for the full note list.
#[derive(Serialize)]
pub struct NoteListBody {
    pub status: &'static str,
    pub message: &'static str,
    pub data: Vec<Note>,
}

/// Success envelope for a single note.
#[derive(Serialize)]
pub struct NoteBody {
    pub status: &'static str,
    pub data: Note,
}

/// Success envelope for responses without note data.
#[derive(Serialize)]
pub struct MessageBody {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        format!("notemark {} is running", notemark_core::core_version()),
    )
}

pub async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NoteListBody>, ApiError> {
    let conn = lock_conn(&state)?;
    let notes = service(&conn).list_notes()?;

    Ok(Json(NoteListBody {
        status: "success",
        message: "Notes fetched",
        data: notes,
    }))
}

pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
) -> Result<Json<NoteBody>, ApiError> {
    let conn = lock_conn(&state)?;
    let note = service(&conn).get_note(id)?;

    Ok(Json(NoteBody {
        status: "success",
        data: note,
    }))
}

pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<NoteBody>), ApiError> {
    let conn = lock_conn(&state)?;
    let note = service(&conn).create_note(payload.into_draft())?;
    info!("note created id={}", note.id);

    Ok((
        StatusCode::CREATED,
        Json(NoteBody {
            status: "success",
            data: note,
        }),
    ))
}

pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<NoteBody>, ApiError> {
    let conn = lock_conn(&state)?;
    let note = service(&conn).update_note(id, payload.into_draft())?;
    info!("note updated id={id}");

    Ok(Json(NoteBody {
        status: "success",
        data: note,
    }))
}

pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
) -> Result<Json<MessageBody>, ApiError> {
    let conn = lock_conn(&state)?;
    service(&conn).delete_note(id)?;
    info!("note deleted id={id}");

    Ok(Json(MessageBody {
        status: "success",
        message: "Note deleted",
    }))
}

fn lock_conn(state: &AppState) -> Result<MutexGuard<'_, Connection>, ApiError> {
    state
        .conn
        .lock()
        .map_err(|_| ApiError::Internal("connection lock poisoned".into()))
}

fn service<'conn>(conn: &'conn Connection) -> NoteService<SqliteNoteRepository<'conn>> {
    NoteService::new(SqliteNoteRepository::new(conn))
}
