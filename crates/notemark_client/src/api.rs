//! HTTP transport for the note store API.
//!
//! # Responsibility
//! - Issue JSON requests against the server surface.
//! - Decode success envelopes and `{status, message}` error bodies.
//!
//! # Invariants
//! - Callers always receive the server's persisted representation, never
//!   an echo of their own input.

use notemark_core::{Note, NoteId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

/// Transport-level error for note API calls.
#[derive(Debug)]
pub enum ApiError {
    /// Network failure, or a response body that could not be decoded.
    Transport(reqwest::Error),
    /// Non-success status reported by the server.
    Status { code: u16, message: String },
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "request failed: {err}"),
            Self::Status { code, message } => write!(f, "server returned {code}: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Client-side seam for the note store API. Production code talks HTTP;
/// tests substitute an in-memory double.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    /// Fetches the full note list.
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;
    /// Creates a note and returns the persisted row with its true id.
    async fn create_note(&self, title: &str, content: &str) -> ApiResult<Note>;
    /// Replaces title/content of one note and returns the fresh row.
    async fn update_note(&self, id: NoteId, title: &str, content: &str) -> ApiResult<Note>;
    /// Deletes one note by id.
    async fn delete_note(&self, id: NoteId) -> ApiResult<()>;
}

#[derive(Serialize)]
struct NotePayload<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct NoteBody {
    data: Note,
}

#[derive(Deserialize)]
struct NoteListBody {
    data: Vec<Note>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Production transport over `reqwest`.
pub struct HttpNotesApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpNotesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let code = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "request rejected".to_string());

        Err(ApiError::Status { code, message })
    }
}

impl NotesApi for HttpNotesApi {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let response = self
            .http
            .get(format!("{}/notes", self.base_url))
            .send()
            .await?;
        let body = Self::check(response).await?.json::<NoteListBody>().await?;
        Ok(body.data)
    }

    async fn create_note(&self, title: &str, content: &str) -> ApiResult<Note> {
        let response = self
            .http
            .post(format!("{}/notes", self.base_url))
            .json(&NotePayload { title, content })
            .send()
            .await?;
        let body = Self::check(response).await?.json::<NoteBody>().await?;
        Ok(body.data)
    }

    async fn update_note(&self, id: NoteId, title: &str, content: &str) -> ApiResult<Note> {
        let response = self
            .http
            .put(format!("{}/notes/{id}", self.base_url))
            .json(&NotePayload { title, content })
            .send()
            .await?;
        let body = Self::check(response).await?.json::<NoteBody>().await?;
        Ok(body.data)
    }

    async fn delete_note(&self, id: NoteId) -> ApiResult<()> {
        let response = self
            .http
            .delete(format!("{}/notes/{id}", self.base_url))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
