//! Domain model for notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by server and client.
//! - Own write-path validation of user-supplied fields.
//!
//! # Invariants
//! - Every persisted note is identified by a stable `NoteId`.
//! - No note is ever persisted with a blank title or content.

pub mod note;
