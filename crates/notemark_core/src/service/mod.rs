//! Use-case services over repository implementations.

pub mod note_service;
