// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod validation;

pub use error::DomainError;
pub use note::{DeletionResult, NewNote, Note, NoteQuery, NoteTag, NotesPage};
pub use validation::{validate_new_note, FieldError, NoteField};
