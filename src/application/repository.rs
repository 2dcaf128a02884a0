// src/application/repository.rs
use crate::domain::{DeletionResult, DomainError, NewNote, Note, NoteQuery, NotesPage};

/// Access to a remote notes collection.
///
/// Implementations hold no per-call state, so every method takes `&self` and calls may
/// be issued from several threads at once.
pub trait NoteRepository {
    /// Fetch one page of notes, normalized to a `NotesPage` whatever shape the server used.
    fn list_notes(&self, query: &NoteQuery) -> Result<NotesPage, DomainError>;

    /// Send an already validated payload and return the server's copy of the note.
    fn create_note(&self, note: &NewNote) -> Result<Note, DomainError>;

    /// Delete a note by id. Nothing is cached locally, callers re-list afterwards.
    fn delete_note(&self, id: &str) -> Result<DeletionResult, DomainError>;
}

impl<R: NoteRepository + ?Sized> NoteRepository for &R {
    fn list_notes(&self, query: &NoteQuery) -> Result<NotesPage, DomainError> {
        (**self).list_notes(query)
    }

    fn create_note(&self, note: &NewNote) -> Result<Note, DomainError> {
        (**self).create_note(note)
    }

    fn delete_note(&self, id: &str) -> Result<DeletionResult, DomainError> {
        (**self).delete_note(id)
    }
}
