// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DeletionResult, DomainError};

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and return whatever confirmation the server sent back
    pub fn delete_note(&self, note_id: &str) -> Result<DeletionResult, DomainError> {
        self.repository.delete_note(note_id)
    }
}
