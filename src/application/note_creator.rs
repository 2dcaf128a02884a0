// src/application/note_creator.rs
use crate::application::NoteRepository;
use crate::domain::{validate_new_note, DomainError, NewNote, Note};
use tracing::{debug, info};

/// Form-side use case: validate the payload, then hand it to the repository.
pub struct NoteCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn create_note(&self, note: NewNote) -> Result<Note, DomainError> {
        let errors = validate_new_note(&note);
        if !errors.is_empty() {
            debug!(?errors, "Rejected note payload");
            return Err(DomainError::InvalidNote(errors));
        }

        let created = self.repository.create_note(&note)?;
        info!(note_id = %created.id, tag = %created.tag, "Created note");
        Ok(created)
    }
}
