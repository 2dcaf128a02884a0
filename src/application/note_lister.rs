// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteQuery, NotesPage};
use tracing::debug;

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List one page of notes, optionally filtered by the query's search term
    ///
    /// # Arguments
    /// * `query` - Page, page size and search filter
    ///
    /// # Returns
    /// The requested page in server order, with pagination metadata
    pub fn list_notes(&self, query: &NoteQuery) -> Result<NotesPage, DomainError> {
        let page = self.repository.list_notes(query)?;
        debug!(
            page = page.page,
            total_pages = page.total_pages,
            count = page.notes.len(),
            "Listed notes"
        );
        Ok(page)
    }
}
