// src/application/mod.rs
pub mod note_creator;
pub mod note_deleter;
pub mod note_lister;
pub mod pagination;
pub mod repository;

pub use note_creator::NoteCreator;
pub use note_deleter::NoteDeleter;
pub use note_lister::NoteLister;
pub use repository::NoteRepository;
