// src/ports/mod.rs
pub mod html;
pub mod terminal;

pub use html::HtmlPresenter;
pub use terminal::TerminalPresenter;

/// Shown in place of a listing that came back empty.
pub const EMPTY_LISTING_MESSAGE: &str = "No notes found. Create your first note!";
