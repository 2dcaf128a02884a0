// src/ports/terminal.rs
use crate::application::pagination::should_paginate;
use crate::domain::{DeletionResult, Note, NotesPage};
use crate::ports::EMPTY_LISTING_MESSAGE;
use crate::util::text::{excerpt, truncate_chars};

const TITLE_WIDTH: usize = 50;
const EXCERPT_WIDTH: usize = 60;

/// Plain-text rendering for the command line.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn note_line(&self, note: &Note) -> String {
        let title = truncate_chars(&note.title, TITLE_WIDTH);
        let summary = excerpt(&note.content, EXCERPT_WIDTH);
        if summary.is_empty() {
            format!("{}\t[{}]\t{}", note.id, note.tag, title)
        } else {
            format!("{}\t[{}]\t{} - {}", note.id, note.tag, title, summary)
        }
    }

    /// One line per note, then a page footer when there is more than one page
    pub fn render_page(&self, page: &NotesPage) -> String {
        if page.is_empty() {
            return EMPTY_LISTING_MESSAGE.to_string();
        }

        let mut lines: Vec<String> = page.notes.iter().map(|n| self.note_line(n)).collect();
        if should_paginate(page.total_pages) {
            lines.push(format!(
                "Page {} of {} ({} notes)",
                page.page, page.total_pages, page.total_items
            ));
        }
        lines.join("\n")
    }

    pub fn created(&self, note: &Note) -> String {
        format!("Created note {} ({})", note.id, note.title)
    }

    pub fn deleted(&self, result: &DeletionResult) -> String {
        match result {
            DeletionResult::Deleted(note) => format!("Deleted note {} ({})", note.id, note.title),
            DeletionResult::Acknowledged { id, message } => {
                let id = id.as_deref().unwrap_or("?");
                match message {
                    Some(message) => format!("Deleted note {id}: {message}"),
                    None => format!("Deleted note {id}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteTag;

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tag: NoteTag::Work,
            created_at: None,
            updated_at: None,
        }
    }

    fn page(notes: Vec<Note>, page: u32, total_pages: u32, total_items: u64) -> NotesPage {
        NotesPage {
            notes,
            page,
            per_page: 12,
            total_items,
            total_pages,
        }
    }

    #[test]
    fn given_note_with_content_when_formatting_line_then_includes_first_line() {
        let line = TerminalPresenter::new().note_line(&note("a1", "Standup", "Agenda\nmore"));

        assert_eq!(line, "a1\t[Work]\tStandup - Agenda");
    }

    #[test]
    fn given_note_without_content_when_formatting_line_then_omits_separator() {
        let line = TerminalPresenter::new().note_line(&note("a1", "Standup", ""));

        assert_eq!(line, "a1\t[Work]\tStandup");
    }

    #[test]
    fn given_multiple_pages_when_rendering_then_appends_footer() {
        let output =
            TerminalPresenter::new().render_page(&page(vec![note("a", "One", "")], 2, 3, 30));

        assert_eq!(output.lines().last(), Some("Page 2 of 3 (30 notes)"));
    }

    #[test]
    fn given_single_page_when_rendering_then_has_no_footer() {
        let output =
            TerminalPresenter::new().render_page(&page(vec![note("a", "One", "")], 1, 1, 1));

        assert_eq!(output, "a\t[Work]\tOne");
    }

    #[test]
    fn given_empty_page_when_rendering_then_shows_empty_message() {
        let output = TerminalPresenter::new().render_page(&page(vec![], 1, 1, 0));

        assert_eq!(output, EMPTY_LISTING_MESSAGE);
    }

    #[test]
    fn given_acknowledgement_when_formatting_deletion_then_includes_message() {
        let result = DeletionResult::Acknowledged {
            id: Some("a".to_string()),
            message: Some("Note deleted".to_string()),
        };

        assert_eq!(TerminalPresenter::new().deleted(&result), "Deleted note a: Note deleted");
    }
}
