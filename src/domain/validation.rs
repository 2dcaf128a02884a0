// src/domain/validation.rs
use crate::constants::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
use crate::domain::NewNote;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteField {
    Title,
    Content,
    Tag,
}

impl fmt::Display for NoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteField::Title => "title",
            NoteField::Content => "content",
            NoteField::Tag => "tag",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: NoteField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: NoteField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a create payload against the note form rules.
///
/// Returns at most one error per field; an empty vector means the payload is valid.
/// Lengths are counted in characters, not bytes. The tag needs no check here because
/// `NoteTag` only admits the five known values (parsing reports "Invalid tag").
pub fn validate_new_note(note: &NewNote) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let title_len = note.title.chars().count();
    if title_len == 0 {
        errors.push(FieldError::new(NoteField::Title, "Title is required"));
    } else if title_len < TITLE_MIN_CHARS {
        errors.push(FieldError::new(
            NoteField::Title,
            format!("Title must be at least {TITLE_MIN_CHARS} characters"),
        ));
    } else if title_len > TITLE_MAX_CHARS {
        errors.push(FieldError::new(
            NoteField::Title,
            format!("Title must be at most {TITLE_MAX_CHARS} characters"),
        ));
    }

    if note.content.chars().count() > CONTENT_MAX_CHARS {
        errors.push(FieldError::new(
            NoteField::Content,
            format!("Content must be at most {CONTENT_MAX_CHARS} characters"),
        ));
    }

    errors
}
