// src/domain/note.rs
use crate::constants::DEFAULT_PER_PAGE;
use crate::domain::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decoding goes through `FromStr`, so the server may send tags in any case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum NoteTag {
    #[default]
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    pub const ALL: [NoteTag; 5] = [
        NoteTag::Todo,
        NoteTag::Work,
        NoteTag::Personal,
        NoteTag::Meeting,
        NoteTag::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteTag::Todo => "Todo",
            NoteTag::Work => "Work",
            NoteTag::Personal => "Personal",
            NoteTag::Meeting => "Meeting",
            NoteTag::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for NoteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidTag(s.to_string()))
    }
}

impl TryFrom<String> for NoteTag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// Missing and `null` content both mean an empty body.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A note as stored by the remote API.
///
/// Timestamps are owned by the server and kept as the opaque strings it sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    pub tag: NoteTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>, tag: NoteTag) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tag,
        }
    }
}

/// Parameters of a listing request. Page and page size are always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteQuery {
    page: u32,
    per_page: u32,
    search: String,
}

impl NoteQuery {
    pub fn new(page: u32, per_page: u32, search: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            search: search.into(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The search filter to send, or `None` when the filter is empty.
    pub fn search_filter(&self) -> Option<&str> {
        if self.search.is_empty() {
            None
        } else {
            Some(&self.search)
        }
    }
}

impl Default for NoteQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
        }
    }
}

/// One page of notes plus the pagination metadata reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPage {
    pub notes: Vec<Note>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl NotesPage {
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// What the server answers to a delete.
///
/// Some API revisions return the deleted note, others only an id and a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeletionResult {
    Deleted(Note),
    Acknowledged {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl DeletionResult {
    pub fn id(&self) -> Option<&str> {
        match self {
            DeletionResult::Deleted(note) => Some(&note.id),
            DeletionResult::Acknowledged { id, .. } => id.as_deref(),
        }
    }
}
