// src/infrastructure/normalize.rs
//
// The notes API has answered list requests with several different body layouts over
// time. Everything that knows about those layouts lives in this file.
use crate::domain::{Note, NoteQuery, NotesPage};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Where the list of notes was found in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `{"notes": [...]}`
    Notes,
    /// `{"data": [...]}`
    Data,
    /// `{"data": {"items": [...]}}`
    NestedDataItems,
    /// `{"items": [...]}`
    Items,
    /// None of the above; treated as an empty list.
    Unrecognized,
}

/// Turn any observed list response into a `NotesPage`.
///
/// The list is probed in a fixed order (`notes`, `data`, `data.items`, `items`) and the
/// first array found wins. Metadata is read from `meta` when it is an object, otherwise
/// from the top level. Missing fields fall back as follows:
///
/// * `totalItems` -> `total` -> number of notes extracted
/// * `totalPages` -> 1
/// * `page` / `perPage` -> the values that were requested
///
/// Entries that are not valid notes are skipped. This never fails.
pub fn normalize_list_response(body: &Value, query: &NoteQuery) -> NotesPage {
    let (shape, entries) = find_note_list(body);
    debug!(?shape, entries = entries.len(), "Matched notes list response shape");

    let notes = decode_notes(entries);

    let meta = body
        .get("meta")
        .filter(|meta| meta.is_object())
        .unwrap_or(body);

    let total_items = read_u64(meta, "totalItems")
        .or_else(|| read_u64(meta, "total"))
        .unwrap_or(notes.len() as u64);
    let total_pages = read_u32(meta, "totalPages").unwrap_or(1);
    let page = read_u32(meta, "page")
        .filter(|page| *page > 0)
        .unwrap_or(query.page());
    let per_page = read_u32(meta, "perPage")
        .filter(|per_page| *per_page > 0)
        .unwrap_or(query.per_page());

    NotesPage {
        notes,
        page,
        per_page,
        total_items,
        total_pages,
    }
}

fn find_note_list(body: &Value) -> (ListShape, &[Value]) {
    if let Some(list) = body.get("notes").and_then(Value::as_array) {
        return (ListShape::Notes, list);
    }
    if let Some(list) = body.get("data").and_then(Value::as_array) {
        return (ListShape::Data, list);
    }
    if let Some(list) = body
        .get("data")
        .and_then(|data| data.get("items"))
        .and_then(Value::as_array)
    {
        return (ListShape::NestedDataItems, list);
    }
    if let Some(list) = body.get("items").and_then(Value::as_array) {
        return (ListShape::Items, list);
    }
    (ListShape::Unrecognized, &[])
}

fn decode_notes(entries: &[Value]) -> Vec<Note> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match Note::deserialize(entry) {
            Ok(note) => Some(note),
            Err(error) => {
                debug!(index, %error, "Skipping list entry that is not a note");
                None
            }
        })
        .collect()
}

// Accepts JSON numbers and numeric strings. Whole floats such as `3.0` count as integers.
fn read_u64(source: &Value, key: &str) -> Option<u64> {
    match source.get(key)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

fn whole_number(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}

fn read_u32(source: &Value, key: &str) -> Option<u32> {
    read_u64(source, key).and_then(|n| u32::try_from(n).ok())
}
