// src/ports/html.rs
use crate::application::pagination::should_paginate;
use crate::domain::{Note, NotesPage};
use crate::ports::EMPTY_LISTING_MESSAGE;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_note(&self, note: &Note) -> String {
        format!(
            r#"        <li class="note" data-id="{id}">
            <h2 class="note-title">{title}</h2>
            <p class="note-content">{content}</p>
            <span class="note-tag">{tag}</span>
        </li>
"#,
            id = encode_double_quoted_attribute(&note.id),
            title = encode_text(&note.title),
            content = encode_text(&note.content),
            tag = note.tag,
        )
    }

    /// Render one page of notes as a standalone HTML document
    #[instrument(level = "debug", skip(self, page), fields(count = page.notes.len()))]
    pub fn render(&self, page: &NotesPage, search: &str) -> String {
        let heading = if search.is_empty() {
            "Notes".to_string()
        } else {
            format!("Notes matching \u{201c}{}\u{201d}", encode_text(search))
        };

        let body = if page.is_empty() {
            format!(r#"    <p class="message">{EMPTY_LISTING_MESSAGE}</p>"#)
        } else {
            let items: String = page.notes.iter().map(|n| self.render_note(n)).collect();
            format!("    <ul class=\"note-list\">\n{items}    </ul>")
        };

        let footer = if should_paginate(page.total_pages) {
            format!(
                r#"    <footer class="pagination">Page {} of {} &middot; {} notes</footer>"#,
                page.page, page.total_pages, page.total_items
            )
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{heading}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 960px;
            margin: 2rem auto;
            padding: 0 1rem;
        }}
        .note-list {{
            list-style: none;
            padding: 0;
        }}
        .note {{
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 1rem;
            margin-bottom: 1rem;
        }}
        .note-tag {{
            font-size: 0.8em;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
        }}
    </style>
</head>
<body>
    <h1>{heading}</h1>
{body}
{footer}
</body>
</html>"#
        )
    }
}
