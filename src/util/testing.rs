// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DeletionResult, DomainError, NewNote, Note, NoteQuery, NotesPage};

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NOTEHUB_TOKEN", "NOTEHUB_BASE_URL"];

enum DeleteBehavior {
    Success(String),
    NotFound,
}

/// Shared in-memory repository for testing use cases that depend on NoteRepository
///
/// Listing filters titles case-insensitively and slices the result into pages the way
/// the real API does. Queries and create payloads are recorded for later assertions.
///
/// # Examples
///
/// ```
/// use notehub::util::testing::MockNoteRepository;
/// use notehub::domain::{Note, NoteTag};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(Note {
///         id: "n1".to_string(),
///         title: "Question".to_string(),
///         content: "Answer".to_string(),
///         tag: NoteTag::Todo,
///         created_at: None,
///         updated_at: None,
///     })
///     .with_delete_success("n1", "Note deleted")
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    delete_behaviors: HashMap<String, DeleteBehavior>,
    list_failure: Option<(u16, String)>,
    create_failure: Option<(u16, String)>,
    queries: Mutex<Vec<NoteQuery>>,
    creates: Mutex<Vec<NewNote>>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Every query passed to `list_notes`, in call order
    pub fn recorded_queries(&self) -> Vec<NoteQuery> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every payload passed to `create_note`, in call order
    pub fn recorded_creates(&self) -> Vec<NewNote> {
        self.creates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(&self, query: &NoteQuery) -> Result<NotesPage, DomainError> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.clone());

        if let Some((status, message)) = &self.list_failure {
            return Err(DomainError::transport(Some(*status), message.clone()));
        }

        let matching: Vec<&Note> = match query.search_filter() {
            None => self.notes.iter().collect(),
            Some(search) => {
                let needle = search.to_lowercase();
                self.notes
                    .iter()
                    .filter(|n| n.title.to_lowercase().contains(&needle))
                    .collect()
            }
        };

        let per_page = query.per_page() as usize;
        let total_items = matching.len();
        let total_pages = total_items.div_ceil(per_page).max(1);
        let notes = matching
            .into_iter()
            .skip((query.page() as usize - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect();

        Ok(NotesPage {
            notes,
            page: query.page(),
            per_page: query.per_page(),
            total_items: total_items as u64,
            total_pages: total_pages as u32,
        })
    }

    fn create_note(&self, note: &NewNote) -> Result<Note, DomainError> {
        let mut creates = self.creates.lock().unwrap_or_else(PoisonError::into_inner);
        creates.push(note.clone());

        if let Some((status, message)) = &self.create_failure {
            return Err(DomainError::transport(Some(*status), message.clone()));
        }

        Ok(Note {
            id: format!("mock-{}", creates.len()),
            title: note.title.clone(),
            content: note.content.clone(),
            tag: note.tag,
            created_at: None,
            updated_at: None,
        })
    }

    fn delete_note(&self, id: &str) -> Result<DeletionResult, DomainError> {
        match self.delete_behaviors.get(id) {
            Some(DeleteBehavior::Success(message)) => Ok(DeletionResult::Acknowledged {
                id: Some(id.to_string()),
                message: Some(message.clone()),
            }),
            Some(DeleteBehavior::NotFound) | None => {
                Err(DomainError::transport(Some(404), "Note not found"))
            }
        }
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    delete_behaviors: HashMap<String, DeleteBehavior>,
    list_failure: Option<(u16, String)>,
    create_failure: Option<(u16, String)>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            delete_behaviors: HashMap::new(),
            list_failure: None,
            create_failure: None,
        }
    }

    /// Add a note that list_notes can return; insertion order is server order
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Configure delete_note to succeed for a specific ID
    pub fn with_delete_success(mut self, id: &str, message: &str) -> Self {
        self.delete_behaviors
            .insert(id.to_string(), DeleteBehavior::Success(message.to_string()));
        self
    }

    /// Configure delete_note to fail with a 404 for a specific ID
    pub fn with_delete_not_found(mut self, id: &str) -> Self {
        self.delete_behaviors
            .insert(id.to_string(), DeleteBehavior::NotFound);
        self
    }

    /// Make every list_notes call fail with the given status
    pub fn with_list_failure(mut self, status: u16, message: &str) -> Self {
        self.list_failure = Some((status, message.to_string()));
        self
    }

    /// Make every create_note call fail with the given status
    pub fn with_create_failure(mut self, status: u16, message: &str) -> Self {
        self.create_failure = Some((status, message.to_string()));
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            delete_behaviors: self.delete_behaviors,
            list_failure: self.list_failure,
            create_failure: self.create_failure,
            queries: Mutex::new(Vec::new()),
            creates: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();
    print_active_env_vars();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "rustls", "mio", "axum"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // RUST_LOG wins; otherwise log everything the crate emits
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if *var == "NOTEHUB_TOKEN" {
            let state = if env::var(var).is_ok() { "set" } else { "not set" };
            println!("{var} is {state}");
        } else if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}
