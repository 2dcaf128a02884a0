// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{NoteCreator, NoteDeleter, NoteLister};
use domain::{NewNote, NoteQuery};
use infrastructure::renderer::BrowserRenderer;
use infrastructure::{Config, HttpNoteRepository};
use ports::{HtmlPresenter, TerminalPresenter};
use tracing::{debug, info};
use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notehub with arguments");

    // Initialize configuration
    let config = load_config(&args)?;
    debug!(?config, "Resolved configuration");

    // Initialize infrastructure
    let repository = HttpNoteRepository::new(config.client_config())
        .context("Failed to initialize notes API client")?;
    let presenter = TerminalPresenter::new();

    // Execute use case
    match args.command {
        Command::List {
            search,
            page,
            per_page,
            json,
            html,
        } => {
            let query = NoteQuery::new(
                page,
                per_page.unwrap_or(config.defaults.per_page),
                search.unwrap_or_default(),
            );
            info!(page = query.page(), search = %query.search(), "Listing notes");
            let notes = NoteLister::new(repository).list_notes(&query)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else if html {
                let rendered = HtmlPresenter::new().render(&notes, query.search());
                let mut renderer = BrowserRenderer::new();
                let path = renderer.create_temp_file(&rendered)?;
                renderer.open_in_browser(&path)?;
            } else {
                println!("{}", presenter.render_page(&notes));
            }
        }
        Command::Create {
            title,
            content,
            tag,
        } => {
            let created =
                NoteCreator::new(repository).create_note(NewNote::new(title, content, tag))?;
            println!("{}", presenter.created(&created));
        }
        Command::Delete { note_id } => {
            info!(%note_id, "Deleting note");
            let result = NoteDeleter::new(repository).delete_note(&note_id)?;
            println!("{}", presenter.deleted(&result));
        }
    }

    Ok(())
}

/// Config file, then environment, then command-line flags
pub fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?
        .with_env_overrides(|key| std::env::var(key).ok());

    if let Some(base_url) = &args.base_url {
        debug!(%base_url, "Base URL overridden from command line");
        config.api.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.api.timeout_secs = timeout;
    }

    Ok(config)
}
