// src/cli/args.rs
use crate::domain::NoteTag;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (default: <config dir>/notehub/config.toml)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Notes API base URL, overrides config and NOTEHUB_BASE_URL
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, create, or delete)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List one page of notes
    List {
        /// Optional search term; empty means no filter
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Page to fetch, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Notes per page (default from config, 12 otherwise)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        per_page: Option<u32>,

        /// Print the page as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Render the page as HTML and open it in the browser
        #[arg(long)]
        html: bool,
    },

    /// Create a note
    Create {
        /// Note title (3 to 50 characters)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Note body (up to 500 characters)
        #[arg(long, default_value = "")]
        content: String,

        /// One of Todo, Work, Personal, Meeting, Shopping
        #[arg(short, long, default_value = "Todo")]
        tag: NoteTag,
    },

    /// Delete a note by id
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },
}
