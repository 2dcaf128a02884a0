// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod normalize;
pub mod renderer;

pub use config::Config;
pub use http::{ClientConfig, HttpNoteRepository};
pub use normalize::{normalize_list_response, ListShape};
