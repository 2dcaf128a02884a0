// src/domain/error.rs
use crate::domain::validation::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Any non-2xx answer or network-level failure talking to the notes API.
    /// `status` is `None` when no HTTP response was received at all.
    #[error("{}", transport_message(.status, .message))]
    Transport {
        status: Option<u16>,
        message: String,
    },
    #[error("Invalid note: {}", join_field_errors(.0))]
    InvalidNote(Vec<FieldError>),
    #[error("Invalid tag: {0}")]
    InvalidTag(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        DomainError::Transport {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by a transport failure, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DomainError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Request failed with status {code}: {message}"),
        None => format!("Request failed: {message}"),
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
