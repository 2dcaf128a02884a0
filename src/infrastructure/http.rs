// src/infrastructure/http.rs
use crate::application::NoteRepository;
use crate::domain::{DeletionResult, DomainError, NewNote, Note, NoteQuery, NotesPage};
use crate::infrastructure::normalize::normalize_list_response;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Connection settings for one notes API endpoint.
///
/// Passed explicitly to `HttpNoteRepository::new`, so clients pointed at different
/// servers can live side by side.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: None,
        }
    }

    /// Attach a bearer token. Blank tokens are ignored.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        self
    }

    /// Limit how long a single request may take. Without this no timeout applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListParams<'a> {
    page: u32,
    per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

impl<'a> From<&'a NoteQuery> for ListParams<'a> {
    fn from(query: &'a NoteQuery) -> Self {
        Self {
            page: query.page(),
            per_page: query.per_page(),
            search: query.search_filter(),
        }
    }
}

/// `NoteRepository` backed by the remote notes REST API.
///
/// Holds nothing but its configuration and a connection pool, every call is an
/// independent request with no retries.
pub struct HttpNoteRepository {
    base: Url,
    token: Option<String>,
    client: Client,
}

impl HttpNoteRepository {
    pub fn new(config: ClientConfig) -> Result<Self, DomainError> {
        let base = Url::parse(config.base_url()).map_err(|e| {
            DomainError::Config(format!("Invalid API base URL '{}': {}", config.base_url(), e))
        })?;
        if base.cannot_be_a_base() {
            return Err(DomainError::Config(format!(
                "API base URL cannot carry a path: {}",
                config.base_url()
            )));
        }

        if config.token().is_none() {
            warn!("No API token configured; requests are sent without authorization");
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {e}")))?;

        debug!(?config, "Created notes API client");
        Ok(Self {
            base,
            token: config.token,
            client,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was ruled out in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn execute(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = self
            .authorize(request)
            .send()
            .map_err(transport_failure)?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Received response");
        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(status, response))
        }
    }
}

impl NoteRepository for HttpNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&self, query: &NoteQuery) -> Result<NotesPage, DomainError> {
        let request = self
            .client
            .get(self.endpoint(&["notes"]))
            .query(&ListParams::from(query));
        let response = self.execute(request)?;

        let text = response.text().map_err(transport_failure)?;
        let body = serde_json::from_str::<Value>(&text).unwrap_or_else(|error| {
            debug!(%error, "List response is not JSON, treating it as empty");
            Value::Null
        });

        Ok(normalize_list_response(&body, query))
    }

    #[instrument(level = "debug", skip(self, note), fields(title = %note.title, tag = %note.tag))]
    fn create_note(&self, note: &NewNote) -> Result<Note, DomainError> {
        let request = self.client.post(self.endpoint(&["notes"])).json(note);
        let response = self.execute(request)?;
        let status = response.status();

        response.json::<Note>().map_err(|e| {
            DomainError::transport(
                Some(status.as_u16()),
                format!("Unexpected create response body: {e}"),
            )
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&self, id: &str) -> Result<DeletionResult, DomainError> {
        let request = self.client.delete(self.endpoint(&["notes", id]));
        let response = self.execute(request)?;

        let text = response.text().map_err(transport_failure)?;
        Ok(parse_deletion(id, &text))
    }
}

fn parse_deletion(id: &str, text: &str) -> DeletionResult {
    let text = text.trim();
    if text.is_empty() {
        return DeletionResult::Acknowledged {
            id: Some(id.to_string()),
            message: None,
        };
    }

    match serde_json::from_str::<DeletionResult>(text) {
        Ok(DeletionResult::Acknowledged { id: None, message }) => DeletionResult::Acknowledged {
            id: Some(id.to_string()),
            message,
        },
        Ok(result) => result,
        Err(_) => DeletionResult::Acknowledged {
            id: Some(id.to_string()),
            message: Some(text.to_string()),
        },
    }
}

fn transport_failure(error: reqwest::Error) -> DomainError {
    DomainError::transport(error.status().map(|s| s.as_u16()), error.to_string())
}

fn error_from_response(status: StatusCode, response: Response) -> DomainError {
    let body = response.text().unwrap_or_default();
    let message = server_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string()
    });
    DomainError::transport(Some(status.as_u16()), message)
}

/// Pull a human-readable message out of an error body: the JSON `message` or `error`
/// field when present, the raw text otherwise.
fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let field = ["message", "error"]
            .iter()
            .find_map(|key| json.get(*key).and_then(Value::as_str));
        if let Some(message) = field {
            return Some(message.to_string());
        }
    }
    Some(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteTag;

    fn repository(base_url: &str) -> HttpNoteRepository {
        HttpNoteRepository::new(ClientConfig::new(base_url)).expect("valid config")
    }

    #[test]
    fn given_token_when_debug_formatting_config_then_redacts_it() {
        let config = ClientConfig::new("http://localhost").with_token("s3cr3t-token");

        let printed = format!("{config:?}");

        assert!(!printed.contains("s3cr3t-token"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn given_blank_token_when_configuring_then_treats_as_missing() {
        let config = ClientConfig::new("http://localhost").with_token("   ");
        assert_eq!(config.token(), None);
    }

    #[test]
    fn given_invalid_base_url_when_creating_client_then_returns_config_error() {
        let result = HttpNoteRepository::new(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(DomainError::Config(_))));
    }

    #[test]
    fn given_base_with_path_when_building_endpoint_then_appends_segments() {
        let repo = repository("https://notehub.example/api");
        assert_eq!(
            repo.endpoint(&["notes"]).as_str(),
            "https://notehub.example/api/notes"
        );

        let repo = repository("https://notehub.example/api/");
        assert_eq!(
            repo.endpoint(&["notes", "42"]).as_str(),
            "https://notehub.example/api/notes/42"
        );
    }

    #[test]
    fn given_id_with_reserved_characters_when_building_endpoint_then_encodes_it() {
        let repo = repository("https://notehub.example/api");
        assert_eq!(
            repo.endpoint(&["notes", "a/b c"]).as_str(),
            "https://notehub.example/api/notes/a%2Fb%20c"
        );
    }

    #[test]
    fn given_empty_search_when_encoding_params_then_omits_search() {
        let query = NoteQuery::new(2, 12, "");
        let encoded = serde_json::to_value(ListParams::from(&query)).unwrap();
        assert_eq!(encoded, serde_json::json!({"page": 2, "perPage": 12}));
    }

    #[test]
    fn given_zero_page_and_size_when_encoding_params_then_sends_at_least_one() {
        let query = NoteQuery::new(0, 0, "x");
        let encoded = serde_json::to_value(ListParams::from(&query)).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"page": 1, "perPage": 1, "search": "x"})
        );
    }

    #[test]
    fn given_json_error_body_when_extracting_message_then_uses_message_field() {
        assert_eq!(
            server_message(r#"{"message":"Note not found"}"#).as_deref(),
            Some("Note not found")
        );
        assert_eq!(
            server_message(r#"{"error":"Unauthorized"}"#).as_deref(),
            Some("Unauthorized")
        );
        assert_eq!(server_message("Bad gateway").as_deref(), Some("Bad gateway"));
        assert_eq!(server_message("  "), None);
    }

    #[test]
    fn given_empty_body_when_parsing_deletion_then_acknowledges_requested_id() {
        assert_eq!(
            parse_deletion("n1", ""),
            DeletionResult::Acknowledged {
                id: Some("n1".to_string()),
                message: None,
            }
        );
    }

    #[test]
    fn given_message_only_body_when_parsing_deletion_then_fills_in_id() {
        assert_eq!(
            parse_deletion("n1", r#"{"message":"Deleted"}"#),
            DeletionResult::Acknowledged {
                id: Some("n1".to_string()),
                message: Some("Deleted".to_string()),
            }
        );
    }

    #[test]
    fn given_note_body_when_parsing_deletion_then_returns_deleted_note() {
        let body = r#"{"id":"n1","title":"Gone","content":"","tag":"Meeting"}"#;

        match parse_deletion("n1", body) {
            DeletionResult::Deleted(note) => assert_eq!(note.tag, NoteTag::Meeting),
            other => panic!("Expected Deleted, got {other:?}"),
        }
    }

    #[test]
    fn given_note_with_null_content_when_parsing_deletion_then_returns_deleted_note() {
        let body = r#"{"id":"n1","title":"Gone","content":null,"tag":"meeting"}"#;

        match parse_deletion("n1", body) {
            DeletionResult::Deleted(note) => {
                assert_eq!(note.content, "");
                assert_eq!(note.tag, NoteTag::Meeting);
            }
            other => panic!("Expected Deleted, got {other:?}"),
        }
    }

    #[test]
    fn given_plain_text_body_when_parsing_deletion_then_keeps_text_as_message() {
        assert_eq!(
            parse_deletion("n1", "OK"),
            DeletionResult::Acknowledged {
                id: Some("n1".to_string()),
                message: Some("OK".to_string()),
            }
        );
    }
}
