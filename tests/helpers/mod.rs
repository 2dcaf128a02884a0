#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use notehub::infrastructure::{ClientConfig, HttpNoteRepository};
use reqwest::Url;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Runtime;

pub const TEST_TOKEN: &str = "integration-test-token";

/// A request as seen by the fake server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// Decoded query parameters in the order they were sent
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let query = self.query.as_deref().unwrap_or("");
        let url = Url::parse(&format!("http://fake.test/?{query}")).expect("valid query");
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Clone)]
struct Reply {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

#[derive(Default)]
struct Shared {
    routes: HashMap<(String, String), Reply>,
    requests: Vec<RecordedRequest>,
}

/// In-process stand-in for the notes API, served by axum on a background runtime
///
/// Routes are matched on method and exact path; anything else gets a 404.
pub struct FakeNotesApi {
    base_url: String,
    shared: Arc<Mutex<Shared>>,
    _runtime: Runtime,
}

impl FakeNotesApi {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("Failed to build tokio runtime");

        let std_listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind fake server");
        std_listener
            .set_nonblocking(true)
            .expect("Failed to set listener non-blocking");
        let addr = std_listener.local_addr().expect("listener address");

        let shared = Arc::new(Mutex::new(Shared::default()));
        let app = Router::new().fallback(handle).with_state(shared.clone());

        let listener = {
            let _guard = runtime.enter();
            tokio::net::TcpListener::from_std(std_listener).expect("Failed to adopt listener")
        };
        runtime.spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}/api"),
            shared,
            _runtime: runtime,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Answer `method path` (path relative to the API base) with a status and body
    pub fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) -> &Self {
        self.respond_after(method, path, status, body, None)
    }

    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: Value) -> &Self {
        self.respond(method, path, status, body.to_string())
    }

    pub fn respond_after(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: impl Into<String>,
        delay: Option<Duration>,
    ) -> &Self {
        self.shared.lock().unwrap().routes.insert(
            (method.to_string(), format!("/api{path}")),
            Reply {
                status,
                body: body.into(),
                delay,
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("server received no request")
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone()).with_token(TEST_TOKEN)
    }

    pub fn client(&self) -> HttpNoteRepository {
        HttpNoteRepository::new(self.config()).expect("Failed to build client")
    }

    pub fn client_without_token(&self) -> HttpNoteRepository {
        HttpNoteRepository::new(ClientConfig::new(self.base_url.clone()))
            .expect("Failed to build client")
    }
}

async fn handle(
    State(shared): State<Arc<Mutex<Shared>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let reply = {
        let mut shared = shared.lock().unwrap();
        shared.requests.push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
        shared
            .routes
            .get(&(method.to_string(), uri.path().to_string()))
            .cloned()
            .unwrap_or(Reply {
                status: 404,
                body: json!({"message": "Route not found"}).to_string(),
                delay: None,
            })
    };

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// A note as the API serializes it
pub fn note_json(id: &str, title: &str, tag: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": format!("Content of {title}"),
        "tag": tag,
        "createdAt": "2025-03-01T10:00:00.000Z",
        "updatedAt": "2025-03-01T10:00:00.000Z"
    })
}

/// Base URL of a port nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{addr}/api")
}
