//! Mock generation service for integration tests.
//!
//! Serves `/api/generate` on an ephemeral loopback port and
//! records every request body it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::{Mutex, Notify};

use flashcard_generator::{GeneratorSettings, HttpGenerationClient, GENERATE_PATH};

/// How the mock answers `/api/generate`.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    /// Raw body sent with a JSON content type.
    Raw(&'static str),
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
    gate: Option<Arc<Notify>>,
}

/// Running mock backend.
pub struct MockBackend {
    pub url: String,
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
    gate: Option<Arc<Notify>>,
}

impl MockBackend {
    /// Start a backend that answers immediately.
    pub async fn start(reply: Reply) -> Self {
        Self::spawn(reply, None).await
    }

    /// Start a backend that holds each request until [`MockBackend::release`].
    pub async fn start_gated(reply: Reply) -> Self {
        Self::spawn(reply, Some(Arc::new(Notify::new()))).await
    }

    async fn spawn(reply: Reply, gate: Option<Arc<Notify>>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            hits: hits.clone(),
            bodies: bodies.clone(),
            gate: gate.clone(),
        };

        let app = Router::new()
                .route(GENERATE_PATH, post(generate))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            url: format!("http://{}", addr),
            hits,
            bodies,
            gate,
        }
    }

    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings::default().with_backend_url(&self.url)
    }

    /// Client for this backend that never routes through a proxy.
    pub fn client(&self, settings: &GeneratorSettings) -> HttpGenerationClient {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("build http client");
        HttpGenerationClient::with_client(http, settings)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().await.clone()
    }

    /// Let one held request through.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }
}

async fn generate(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.bodies.lock().await.push(body);

    if let Some(gate) = &state.gate {
        gate.notified().await;
    }

    match state.reply {
        Reply::Json(value) => Json(value).into_response(),
        Reply::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "detail": "mock failure" }))).into_response()
        }
        Reply::Raw(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
    }
}

/// Two cards in a fixed order.
pub fn two_cards() -> Value {
    json!({
        "cards": [
            {
                "question": "What color is the sky?",
                "answer": "Blue.",
                "tags": ["sky", "color"],
                "type": "Standard"
            },
            {
                "question": "Is the sky \"blue\"?",
                "answer": "Yes",
                "tags": "sky, facts",
                "type": "TrueFalse"
            }
        ]
    })
}
