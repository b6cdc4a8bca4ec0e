//! Stub dispatch endpoint served by axum on an ephemeral local port.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use dispute_core::config::AgentsConfig;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
pub enum Canned {
    Json(StatusCode, Value),
    Text(StatusCode, String),
}

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: Value,
}

struct StubState {
    replies: HashMap<String, Canned>,
    fallback: Option<Canned>,
    recorded: Mutex<Vec<Recorded>>,
}

pub struct StubServer {
    pub url: String,
    state: Arc<StubState>,
}

impl StubServer {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.state
            .recorded
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn config(&self) -> AgentsConfig {
        AgentsConfig::default()
            .with_endpoint(self.url.clone())
            .with_timeout(Duration::from_secs(5))
    }
}

#[derive(Default)]
pub struct StubBuilder {
    replies: HashMap<String, Canned>,
    fallback: Option<Canned>,
}

impl StubBuilder {
    pub fn reply(mut self, agent_id: &str, canned: Canned) -> Self {
        self.replies.insert(agent_id.to_string(), canned);
        self
    }

    pub fn fallback(mut self, canned: Canned) -> Self {
        self.fallback = Some(canned);
        self
    }

    pub async fn spawn(self) -> StubServer {
        let state = Arc::new(StubState {
            replies: self.replies,
            fallback: self.fallback,
            recorded: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/api/agents/chat", post(chat))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server");
        });

        StubServer {
            url: format!("http://{addr}/api/agents/chat"),
            state,
        }
    }
}

async fn chat(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let agent_id = body
        .get("agentId")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if let Ok(mut recorded) = state.recorded.lock() {
        recorded.push(Recorded {
            authorization,
            body: body.clone(),
        });
    }

    match state.replies.get(&agent_id).or(state.fallback.as_ref()) {
        Some(Canned::Json(status, value)) => (*status, Json(value.clone())).into_response(),
        Some(Canned::Text(status, text)) => (*status, text.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "no canned reply").into_response(),
    }
}

/// Wrap a responder payload the way the production endpoint does.
pub fn envelope(reply: &str) -> Canned {
    Canned::Json(
        StatusCode::OK,
        serde_json::json!({ "success": true, "response": reply, "agentId": "stub" }),
    )
}
