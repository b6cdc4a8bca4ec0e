//! reqwest-backed dispatcher

use super::reply::{extract_error_text, extract_reply_text};
use super::traits::Dispatcher;
use super::types::{DispatchBody, DispatchError};
use crate::config::AgentsConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

/// Posts envelopes to a single dispatch endpoint.
#[derive(Clone)]
pub struct HttpDispatcher {
    endpoint: String,
    api_key: Option<String>,
    http: Client,
}

impl HttpDispatcher {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &AgentsConfig) -> Self {
        Self::new(config.endpoint.clone(), config.api_key.clone())
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, agent_id: &str, message: &str) -> Result<String, DispatchError> {
        let body = DispatchBody { agent_id, message };

        info!(
            agent = agent_id,
            endpoint = self.endpoint.as_str(),
            message_len = message.len(),
            "Dispatching agent request"
        );

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DispatchError::network(agent_id, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = extract_error_text(&text)
                .unwrap_or_else(|| format!("agent API error: {}", status.as_u16()));
            return Err(DispatchError::status(agent_id, status, message));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DispatchError::body(agent_id, e))?;

        debug!(agent = agent_id, status = status.as_u16(), "Received agent reply");
        Ok(extract_reply_text(&text))
    }
}
