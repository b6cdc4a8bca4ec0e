//! Agent invocation facade.
//!
//! [`AgentClient::call`] sends one envelope to one responder and always comes
//! back with an [`AgentResult`]; transport, timeout and parse failures are
//! reported in the value and logged, never raised.

mod envelope;
mod errors;
mod parser;
mod result;


pub use envelope::{compose_message, context_map};
pub use errors::{AgentError, BATCH_MEMBER_FAILURE};
pub use parser::{outermost_object, parse_reply, strip_code_fence};
pub use result::AgentResult;

use crate::config::AgentsConfig;
use crate::domain::{AgentRequest, Responder};
use crate::infrastructure::dispatch::{Dispatcher, HttpDispatcher};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::timeout;
use tracing::{debug, warn};

pub struct AgentClient<D: Dispatcher> {
    dispatcher: D,
    config: AgentsConfig,
}

impl AgentClient<HttpDispatcher> {
    /// Client posting to the configured HTTP endpoint.
    pub fn from_config(config: AgentsConfig) -> Self {
        let dispatcher = HttpDispatcher::from_config(&config);
        Self::new(dispatcher, config)
    }
}

impl<D: Dispatcher> AgentClient<D> {
    pub fn new(dispatcher: D, config: AgentsConfig) -> Self {
        Self { dispatcher, config }
    }

    pub fn config(&self) -> &AgentsConfig {
        &self.config
    }

    /// Send one request and parse the reply into `T`.
    pub async fn call<T: DeserializeOwned>(&self, request: AgentRequest) -> AgentResult<T> {
        let result = self.execute(&request).await;
        if let AgentResult::Failure { error, raw } = &result {
            warn!(
                agent = request.display_name.as_str(),
                agent_id = request.agent_id.as_str(),
                %error,
                raw_response = raw.as_deref(),
                "Error calling agent"
            );
        }
        result
    }

    /// Address a configured responder with `input` as the context data.
    pub async fn call_responder<T, C>(
        &self,
        responder: Responder,
        instruction: String,
        input: &C,
    ) -> AgentResult<T>
    where
        T: DeserializeOwned,
        C: Serialize,
    {
        let agent_id = self.config.responder_id(responder).to_string();
        let request = AgentRequest::new(agent_id.clone(), instruction)
            .with_display_name(responder.display_name());

        match context_map(&agent_id, input) {
            Ok(context) => self.call(request.with_context(context)).await,
            Err(error) => {
                warn!(agent = responder.display_name(), %error, "Error calling agent");
                AgentResult::failure(error)
            }
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: &AgentRequest) -> AgentResult<T> {
        if request.agent_id.trim().is_empty() {
            return AgentResult::failure(AgentError::InvalidRequest(
                "responder identifier must not be empty".into(),
            ));
        }
        if request.instruction.trim().is_empty() {
            return AgentResult::failure(AgentError::InvalidRequest(
                "instruction must not be empty".into(),
            ));
        }

        let message = compose_message(&request.instruction, request.context.as_ref());
        debug!(
            agent_id = request.agent_id.as_str(),
            has_context = request.context.is_some(),
            "Calling agent"
        );

        let raw = match timeout(
            self.config.timeout,
            self.dispatcher.dispatch(&request.agent_id, &message),
        )
        .await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(error)) => return AgentResult::failure(error.into()),
            Err(_) => {
                return AgentResult::failure(AgentError::Timeout {
                    agent: request.agent_id.clone(),
                    timeout: self.config.timeout,
                });
            }
        };

        match parse_reply::<T>(&raw) {
            Ok(data) => AgentResult::success(data, raw),
            Err(error) => AgentResult::failure_with_raw(error, raw),
        }
    }
}
