use crate::infrastructure::dispatch::DispatchError;
use std::time::Duration;
use thiserror::Error;

/// Generic message stored for a batch member that never produced a result.
pub const BATCH_MEMBER_FAILURE: &str = "agent call failed";

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid agent request: {0}")]
    InvalidRequest(String),
    #[error("failed to build context for agent '{agent}': {reason}")]
    Context { agent: String, reason: String },
    #[error(transparent)]
    Transport(#[from] DispatchError),
    #[error("agent '{agent}' did not reply within {}s", .timeout.as_secs_f64())]
    Timeout { agent: String, timeout: Duration },
    #[error("failed to parse agent response as JSON: {0}")]
    MalformedPayload(String),
    #[error("agent call failed")]
    BatchMember { label: String },
}

impl AgentError {
    pub fn is_transport(&self) -> bool {
        matches!(self, AgentError::Transport(_) | AgentError::Timeout { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            AgentError::Transport(err) => err.user_message(),
            AgentError::Timeout { agent, .. } => {
                format!("The {agent} service took too long to answer. Please try again.")
            }
            AgentError::MalformedPayload(_) => {
                "The assistant returned an answer we could not understand. Please try again."
                    .to_string()
            }
            AgentError::InvalidRequest(_) | AgentError::Context { .. } => {
                "The request could not be prepared for the assistant.".to_string()
            }
            AgentError::BatchMember { .. } => {
                "Part of the investigation could not be completed.".to_string()
            }
        }
    }
}
