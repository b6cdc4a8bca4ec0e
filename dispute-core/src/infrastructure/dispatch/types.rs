//! Dispatch types - wire body and error types

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// JSON body posted to the dispatch endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchBody<'a> {
    pub agent_id: &'a str,
    pub message: &'a str,
}

/// Dispatch errors
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("network error calling agent '{agent}': {source}")]
    Network {
        agent: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{message}")]
    Status {
        agent: String,
        status: StatusCode,
        message: String,
    },
    #[error("failed to read reply body from agent '{agent}': {source}")]
    Body {
        agent: String,
        #[source]
        source: reqwest::Error,
    },
}

impl DispatchError {
    pub fn network(agent: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            agent: agent.into(),
            source,
        }
    }

    pub fn status(agent: impl Into<String>, status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            agent: agent.into(),
            status,
            message: message.into(),
        }
    }

    pub fn body(agent: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Body {
            agent: agent.into(),
            source,
        }
    }

    /// HTTP status of the failed call, when the endpoint answered at all.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            DispatchError::Status { status, .. } => Some(*status),
            DispatchError::Network { source, .. } | DispatchError::Body { source, .. } => {
                source.status()
            }
        }
    }

    /// User-facing message
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::Network { agent, source } => {
                if source.is_connect() {
                    format!("Could not reach the {agent} service.")
                } else if source.is_timeout() {
                    format!("The {agent} service took too long to answer.")
                } else {
                    format!("Network error while contacting {agent}.")
                }
            }
            DispatchError::Status { agent, status, .. } => match *status {
                StatusCode::NOT_FOUND => format!("The {agent} endpoint was not found."),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    format!("The {agent} service rejected our credentials.")
                }
                StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                    format!("The {agent} service is temporarily unavailable.")
                }
                other => format!("The {agent} request failed with status {}.", other.as_u16()),
            },
            DispatchError::Body { agent, .. } => {
                format!("The {agent} service sent an unreadable reply.")
            }
        }
    }
}
