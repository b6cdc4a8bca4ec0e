use super::errors::AgentError;
use serde::{Serialize, Serializer};

/// Outcome of one agent call. Failures are values, never panics.
#[derive(Debug)]
pub enum AgentResult<T> {
    Success {
        data: T,
        raw: String,
    },
    Failure {
        error: AgentError,
        /// Reply text, when the responder answered but the answer was unusable.
        raw: Option<String>,
    },
}

impl<T> AgentResult<T> {
    pub fn success(data: T, raw: impl Into<String>) -> Self {
        Self::Success {
            data,
            raw: raw.into(),
        }
    }

    pub fn failure(error: AgentError) -> Self {
        Self::Failure { error, raw: None }
    }

    pub fn failure_with_raw(error: AgentError, raw: impl Into<String>) -> Self {
        Self::Failure {
            error,
            raw: Some(raw.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AgentResult::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            AgentResult::Success { data, .. } => Some(data),
            AgentResult::Failure { .. } => None,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        match self {
            AgentResult::Success { raw, .. } => Some(raw),
            AgentResult::Failure { raw, .. } => raw.as_deref(),
        }
    }

    pub fn error(&self) -> Option<&AgentError> {
        match self {
            AgentResult::Success { .. } => None,
            AgentResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn map<U, F>(self, f: F) -> AgentResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            AgentResult::Success { data, raw } => AgentResult::Success { data: f(data), raw },
            AgentResult::Failure { error, raw } => AgentResult::Failure { error, raw },
        }
    }

    pub fn into_result(self) -> Result<T, AgentError> {
        match self {
            AgentResult::Success { data, .. } => Ok(data),
            AgentResult::Failure { error, .. } => Err(error),
        }
    }
}

// Same shape the dispatch clients already consume:
// `{ success, data?, error?, rawResponse? }`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResult<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_response: Option<&'a str>,
}

impl<T: Serialize> Serialize for AgentResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            AgentResult::Success { data, raw } => WireResult {
                success: true,
                data: Some(data),
                error: None,
                raw_response: Some(raw.as_str()),
            },
            AgentResult::Failure { error, raw } => WireResult {
                success: false,
                data: None,
                error: Some(error.to_string()),
                raw_response: raw.as_deref(),
            },
        };
        wire.serialize(serializer)
    }
}
