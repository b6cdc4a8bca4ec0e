use dispute_core::agent::{AgentClient, AgentResult};
use dispute_core::dispatch::Dispatcher;
use dispute_core::domain::{AgentRequest, Decision};
use dispute_core::inputs::ResolutionOrder;
use dispute_core::workflow::{InvestigationRequest, WorkflowError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("context file {path:?} must contain a JSON object")]
    ContextNotObject { path: PathBuf },
    #[error(
        "agent call failed: {message}{}",
        .raw.as_deref().map(|raw| format!("\nraw response: {raw}")).unwrap_or_default()
    )]
    AgentFailed {
        message: String,
        raw: Option<String>,
    },
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    debug!(path = %path.display(), "Reading JSON input");
    let content = fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CommandError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_context(path: &Path) -> Result<Map<String, Value>, CommandError> {
    match read_json::<Value>(path)? {
        Value::Object(map) => Ok(map),
        _ => Err(CommandError::ContextNotObject {
            path: path.to_path_buf(),
        }),
    }
}

pub async fn ask<D: Dispatcher>(
    client: &AgentClient<D>,
    responder: String,
    message: String,
    context: Option<&Path>,
) -> Result<Value, CommandError> {
    let mut request = AgentRequest::new(responder, message);
    if let Some(path) = context {
        request = request.with_context(read_context(path)?);
    }

    ask_outcome(client.call(request).await)
}

fn ask_outcome(result: AgentResult<Value>) -> Result<Value, CommandError> {
    match result {
        AgentResult::Failure { error, raw } => Err(CommandError::AgentFailed {
            message: error.to_string(),
            raw,
        }),
        success => Ok(json!(success)),
    }
}

pub async fn investigate<D: Dispatcher>(
    client: &AgentClient<D>,
    input: &Path,
    summarize: bool,
) -> Result<Value, CommandError> {
    let request: InvestigationRequest = read_json(input)?;
    let assessment = client.investigate(&request, summarize).await?;

    Ok(json!({
        "success": true,
        "message": assessment.status_message(),
        "requiresHumanReview": assessment.requires_human_review,
        "dispute": assessment,
    }))
}

pub async fn resolve<D: Dispatcher>(
    client: &AgentClient<D>,
    order: ResolutionOrder,
) -> Result<Value, CommandError> {
    let resolved = client.resolve(&order).await?;
    let verb = match order.decision {
        Decision::Approve => "approved",
        Decision::Deny => "denied",
    };

    Ok(json!({
        "success": true,
        "message": format!("Dispute {verb} successfully"),
        "dispute": resolved,
    }))
}
