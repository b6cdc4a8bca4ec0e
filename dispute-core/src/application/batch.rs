//! Parallel dispatch of labelled agent calls.
//!
//! Every member runs to completion on the calling task; one member failing
//! early never cancels its siblings. Members that panic, or overrun the
//! optional per-member deadline, are recorded as [`AgentError::BatchMember`]
//! failures under their own label.

use crate::agent::{AgentError, AgentResult};
use futures::FutureExt;
use futures::future::{BoxFuture, join_all};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};

/// A label paired with an in-flight agent call.
pub struct NamedTask<'a, T> {
    pub label: String,
    pub call: BoxFuture<'a, AgentResult<T>>,
}

impl<'a, T> NamedTask<'a, T> {
    pub fn new<F>(label: impl Into<String>, call: F) -> Self
    where
        F: Future<Output = AgentResult<T>> + Send + 'a,
    {
        Self {
            label: label.into(),
            call: call.boxed(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("duplicate batch label '{0}'")]
    DuplicateLabel(String),
    #[error("batch labels must not be empty")]
    EmptyLabel,
}

impl BatchError {
    pub fn user_message(&self) -> String {
        match self {
            BatchError::DuplicateLabel(label) => {
                format!("The agent call '{label}' was added twice.")
            }
            BatchError::EmptyLabel => "Every agent call needs a label.".to_string(),
        }
    }
}

/// Run every task and collect the outcomes by label.
///
/// Labels should be unique. When they are not, the entry later in `tasks`
/// overwrites the earlier one; use [`Batch`] to reject duplicates instead.
pub async fn dispatch_all<T>(tasks: Vec<NamedTask<'_, T>>) -> HashMap<String, AgentResult<T>> {
    settle(tasks, None).await
}

/// Like [`dispatch_all`], but a member still pending after `deadline` is
/// recorded as failed.
pub async fn dispatch_all_within<T>(
    tasks: Vec<NamedTask<'_, T>>,
    deadline: Duration,
) -> HashMap<String, AgentResult<T>> {
    settle(tasks, Some(deadline)).await
}

async fn settle<T>(
    tasks: Vec<NamedTask<'_, T>>,
    deadline: Option<Duration>,
) -> HashMap<String, AgentResult<T>> {
    debug!(members = tasks.len(), "Starting parallel agent batch");

    let settled = join_all(tasks.into_iter().map(|task| async move {
        let NamedTask { label, call } = task;
        let guarded = AssertUnwindSafe(call).catch_unwind();
        let outcome = match deadline {
            Some(limit) => timeout(limit, guarded).await.ok(),
            None => Some(guarded.await),
        };

        let result = match outcome {
            Some(Ok(result)) => result,
            Some(Err(_)) => {
                warn!(label = label.as_str(), "Agent call panicked inside batch");
                AgentResult::failure(AgentError::BatchMember {
                    label: label.clone(),
                })
            }
            None => {
                warn!(label = label.as_str(), "Agent call exceeded batch deadline");
                AgentResult::failure(AgentError::BatchMember {
                    label: label.clone(),
                })
            }
        };
        (label, result)
    }))
    .await;

    let mut results = HashMap::with_capacity(settled.len());
    for (label, result) in settled {
        if results.contains_key(&label) {
            debug!(label = label.as_str(), "Duplicate batch label, keeping later result");
        }
        results.insert(label, result);
    }
    results
}

/// Batch builder that refuses duplicate or empty labels.
pub struct Batch<'a, T> {
    tasks: Vec<NamedTask<'a, T>>,
    labels: HashSet<String>,
    deadline: Option<Duration>,
}

impl<'a, T> Default for Batch<'a, T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            labels: HashSet::new(),
            deadline: None,
        }
    }
}

impl<'a, T> Batch<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn add<F>(&mut self, label: impl Into<String>, call: F) -> Result<&mut Self, BatchError>
    where
        F: Future<Output = AgentResult<T>> + Send + 'a,
    {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(BatchError::EmptyLabel);
        }
        if !self.labels.insert(label.clone()) {
            return Err(BatchError::DuplicateLabel(label));
        }
        self.tasks.push(NamedTask::new(label, call));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub async fn run(self) -> HashMap<String, AgentResult<T>> {
        settle(self.tasks, self.deadline).await
    }
}
