//! Dispute workflows built on top of the responder wrappers.

mod investigation;
mod resolution;

pub use investigation::{
    AgentFailure, CaseAssessment, Findings, InvestigationRequest, EVIDENCE_LABEL,
    MERCHANT_LABEL, REG_E_WINDOW_DAYS, RISK_LABEL,
};
pub use resolution::ResolvedDispute;

use crate::agent::AgentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("{agent} failed: {source}")]
    Agent {
        agent: &'static str,
        #[source]
        source: AgentError,
    },
}

impl WorkflowError {
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::MissingField(field) => format!("Please provide '{field}'."),
            WorkflowError::Agent { source, .. } => source.user_message(),
        }
    }
}
