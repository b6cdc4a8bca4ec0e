use super::WorkflowError;
use crate::agent::AgentClient;
use crate::domain::inputs::ResolutionOrder;
use crate::domain::payloads::Resolution;
use crate::domain::{Decision, DisputeStatus};
use crate::infrastructure::dispatch::Dispatcher;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

/// Dispute record after an analyst decision has been executed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDispute {
    pub id: String,
    pub status: DisputeStatus,
    pub analyst_decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyst_notes: Option<String>,
    pub analyst_decision_date: DateTime<Utc>,
    pub provisional_credit_granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisional_credit_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisional_credit_date: Option<DateTime<Utc>>,
    pub chargeback_filed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargeback_reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargeback_filed_date: Option<DateTime<Utc>>,
    pub outcome_notified: bool,
    pub outcome_message: String,
    pub next_steps: Vec<String>,
    pub estimated_resolution_date: String,
    pub resolved_at: DateTime<Utc>,
}

impl ResolvedDispute {
    pub fn build(order: &ResolutionOrder, resolution: Resolution, now: DateTime<Utc>) -> Self {
        let credit_processed = resolution.provisional_credit_processed;
        let chargeback_filed = resolution.chargeback_filed;

        Self {
            id: order.dispute_id.clone(),
            status: order.decision.resulting_status(),
            analyst_decision: order.decision,
            analyst_notes: order.analyst_notes.clone(),
            analyst_decision_date: now,
            provisional_credit_granted: credit_processed,
            provisional_credit_amount: resolution.provisional_credit_amount,
            provisional_credit_date: credit_processed.then_some(now),
            chargeback_filed,
            chargeback_reason_code: resolution.chargeback_reason_code,
            chargeback_filed_date: chargeback_filed.then_some(now),
            outcome_notified: true,
            outcome_message: resolution.outcome_message,
            next_steps: resolution.next_steps,
            estimated_resolution_date: resolution.estimated_resolution_date,
            resolved_at: now,
        }
    }
}

impl<D: Dispatcher> AgentClient<D> {
    /// Execute an analyst decision through the resolution responder. Unlike
    /// an investigation, this needs the responder's reply to succeed.
    pub async fn resolve(&self, order: &ResolutionOrder) -> Result<ResolvedDispute, WorkflowError> {
        if order.dispute_id.trim().is_empty() {
            return Err(WorkflowError::MissingField("disputeId"));
        }

        info!(
            dispute_id = order.dispute_id.as_str(),
            decision = %order.decision,
            "Processing dispute resolution"
        );

        let resolution = self.resolution(order).await.into_result().map_err(|source| {
            error!(dispute_id = order.dispute_id.as_str(), %source, "Resolution agent failed");
            WorkflowError::Agent {
                agent: "Resolution Agent",
                source,
            }
        })?;

        Ok(ResolvedDispute::build(order, resolution, Utc::now()))
    }
}
