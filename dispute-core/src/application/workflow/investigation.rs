use super::WorkflowError;
use crate::agent::{AgentClient, AgentResult};
use crate::batch::{NamedTask, dispatch_all};
use crate::domain::inputs::{
    AccountInfo, AuthorizedUser, CaseIntake, DeviceFingerprint, EvidenceBundle, FraudFlag,
    GpsPing, MerchantLookup, PriorDispute, RiskProfile, TransactionDetails,
};
use crate::domain::payloads::{CaseSummary, EvidenceCorrelation, MerchantIntelligence, RiskScoring};
use crate::domain::{AgentPayload, DisputeStatus, Priority, RecommendedAction, RiskLevel};
use crate::infrastructure::dispatch::Dispatcher;
use chrono::{DateTime, Duration, Utc};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;

pub const MERCHANT_LABEL: &str = "merchantIntelligence";
pub const EVIDENCE_LABEL: &str = "evidenceCorrelation";
pub const RISK_LABEL: &str = "riskScoring";

/// Regulation E provisional-credit window.
pub const REG_E_WINDOW_DAYS: i64 = 10;

const FRIENDLY_FRAUD_REVIEW_THRESHOLD: f64 = 50.0;
const CORRELATION_REVIEW_THRESHOLD: f64 = 70.0;
const NEUTRAL_CORRELATION: f64 = 50.0;

/// Everything known about a disputed charge at intake time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationRequest {
    pub customer_id: String,
    pub customer_message: String,
    pub transaction: TransactionDetails,
    pub customer: AccountInfo,
    #[serde(default)]
    pub gps_history: Vec<GpsPing>,
    #[serde(default)]
    pub device_fingerprints: Vec<DeviceFingerprint>,
    #[serde(default)]
    pub authorized_users: Vec<AuthorizedUser>,
    #[serde(default)]
    pub dispute_history: Vec<PriorDispute>,
    #[serde(default)]
    pub fraud_flags: Vec<FraudFlag>,
}

impl InvestigationRequest {
    fn validate(&self) -> Result<(), WorkflowError> {
        if self.transaction.id.trim().is_empty() {
            return Err(WorkflowError::MissingField("transaction.id"));
        }
        if self.customer_id.trim().is_empty() {
            return Err(WorkflowError::MissingField("customerId"));
        }
        if self.customer_message.trim().is_empty() {
            return Err(WorkflowError::MissingField("customerMessage"));
        }
        Ok(())
    }

    fn merchant_lookup(&self) -> MerchantLookup {
        MerchantLookup::from_transaction(&self.transaction)
    }

    fn evidence_bundle(&self) -> EvidenceBundle {
        EvidenceBundle {
            transaction: self.transaction.clone(),
            gps_history: self.gps_history.clone(),
            device_fingerprints: self.device_fingerprints.clone(),
            authorized_users: self.authorized_users.clone(),
        }
    }

    fn risk_profile(&self) -> RiskProfile {
        RiskProfile {
            account_info: self.customer.clone(),
            dispute_history: self.dispute_history.clone(),
            fraud_flags: self.fraud_flags.clone(),
            transaction_amount: self.transaction.amount,
        }
    }
}

/// Successful sub-agent replies of one investigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub merchant_intelligence: Option<MerchantIntelligence>,
    pub evidence_correlation: Option<EvidenceCorrelation>,
    pub risk_scoring: Option<RiskScoring>,
}

impl Findings {
    /// Any of: friendly-fraud probability above 50, evidence correlation
    /// above 70, or an elevated risk level.
    pub fn requires_human_review(&self) -> bool {
        let friendly_fraud = self
            .risk_scoring
            .as_ref()
            .map_or(0.0, |risk| risk.friendly_fraud_probability);
        let correlation = self
            .evidence_correlation
            .as_ref()
            .map_or(0.0, |evidence| evidence.overall_correlation_score);
        let elevated = self
            .risk_scoring
            .as_ref()
            .is_some_and(|risk| risk.risk_level.is_elevated());

        friendly_fraud > FRIENDLY_FRAUD_REVIEW_THRESHOLD
            || correlation > CORRELATION_REVIEW_THRESHOLD
            || elevated
    }

    /// `100 - correlation`, with a neutral 50 when no evidence came back or
    /// the correlator scored it 0 (no evidence to correlate).
    pub fn fraud_likelihood_score(&self) -> u32 {
        let correlation = self
            .evidence_correlation
            .as_ref()
            .map(|evidence| evidence.overall_correlation_score)
            .filter(|score| *score != 0.0)
            .unwrap_or(NEUTRAL_CORRELATION);
        (100.0 - correlation).round().clamp(0.0, 100.0) as u32
    }

    pub fn priority(&self) -> Priority {
        match self.risk_scoring.as_ref().map(|risk| risk.risk_level) {
            Some(RiskLevel::High) => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// A labelled sub-agent that did not produce a usable reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFailure {
    pub label: String,
    pub error: String,
}

/// Case record produced by an investigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAssessment {
    pub id: String,
    pub case_number: String,
    pub customer_id: String,
    pub transaction_id: String,
    pub status: DisputeStatus,
    pub priority: Priority,
    pub customer_claim: String,
    pub requires_human_review: bool,
    pub fraud_likelihood_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_fraud_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<RecommendedAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_intelligence: Option<MerchantIntelligence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_correlation: Option<EvidenceCorrelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<RiskScoring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_summary: Option<CaseSummary>,
    pub failed_agents: Vec<AgentFailure>,
    pub provisional_credit_granted: bool,
    pub chargeback_filed: bool,
    pub reg_e_deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl CaseAssessment {
    pub fn build(
        request: &InvestigationRequest,
        findings: Findings,
        failed_agents: Vec<AgentFailure>,
        now: DateTime<Utc>,
    ) -> Self {
        let requires_human_review = findings.requires_human_review();
        let fraud_likelihood_score = findings.fraud_likelihood_score();
        let priority = findings.priority();
        let millis = now.timestamp_millis();

        let Findings {
            merchant_intelligence,
            evidence_correlation,
            risk_scoring,
        } = findings;

        Self {
            id: format!("dispute-{millis}"),
            case_number: case_number(millis),
            customer_id: request.customer_id.clone(),
            transaction_id: request.transaction.id.clone(),
            status: if requires_human_review {
                DisputeStatus::UnderReview
            } else {
                DisputeStatus::Investigating
            },
            priority,
            customer_claim: request.customer_message.clone(),
            requires_human_review,
            fraud_likelihood_score,
            friendly_fraud_probability: risk_scoring
                .as_ref()
                .map(|risk| risk.friendly_fraud_probability),
            risk_level: risk_scoring.as_ref().map(|risk| risk.risk_level),
            recommended_action: risk_scoring.as_ref().map(|risk| risk.recommended_action),
            merchant_intelligence,
            evidence_correlation,
            risk_assessment: risk_scoring,
            case_summary: None,
            failed_agents,
            provisional_credit_granted: false,
            chargeback_filed: false,
            reg_e_deadline: now + Duration::days(REG_E_WINDOW_DAYS),
            created_at: now,
        }
    }

    pub fn status_message(&self) -> &'static str {
        if self.requires_human_review {
            "Dispute created and sent for analyst review"
        } else {
            "Dispute investigation in progress"
        }
    }
}

fn case_number(millis: i64) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(5)
        .collect::<String>()
        .to_uppercase();
    format!("DSP-{millis}-{suffix}")
}

fn take_payload(
    results: &mut HashMap<String, AgentResult<AgentPayload>>,
    label: &str,
    failures: &mut Vec<AgentFailure>,
) -> Option<AgentPayload> {
    match results.remove(label) {
        Some(AgentResult::Success { data, .. }) => Some(data),
        Some(AgentResult::Failure { error, .. }) => {
            failures.push(AgentFailure {
                label: label.to_string(),
                error: error.to_string(),
            });
            None
        }
        None => None,
    }
}

impl<D: Dispatcher> AgentClient<D> {
    /// Run the merchant, evidence and risk responders in parallel and assess
    /// the dispute from whatever came back. Sub-agent failures are recorded in
    /// [`CaseAssessment::failed_agents`] rather than failing the investigation.
    pub async fn investigate(
        &self,
        request: &InvestigationRequest,
        summarize: bool,
    ) -> Result<CaseAssessment, WorkflowError> {
        request.validate()?;

        let lookup = request.merchant_lookup();
        let bundle = request.evidence_bundle();
        let profile = request.risk_profile();

        info!(
            customer_id = request.customer_id.as_str(),
            transaction_id = request.transaction.id.as_str(),
            "Starting parallel agent investigation"
        );

        let mut results = dispatch_all(vec![
            NamedTask::new(
                MERCHANT_LABEL,
                self.merchant_intelligence(&lookup)
                    .map(|result| result.map(AgentPayload::from)),
            ),
            NamedTask::new(
                EVIDENCE_LABEL,
                self.evidence_correlation(&bundle)
                    .map(|result| result.map(AgentPayload::from)),
            ),
            NamedTask::new(
                RISK_LABEL,
                self.risk_scoring(&profile)
                    .map(|result| result.map(AgentPayload::from)),
            ),
        ])
        .await;

        let mut failures = Vec::new();
        let findings = Findings {
            merchant_intelligence: take_payload(&mut results, MERCHANT_LABEL, &mut failures)
                .and_then(AgentPayload::into_merchant_intelligence),
            evidence_correlation: take_payload(&mut results, EVIDENCE_LABEL, &mut failures)
                .and_then(AgentPayload::into_evidence_correlation),
            risk_scoring: take_payload(&mut results, RISK_LABEL, &mut failures)
                .and_then(AgentPayload::into_risk_scoring),
        };

        if !failures.is_empty() {
            warn!(
                failed = failures.len(),
                "Investigation continuing without some agent findings"
            );
        }

        let mut assessment = CaseAssessment::build(request, findings, failures, Utc::now());

        if summarize {
            let intake = CaseIntake {
                customer_id: request.customer_id.clone(),
                transaction_id: request.transaction.id.clone(),
                customer_message: request.customer_message.clone(),
                merchant_intelligence: assessment.merchant_intelligence.clone(),
                evidence_correlation: assessment.evidence_correlation.clone(),
                risk_scoring: assessment.risk_assessment.clone(),
            };
            match self.case_summary(&intake).await {
                AgentResult::Success { data, .. } => assessment.case_summary = Some(data),
                AgentResult::Failure { error, .. } => assessment.failed_agents.push(AgentFailure {
                    label: "caseManager".to_string(),
                    error: error.to_string(),
                }),
            }
        }

        info!(
            case_number = assessment.case_number.as_str(),
            status = ?assessment.status,
            requires_human_review = assessment.requires_human_review,
            fraud_likelihood_score = assessment.fraud_likelihood_score,
            "Investigation complete"
        );

        Ok(assessment)
    }
}
