//! Typed replies of each responder.
//!
//! Field names follow the camelCase JSON the dispatch endpoint emits. Every
//! required field must be present; the parser rejects a reply that does not
//! fit the schema instead of filling in defaults.

use super::dispute::{RecommendedAction, RiskLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantIntelligence {
    pub decoded_merchant_name: String,
    pub merchant_type: String,
    pub merchant_location: String,
    pub is_subscription: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_pattern: Option<String>,
    pub customer_history: MerchantCustomerHistory,
    pub contextual_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantCustomerHistory {
    pub previous_transactions: u32,
    pub first_transaction_date: String,
    pub average_amount: f64,
    pub frequency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceCorrelation {
    pub gps_correlation: GpsCorrelation,
    pub device_correlation: DeviceCorrelation,
    pub family_usage_indicators: FamilyUsageIndicators,
    pub overall_correlation_score: f64,
    pub evidence_summary: String,
    pub fraud_indicators: Vec<String>,
    pub legitimacy_indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsCorrelation {
    pub matched: bool,
    pub customer_location_at_time: String,
    pub transaction_location: String,
    pub distance_in_miles: f64,
    pub correlation_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCorrelation {
    pub matched: bool,
    pub transaction_device_id: String,
    pub known_devices: Vec<String>,
    pub correlation_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyUsageIndicators {
    pub potential_family_use: bool,
    pub authorized_users: Vec<String>,
    pub usage_pattern: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoring {
    pub account_health: AccountHealth,
    pub dispute_history: DisputeHistorySummary,
    pub fraud_database_flags: FraudDatabaseFlags,
    pub friendly_fraud_probability: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub protective_factors: Vec<String>,
    pub provisional_credit_recommendation: ProvisionalCreditRecommendation,
    pub analyst_notes: String,
    pub recommended_action: RecommendedAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHealth {
    pub tenure_months: u32,
    pub account_status: String,
    pub average_monthly_deposits: f64,
    pub current_balance: f64,
    pub overdraft_history: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeHistorySummary {
    pub total_disputes: u32,
    pub disputes_last12_months: u32,
    pub approved_disputes: u32,
    pub denied_disputes: u32,
    pub total_disputed_amount: f64,
    pub pattern_detected: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudDatabaseFlags {
    pub flagged: bool,
    pub flag_type: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionalCreditRecommendation {
    pub recommended: bool,
    pub amount: f64,
    pub reasoning: String,
    pub conditions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    pub summary: String,
    pub recommended_next_step: String,
    pub conversation_points: Vec<String>,
    pub requires_human_review: bool,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub provisional_credit_processed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisional_credit_amount: Option<f64>,
    pub chargeback_filed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback_reason_code: Option<String>,
    pub outcome_message: String,
    pub next_steps: Vec<String>,
    pub estimated_resolution_date: String,
}

/// Reply of any responder, tagged by which responder produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum AgentPayload {
    MerchantIntelligence(MerchantIntelligence),
    EvidenceCorrelation(EvidenceCorrelation),
    RiskScoring(RiskScoring),
    CaseSummary(CaseSummary),
    Resolution(Resolution),
}

impl AgentPayload {
    pub fn into_merchant_intelligence(self) -> Option<MerchantIntelligence> {
        match self {
            AgentPayload::MerchantIntelligence(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn into_evidence_correlation(self) -> Option<EvidenceCorrelation> {
        match self {
            AgentPayload::EvidenceCorrelation(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn into_risk_scoring(self) -> Option<RiskScoring> {
        match self {
            AgentPayload::RiskScoring(payload) => Some(payload),
            _ => None,
        }
    }
}

impl From<MerchantIntelligence> for AgentPayload {
    fn from(value: MerchantIntelligence) -> Self {
        AgentPayload::MerchantIntelligence(value)
    }
}

impl From<EvidenceCorrelation> for AgentPayload {
    fn from(value: EvidenceCorrelation) -> Self {
        AgentPayload::EvidenceCorrelation(value)
    }
}

impl From<RiskScoring> for AgentPayload {
    fn from(value: RiskScoring) -> Self {
        AgentPayload::RiskScoring(value)
    }
}

impl From<CaseSummary> for AgentPayload {
    fn from(value: CaseSummary) -> Self {
        AgentPayload::CaseSummary(value)
    }
}

impl From<Resolution> for AgentPayload {
    fn from(value: Resolution) -> Self {
        AgentPayload::Resolution(value)
    }
}
