//! Inputs handed to the responder wrappers. Each one is also sent verbatim
//! as the call's context data.

use super::dispute::Decision;
use super::payloads::{EvidenceCorrelation, MerchantIntelligence, RiskScoring};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub id: String,
    pub raw_merchant_descriptor: String,
    pub amount: f64,
    pub transaction_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub account_created_at: String,
    pub average_monthly_deposits: f64,
    pub current_balance: f64,
    pub account_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsPing {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceFingerprint {
    pub device_id: String,
    pub device_type: String,
    pub last_used: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorDispute {
    pub id: String,
    pub amount: f64,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudFlag {
    pub flag_type: String,
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Merchant descriptor decoding request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantLookup {
    pub raw_merchant_descriptor: String,
    pub amount: f64,
    pub transaction_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_history: Option<Value>,
}

impl MerchantLookup {
    pub fn from_transaction(transaction: &TransactionDetails) -> Self {
        Self {
            raw_merchant_descriptor: transaction.raw_merchant_descriptor.clone(),
            amount: transaction.amount,
            transaction_date: transaction.transaction_date.clone(),
            location: transaction.merchant_location.clone(),
            customer_history: None,
        }
    }
}

/// Forensic evidence around a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceBundle {
    pub transaction: TransactionDetails,
    #[serde(default)]
    pub gps_history: Vec<GpsPing>,
    #[serde(default)]
    pub device_fingerprints: Vec<DeviceFingerprint>,
    #[serde(default)]
    pub authorized_users: Vec<AuthorizedUser>,
}

/// Account standing used for fraud risk scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub account_info: AccountInfo,
    #[serde(default)]
    pub dispute_history: Vec<PriorDispute>,
    #[serde(default)]
    pub fraud_flags: Vec<FraudFlag>,
    pub transaction_amount: f64,
}

/// Intake conversation state handed to the case manager, with whatever
/// sub-agent findings are already available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseIntake {
    pub customer_id: String,
    pub transaction_id: String,
    pub customer_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_intelligence: Option<MerchantIntelligence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_correlation: Option<EvidenceCorrelation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_scoring: Option<RiskScoring>,
}

/// Analyst decision to execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionOrder {
    pub dispute_id: String,
    pub decision: Decision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisional_credit_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyst_notes: Option<String>,
}
