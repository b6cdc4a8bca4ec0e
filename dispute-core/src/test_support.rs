//! Canned responder replies and inputs shared by unit tests.

use crate::domain::inputs::{AccountInfo, DeviceFingerprint, GpsPing, PriorDispute, TransactionDetails};
use crate::workflow::InvestigationRequest;

pub const MERCHANT_REPLY: &str = r#"{
  "decodedMerchantName": "Joe's Coffee Shop",
  "merchantType": "Coffee Shop",
  "merchantLocation": "123 Main St, San Francisco, CA",
  "isSubscription": false,
  "subscriptionPattern": "",
  "customerHistory": {
    "previousTransactions": 12,
    "firstTransactionDate": "2024-01-15",
    "averageAmount": 6.5,
    "frequency": "weekly"
  },
  "contextualNote": "You've visited this coffee shop about once a week for the past 6 months."
}"#;

pub fn evidence_reply(overall_correlation_score: f64) -> String {
    format!(
        r#"{{
  "gpsCorrelation": {{
    "matched": true,
    "customerLocationAtTime": "Within 0.2 miles of merchant location",
    "transactionLocation": "123 Main St, San Francisco, CA",
    "distanceInMiles": 0.15,
    "correlationScore": 92
  }},
  "deviceCorrelation": {{
    "matched": true,
    "transactionDeviceId": "device-abc123",
    "knownDevices": ["device-abc123", "device-xyz789"],
    "correlationScore": 95
  }},
  "familyUsageIndicators": {{
    "potentialFamilyUse": false,
    "authorizedUsers": [],
    "usagePattern": "No family usage pattern detected",
    "confidence": 85
  }},
  "overallCorrelationScore": {overall_correlation_score},
  "evidenceSummary": "GPS location matches merchant location.",
  "fraudIndicators": [],
  "legitimacyIndicators": ["Transaction made from known device"]
}}"#
    )
}

pub fn risk_reply(risk_level: &str, friendly_fraud_probability: f64) -> String {
    format!(
        r#"{{
  "accountHealth": {{
    "tenureMonths": 24,
    "accountStatus": "excellent",
    "averageMonthlyDeposits": 3500,
    "currentBalance": 2450,
    "overdraftHistory": false
  }},
  "disputeHistory": {{
    "totalDisputes": 1,
    "disputesLast12Months": 1,
    "approvedDisputes": 1,
    "deniedDisputes": 0,
    "totalDisputedAmount": 45.0,
    "patternDetected": "Low dispute activity"
  }},
  "fraudDatabaseFlags": {{ "flagged": false, "flagType": "None", "severity": "none" }},
  "friendlyFraudProbability": {friendly_fraud_probability},
  "riskLevel": "{risk_level}",
  "riskFactors": [],
  "protectiveFactors": ["Long account tenure"],
  "provisionalCreditRecommendation": {{
    "recommended": true,
    "amount": 45.0,
    "reasoning": "Excellent account health.",
    "conditions": "Standard monitoring"
  }},
  "analystNotes": "Low-risk customer.",
  "recommendedAction": "approve"
}}"#
    )
}

pub const CASE_SUMMARY_REPLY: &str = r#"{
  "summary": "Customer does not recognize a coffee shop charge.",
  "recommendedNextStep": "Show purchase history at this merchant.",
  "conversationPoints": ["Show decoded merchant name"],
  "requiresHumanReview": false,
  "confidenceScore": 88
}"#;

pub const RESOLUTION_REPLY: &str = r#"{
  "provisionalCreditProcessed": true,
  "provisionalCreditAmount": 45.0,
  "chargebackFiled": true,
  "chargebackReasonCode": "10.4",
  "outcomeMessage": "We've issued a provisional credit of $45.00.",
  "nextSteps": ["Provisional credit will appear within 1 business day"],
  "estimatedResolutionDate": "2026-03-15"
}"#;

pub fn investigation_request() -> InvestigationRequest {
    InvestigationRequest {
        customer_id: "cust-001".into(),
        customer_message: "I don't recognize this coffee charge".into(),
        transaction: TransactionDetails {
            id: "txn-001".into(),
            raw_merchant_descriptor: "SQ *JOES COFFEE".into(),
            amount: 6.5,
            transaction_date: "2026-01-30".into(),
            transaction_time: Some("08:45 AM".into()),
            merchant_location: Some("123 Main St, San Francisco, CA".into()),
            latitude: Some(37.7749),
            longitude: Some(-122.4194),
            device_id: Some("device-abc123".into()),
        },
        customer: AccountInfo {
            id: "cust-001".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
            account_created_at: "2024-01-01".into(),
            average_monthly_deposits: 3500.0,
            current_balance: 2450.0,
            account_status: "excellent".into(),
        },
        gps_history: vec![GpsPing {
            latitude: 37.775,
            longitude: -122.4195,
            timestamp: "2026-01-30T08:45:00Z".into(),
            accuracy: Some(10.0),
        }],
        device_fingerprints: vec![DeviceFingerprint {
            device_id: "device-abc123".into(),
            device_type: "mobile".into(),
            last_used: "2026-01-30".into(),
        }],
        authorized_users: Vec::new(),
        dispute_history: vec![PriorDispute {
            id: "prev-1".into(),
            amount: 45.0,
            status: "approved".into(),
            created_at: "2025-06-15".into(),
        }],
        fraud_flags: Vec::new(),
    }
}
